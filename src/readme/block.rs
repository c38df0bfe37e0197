//! Help block splicing
//!
//! Locates the marker pair in a document and replaces everything between
//! them with a fenced copy of the help text.

use crate::config::Config;
use crate::error::{DocumentError, DocumentResult};

/// The literal strings bounding the help block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

/// Byte offsets of a located help block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Offset of the first byte of the start marker
    pub start: usize,
    /// Offset of the first byte after the end marker
    pub end: usize,
    /// Offset just past the start marker
    inner_start: usize,
    /// Offset of the first byte of the end marker
    inner_end: usize,
}

/// Layout of the replacement region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpBlock<'a> {
    pub markers: &'a Markers,
    pub fence: &'a str,
}

impl Markers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Markers {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Markers::new(config.markers.start.clone(), config.markers.end.clone())
    }

    /// Find the unique start and end markers in `doc`
    pub fn locate(&self, doc: &str) -> DocumentResult<BlockSpan> {
        if self.start.is_empty() || self.end.is_empty() {
            return Err(DocumentError::EmptyMarker);
        }

        let start = find_unique(doc, &self.start)?;
        let end = find_unique(doc, &self.end)?;

        if end < start + self.start.len() {
            return Err(DocumentError::MarkersOutOfOrder {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }

        Ok(BlockSpan {
            start,
            end: end + self.end.len(),
            inner_start: start + self.start.len(),
            inner_end: end,
        })
    }

    /// Current content between the markers
    pub fn inner<'d>(&self, doc: &'d str) -> DocumentResult<&'d str> {
        let span = self.locate(doc)?;
        Ok(&doc[span.inner_start..span.inner_end])
    }
}

impl Default for Markers {
    fn default() -> Self {
        Markers::from_config(&Config::default())
    }
}

impl<'a> HelpBlock<'a> {
    pub fn new(markers: &'a Markers, fence: &'a str) -> Self {
        HelpBlock { markers, fence }
    }

    /// Render the markers plus the fenced help text
    pub fn render(&self, help_text: &str) -> String {
        let mut out = String::with_capacity(
            self.markers.start.len() + self.markers.end.len() + 2 * self.fence.len() + help_text.len() + 4,
        );
        out.push_str(&self.markers.start);
        out.push('\n');
        out.push_str(self.fence);
        out.push('\n');
        out.push_str(help_text);
        out.push('\n');
        out.push_str(self.fence);
        out.push('\n');
        out.push_str(&self.markers.end);
        out
    }

    /// Replace the help block in `doc`, keeping everything outside it verbatim
    ///
    /// The help text is inserted exactly as captured. Help text containing
    /// either marker is rejected, since the result could not be synced again.
    pub fn splice(&self, doc: &str, help_text: &str) -> DocumentResult<String> {
        let span = self.markers.locate(doc)?;

        for marker in [&self.markers.start, &self.markers.end] {
            if help_text.contains(marker.as_str()) {
                return Err(DocumentError::MarkerInHelpText(marker.clone()));
            }
        }

        let mut out = String::with_capacity(doc.len() + help_text.len());
        out.push_str(&doc[..span.start]);
        out.push_str(&self.render(help_text));
        out.push_str(&doc[span.end..]);
        Ok(out)
    }
}

/// Byte offset of the only occurrence of `needle`
fn find_unique(haystack: &str, needle: &str) -> DocumentResult<usize> {
    let mut matches = haystack.match_indices(needle).map(|(idx, _)| idx);

    let first = matches
        .next()
        .ok_or_else(|| DocumentError::MissingMarker(needle.to_string()))?;

    let extra = matches.count();
    if extra > 0 {
        return Err(DocumentError::DuplicateMarker {
            marker: needle.to_string(),
            count: extra + 1,
        });
    }

    Ok(first)
}
