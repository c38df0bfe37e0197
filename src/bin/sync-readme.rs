use readme_sync::cli::{self, Tool};
use std::process;

fn main() {
    if let Err(e) = cli::run(Tool::Sync) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
