//! One-shot migration: split `reader.html` in the working directory into
//! the discrete artifact tree under `reader/`.
//!
//! Takes no flags. Exits non-zero with a message on stderr when the page
//! data block cannot be found or the filesystem refuses; otherwise prints
//! a summary of what was written.

use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use reader_engine::{run_migration, OUTPUT_ROOT, SOURCE_FILENAME};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> anyhow::Result<()> {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let report = run_migration(Path::new(SOURCE_FILENAME), Path::new(OUTPUT_ROOT))
        .with_context(|| format!("migrating {SOURCE_FILENAME}"))?;

    println!("Found {} pages", report.pages_written);
    println!("Migration complete!");
    println!("- CSS written to {OUTPUT_ROOT}/css/");
    println!(
        "- {} page JSON files written to {OUTPUT_ROOT}/data/pages/",
        report.pages_written
    );
    println!("- Manifest written to {}", report.manifest_path.display());
    Ok(())
}
