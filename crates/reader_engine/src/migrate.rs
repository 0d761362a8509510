use std::fs;
use std::path::{Path, PathBuf};

use reader_logging::{reader_debug, reader_info};
use thiserror::Error;

use crate::artifact::{
    build_manifest, page_artifact_path, DocumentInfo, MAIN_CSS_PATH, MANIFEST_PATH, OUTPUT_DIRS,
    THEME_CSS_PATH,
};
use crate::extract::{extract_root_block, extract_stylesheet};
use crate::pagedata::{parse_page_data, ExtractError};
use crate::persist::{ArtifactWriter, PersistError};
use crate::types::PageDoc;

/// Fixed input read from the working directory.
pub const SOURCE_FILENAME: &str = "reader.html";

/// Fixed output root the artifact tree is written under.
pub const OUTPUT_ROOT: &str = "reader";

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("cannot read source document {path:?}: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("cannot encode {path}: {source}")]
    Encode {
        path: String,
        source: serde_json::Error,
    },
}

/// Summary of a completed migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub pages_written: usize,
    pub manifest_path: PathBuf,
    pub theme_css_path: PathBuf,
    pub main_css_path: PathBuf,
}

/// One-shot migration: split the monolithic source document into
/// stylesheet, manifest and per-page artifacts under `out_root`.
///
/// Extraction runs before anything touches the filesystem, so a source
/// without the page data block produces no output at all.
pub fn run_migration(source_path: &Path, out_root: &Path) -> Result<MigrationReport, MigrateError> {
    let html = fs::read_to_string(source_path).map_err(|source| MigrateError::ReadSource {
        path: source_path.to_path_buf(),
        source,
    })?;

    let css = extract_stylesheet(&html);
    let entries = parse_page_data(&html)?;
    reader_info!(
        "Extracted {} page entries from {}",
        entries.len(),
        source_path.display()
    );

    for dir in OUTPUT_DIRS {
        fs::create_dir_all(out_root.join(dir)).map_err(PersistError::from)?;
    }

    let writer = ArtifactWriter::new(out_root.to_path_buf());

    // The variables block stays in the main stylesheet too; the split is
    // additive, not exclusive.
    let theme_block = extract_root_block(&css).unwrap_or_default();
    let theme_css_path = writer.write(THEME_CSS_PATH, &theme_block)?;
    let main_css_path = writer.write(MAIN_CSS_PATH, &css)?;

    let manifest = build_manifest(&DocumentInfo::default(), &entries);
    let manifest_json = encode(MANIFEST_PATH, &manifest)?;
    let manifest_path = writer.write(MANIFEST_PATH, &manifest_json)?;

    for entry in &entries {
        let page_doc = PageDoc {
            page: entry.page,
            title: entry.title.clone(),
            content: entry.content.clone(),
        };
        let relative = page_artifact_path(entry.page);
        let json = encode(&relative, &page_doc)?;
        writer.write(&relative, &json)?;
        reader_debug!("Wrote {relative}");
    }

    Ok(MigrationReport {
        pages_written: entries.len(),
        manifest_path,
        theme_css_path,
        main_css_path,
    })
}

fn encode<T: serde::Serialize>(path: &str, value: &T) -> Result<String, MigrateError> {
    serde_json::to_string_pretty(value).map_err(|source| MigrateError::Encode {
        path: path.to_string(),
        source,
    })
}
