use crate::pagedata::PageEntry;
use crate::types::{ManifestDoc, ManifestPageDoc};

/// Relative artifact locations under the output root. The viewer resolves
/// the same paths against its artifact root (directory or base URL).
pub const MANIFEST_PATH: &str = "data/manifest.json";
pub const THEME_CSS_PATH: &str = "css/themes/variables.css";
pub const MAIN_CSS_PATH: &str = "css/main.css";
pub const PAGES_DIR: &str = "data/pages";

/// Output directories created, idempotently, before any file is written.
pub const OUTPUT_DIRS: [&str; 6] = [
    "css/components",
    "css/themes",
    "js/modules",
    "js/utils",
    "data/pages",
    "assets/images",
];

/// Identity of the migrated document. The manifest is built from these
/// fixed values, not derived from the extracted records; at runtime the
/// manifest itself is the source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub total_pages: u32,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: "Agentic Reasoning for Large Language Models".to_string(),
            total_pages: 135,
        }
    }
}

/// Artifact file name for a page, zero-padded to 3 digits: `page-007.json`.
pub fn page_artifact_name(page: u32) -> String {
    format!("page-{page:03}.json")
}

/// Relative artifact path for a page: `data/pages/page-007.json`.
pub fn page_artifact_path(page: u32) -> String {
    format!("{PAGES_DIR}/{}", page_artifact_name(page))
}

/// Builds the manifest for a set of extracted records, in extraction
/// order. Every extracted record carries content.
pub fn build_manifest(doc: &DocumentInfo, entries: &[PageEntry]) -> ManifestDoc {
    ManifestDoc {
        title: doc.title.clone(),
        total_pages: doc.total_pages,
        pages: entries
            .iter()
            .map(|entry| ManifestPageDoc {
                page: entry.page,
                title: entry.title.clone(),
                has_content: true,
            })
            .collect(),
    }
}
