//! Reader engine: artifact IO, migration pipeline and effect execution.
mod artifact;
mod engine;
mod extract;
mod fetch;
mod migrate;
mod pagedata;
mod persist;
mod types;

pub use artifact::{
    build_manifest, page_artifact_name, page_artifact_path, DocumentInfo, MAIN_CSS_PATH,
    MANIFEST_PATH, OUTPUT_DIRS, PAGES_DIR, THEME_CSS_PATH,
};
pub use engine::EngineHandle;
pub use extract::{extract_root_block, extract_stylesheet};
pub use fetch::{ArtifactFetcher, FsArtifactFetcher, HttpArtifactFetcher};
pub use migrate::{run_migration, MigrateError, MigrationReport, OUTPUT_ROOT, SOURCE_FILENAME};
pub use pagedata::{parse_page_data, ExtractError, PageEntry, PAGE_DATA_ANCHOR};
pub use persist::{ensure_output_dir, ArtifactWriter, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError, ManifestDoc, ManifestPageDoc, PageDoc};
