use std::path::PathBuf;

use reader_core::{DocumentIndex, Effect, IndexEntry, Msg, PageRecord, ViewMode};
use reader_engine::{EngineEvent, EngineHandle, ManifestDoc, PageDoc};
use reader_logging::reader_info;

use super::persistence;

/// Executes core effects against the engine and the preference store.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    prefs_path: PathBuf,
}

/// Presentation-side reactions the app loop applies after effects ran.
#[derive(Debug, Default)]
pub(crate) struct UiReactions {
    pub scroll_to_top: bool,
    pub opened_image: Option<String>,
}

impl EffectRunner {
    pub(crate) fn new(engine: EngineHandle, prefs_path: PathBuf) -> Self {
        Self { engine, prefs_path }
    }

    pub(crate) fn run(&self, effects: Vec<Effect>, view: ViewMode, zoom: u16) -> UiReactions {
        let mut reactions = UiReactions::default();
        for effect in effects {
            match effect {
                Effect::LoadManifest => self.engine.load_manifest(),
                Effect::LoadPage { page, generation } => self.engine.load_page(page, generation),
                // Both preferences live in one file; write the pair.
                Effect::PersistView(_) | Effect::PersistZoom(_) => {
                    persistence::save_preferences(&self.prefs_path, view, zoom);
                }
                Effect::ScrollToTop => reactions.scroll_to_top = true,
                Effect::OpenImage { path } => {
                    reader_info!("Page scan requested for external viewing: {path}");
                    reactions.opened_image = Some(path);
                }
            }
        }
        reactions
    }
}

/// Maps a settled engine load onto a core message. A failed load becomes
/// the absent record the core turns into its permanent sentinel.
pub(crate) fn map_engine_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ManifestLoaded { result } => Msg::ManifestLoaded(result.ok().map(map_manifest)),
        EngineEvent::PageLoaded {
            page,
            generation,
            result,
        } => Msg::PageLoaded {
            page,
            generation,
            record: result.ok().map(map_page),
        },
    }
}

fn map_manifest(doc: ManifestDoc) -> DocumentIndex {
    DocumentIndex {
        title: doc.title,
        total_pages: doc.total_pages,
        pages: doc
            .pages
            .into_iter()
            .map(|entry| IndexEntry {
                page: entry.page,
                title: entry.title,
                has_content: entry.has_content,
            })
            .collect(),
    }
}

fn map_page(doc: PageDoc) -> PageRecord {
    PageRecord {
        page: doc.page,
        title: doc.title,
        content: doc.content,
    }
}
