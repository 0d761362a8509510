use std::collections::BTreeMap;

use crate::view_model::ReaderViewModel;

/// Page count used until a manifest has been adopted.
pub const DEFAULT_TOTAL_PAGES: u32 = 135;

/// Document title used until a manifest has been adopted.
pub const DEFAULT_DOC_TITLE: &str = "Agentic Reasoning for Large Language Models";

/// The fixed set of image zoom percentages. Values outside this set are
/// rejected by [`AppState::set_zoom`].
pub const ZOOM_LEVELS: [u16; 8] = [70, 80, 90, 100, 110, 120, 130, 140];

/// Zoom applied when no preference has been persisted.
pub const DEFAULT_ZOOM: u16 = 100;

/// Which panel the reader is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Rendered page scan.
    #[default]
    Image,
    /// Transcribed HTML.
    Text,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Image => "image",
            ViewMode::Text => "text",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "image" => Some(ViewMode::Image),
            "text" => Some(ViewMode::Text),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Image => ViewMode::Text,
            ViewMode::Text => ViewMode::Image,
        }
    }
}

/// One unit of the document: title plus transcribed HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub page: u32,
    pub title: String,
    pub content: String,
}

/// Lightweight per-page metadata from the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub page: u32,
    pub title: String,
    pub has_content: bool,
}

/// The manifest: index of all pages, adopted as the runtime source of
/// truth for the page count and document title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIndex {
    pub title: String,
    pub total_pages: u32,
    pub pages: Vec<IndexEntry>,
}

/// Preferences restored from disk at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceSnapshot {
    pub view: ViewMode,
    pub zoom: u16,
}

/// A page fetch that has been requested but has not settled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingLoad {
    pub page: u32,
    pub generation: u64,
}

/// The whole viewer state. Mutated only through [`crate::update`]; the
/// range invariant `1 <= current_page <= total_pages` holds at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    current_page: u32,
    total_pages: u32,
    doc_title: String,
    view: ViewMode,
    zoom: u16,
    menu_open: bool,
    search_query: String,
    index: Option<DocumentIndex>,
    // None value = fetch attempted and failed (permanent for the session).
    // Absent key = fetch not yet attempted.
    cache: BTreeMap<u32, Option<PageRecord>>,
    generation: u64,
    loading: Option<PendingLoad>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: DEFAULT_TOTAL_PAGES,
            doc_title: DEFAULT_DOC_TITLE.to_string(),
            view: ViewMode::default(),
            zoom: DEFAULT_ZOOM,
            menu_open: false,
            search_query: String::new(),
            index: None,
            cache: BTreeMap::new(),
            generation: 0,
            loading: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ReaderViewModel {
        crate::view_model::build(self)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn doc_title(&self) -> &str {
        &self.doc_title
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    pub fn zoom(&self) -> u16 {
        self.zoom
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index(&self) -> Option<&DocumentIndex> {
        self.index.as_ref()
    }

    /// Cache lookup. Outer `None` = never attempted, `Some(None)` = the
    /// permanent "fetch failed" sentinel.
    pub fn cached(&self, page: u32) -> Option<&Option<PageRecord>> {
        self.cache.get(&page)
    }

    pub fn in_range(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }

    /// Returns whether a render is owed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Moves to `page`, which must already be range-checked. The load
    /// generation advances only when the page actually changes, so
    /// repeating a jump leaves the state untouched.
    pub(crate) fn jump_to(&mut self, page: u32) {
        debug_assert!(self.in_range(page));
        if self.current_page != page {
            self.current_page = page;
            self.generation += 1;
        }
        self.mark_dirty();
    }

    pub(crate) fn set_view(&mut self, view: ViewMode) {
        self.view = view;
        self.mark_dirty();
    }

    /// Applies a zoom level; values outside [`ZOOM_LEVELS`] are ignored.
    pub(crate) fn set_zoom(&mut self, level: u16) -> bool {
        if !ZOOM_LEVELS.contains(&level) {
            return false;
        }
        self.zoom = level;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_menu_open(&mut self, open: bool) {
        if self.menu_open != open {
            self.menu_open = open;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_search_query(&mut self, query: String) {
        if self.search_query != query {
            self.search_query = query;
            self.mark_dirty();
        }
    }

    /// Adopts the manifest as the source of truth for page count and
    /// title, clamping the current page into the new range.
    pub(crate) fn adopt_index(&mut self, index: DocumentIndex) {
        self.total_pages = index.total_pages.max(1);
        self.doc_title = index.title.clone();
        self.index = Some(index);
        if self.current_page > self.total_pages {
            self.current_page = self.total_pages;
        }
        self.mark_dirty();
    }

    pub(crate) fn loading(&self) -> Option<PendingLoad> {
        self.loading
    }

    pub(crate) fn begin_load(&mut self, page: u32) -> u64 {
        self.loading = Some(PendingLoad {
            page,
            generation: self.generation,
        });
        self.generation
    }

    /// Stores a settled fetch. The cache always takes the result (it is
    /// never evicted), but only the load carrying the current generation
    /// clears the in-flight marker, so a stale fetch cannot clobber the
    /// state of a newer navigation.
    pub(crate) fn store_page(&mut self, page: u32, generation: u64, record: Option<PageRecord>) {
        self.cache.insert(page, record);
        if self.loading == Some(PendingLoad { page, generation }) {
            self.loading = None;
        }
        self.mark_dirty();
    }

    pub(crate) fn restore_preferences(&mut self, prefs: PreferenceSnapshot) {
        self.view = prefs.view;
        if ZOOM_LEVELS.contains(&prefs.zoom) {
            self.zoom = prefs.zoom;
        }
        self.mark_dirty();
    }

    /// Iterates cached pages in ascending page order.
    pub(crate) fn cache_iter(&self) -> impl Iterator<Item = (u32, &Option<PageRecord>)> {
        self.cache.iter().map(|(page, slot)| (*page, slot))
    }
}
