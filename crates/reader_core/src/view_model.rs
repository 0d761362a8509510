use crate::state::{AppState, ViewMode, ZOOM_LEVELS};

/// At most this many search results are surfaced, in match order.
pub const SEARCH_RESULT_CAP: usize = 5;

/// Text shown when a page has no transcription (failed or absent fetch).
pub const MISSING_CONTENT_NOTICE: &str = "Full transcription and analysis for this page is \
available in the image view. Use the menu or press V to switch views.";

/// Image stem shared by every page scan asset.
const IMAGE_STEM: &str = "agentic_135";

/// Relative asset path of a page scan, e.g. `assets/images/agentic_135-003.png`.
pub fn image_asset_path(page: u32) -> String {
    format!("assets/images/{IMAGE_STEM}-{page:03}.png")
}

/// Everything the presentation layer needs to draw a frame. Derived from
/// [`AppState`] only; holds no toolkit types and performs no IO.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderViewModel {
    pub doc_title: String,
    pub current_page: u32,
    pub total_pages: u32,
    /// "Page X of Y" badge text.
    pub page_badge: String,
    pub progress_percent: f64,
    /// Cached page title, or "Page N" while none is known.
    pub page_title: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub view: ViewMode,
    pub image: ImagePanelView,
    pub text: TextPanelView,
    pub menu: MenuView,
    pub search: SearchView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePanelView {
    pub visible: bool,
    pub image_path: String,
    pub alt_text: String,
    /// Presentation class for the current zoom, e.g. `zoom-100`.
    pub zoom_class: String,
    pub zoom_buttons: Vec<ZoomButtonView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomButtonView {
    pub level: u16,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPanelView {
    pub visible: bool,
    pub body: TextBody,
}

/// Body of the text panel: the record's content verbatim, or the
/// switch-view placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextBody {
    Content(String),
    Placeholder { page: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub open: bool,
    pub image_active: bool,
    pub text_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    /// Current query text (the search box value).
    pub query: String,
    pub results: Vec<SearchResultView>,
    /// True when a long-enough query matched nothing ("No results").
    pub no_results: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultView {
    pub page: u32,
    pub title: String,
}

pub(crate) fn build(state: &AppState) -> ReaderViewModel {
    let page = state.current_page();
    let total = state.total_pages();
    let view = state.view_mode();

    let cached_title = state
        .cached(page)
        .and_then(|slot| slot.as_ref())
        .map(|record| record.title.clone());
    let page_title = cached_title.unwrap_or_else(|| format!("Page {page}"));

    let body = match state.cached(page) {
        Some(Some(record)) => TextBody::Content(record.content.clone()),
        _ => TextBody::Placeholder { page },
    };

    ReaderViewModel {
        doc_title: state.doc_title().to_string(),
        current_page: page,
        total_pages: total,
        page_badge: format!("Page {page} of {total}"),
        progress_percent: f64::from(page) / f64::from(total) * 100.0,
        page_title,
        prev_enabled: page > 1,
        next_enabled: page < total,
        view,
        image: ImagePanelView {
            visible: view == ViewMode::Image,
            image_path: image_asset_path(page),
            alt_text: format!("Page {page}"),
            zoom_class: format!("zoom-{}", state.zoom()),
            zoom_buttons: ZOOM_LEVELS
                .iter()
                .map(|&level| ZoomButtonView {
                    level,
                    label: format!("{level}%"),
                    active: level == state.zoom(),
                })
                .collect(),
        },
        text: TextPanelView {
            visible: view == ViewMode::Text,
            body,
        },
        menu: MenuView {
            open: state.menu_open(),
            image_active: view == ViewMode::Image,
            text_active: view == ViewMode::Text,
        },
        search: search_view(state),
    }
}

/// Two-phase search: manifest titles first, then cached page content for
/// pages not already matched. Case-insensitive substring, capped to
/// [`SEARCH_RESULT_CAP`] in match order.
fn search_view(state: &AppState) -> SearchView {
    let query = state.search_query();
    if query.chars().count() < 2 {
        return SearchView {
            query: query.to_string(),
            results: Vec::new(),
            no_results: false,
        };
    }

    let needle = query.to_lowercase();
    let mut results: Vec<SearchResultView> = Vec::new();

    if let Some(index) = state.index() {
        for entry in &index.pages {
            if results.len() >= SEARCH_RESULT_CAP {
                break;
            }
            if entry.title.to_lowercase().contains(&needle) {
                results.push(SearchResultView {
                    page: entry.page,
                    title: entry.title.clone(),
                });
            }
        }
    }

    for (page, slot) in state.cache_iter() {
        if results.len() >= SEARCH_RESULT_CAP {
            break;
        }
        let Some(record) = slot else { continue };
        if results.iter().any(|hit| hit.page == page) {
            continue;
        }
        if record.content.to_lowercase().contains(&needle) {
            results.push(SearchResultView {
                page,
                title: record.title.clone(),
            });
        }
    }

    let no_results = results.is_empty();
    SearchView {
        query: query.to_string(),
        results,
        no_results,
    }
}
