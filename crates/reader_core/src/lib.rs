//! Reader core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, DocumentIndex, IndexEntry, PageRecord, PreferenceSnapshot, ViewMode,
    DEFAULT_DOC_TITLE, DEFAULT_TOTAL_PAGES, DEFAULT_ZOOM, ZOOM_LEVELS,
};
pub use update::update;
pub use view_model::{
    image_asset_path, ImagePanelView, MenuView, ReaderViewModel, SearchResultView, SearchView,
    TextBody, TextPanelView, ZoomButtonView, MISSING_CONTENT_NOTICE, SEARCH_RESULT_CAP,
};
