#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App boot: request the manifest and the first page.
    Started,
    /// Preferences read from disk before the first render.
    RestorePreferences(crate::PreferenceSnapshot),
    /// Manifest fetch settled; `None` means it could not be loaded and
    /// the built-in defaults stay in force.
    ManifestLoaded(Option<crate::DocumentIndex>),
    /// Page fetch settled; `None` becomes the permanent "unavailable"
    /// cache sentinel for this session.
    PageLoaded {
        page: u32,
        generation: u64,
        record: Option<crate::PageRecord>,
    },
    /// Jump to an absolute page (menu page input, search result click).
    GoToPage(u32),
    /// Relative navigation (prev/next buttons, arrow keys).
    Navigate(i32),
    /// Select a view explicitly (menu view options).
    SetView(crate::ViewMode),
    /// Flip between image and text views.
    ToggleView,
    /// Apply a zoom level from the fixed set.
    SetZoom(u16),
    /// Open or close the menu.
    ToggleMenu,
    /// Close the menu; idempotent.
    CloseMenu,
    /// Search input edited.
    SearchChanged(String),
    /// A search result was activated: jump there and close the menu.
    SearchResultChosen(u32),
    /// Open the current page scan outside the reader.
    FullscreenRequested,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
