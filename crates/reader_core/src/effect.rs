#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the manifest artifact.
    LoadManifest,
    /// Fetch one page artifact. `generation` is echoed back in
    /// [`crate::Msg::PageLoaded`] so stale resolutions can be told apart.
    LoadPage { page: u32, generation: u64 },
    /// Persist the view-mode preference.
    PersistView(crate::ViewMode),
    /// Persist the zoom preference.
    PersistZoom(u16),
    /// Scroll the viewport back to the top of the page.
    ScrollToTop,
    /// Open the page scan in an external viewer.
    OpenImage { path: String },
}
