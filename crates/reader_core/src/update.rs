use crate::view_model::image_asset_path;
use crate::{AppState, Effect, Msg, ViewMode};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let page = state.current_page();
            let mut effects = vec![Effect::LoadManifest];
            effects.extend(request_page_load(&mut state, page));
            state.mark_dirty();
            effects
        }
        Msg::RestorePreferences(prefs) => {
            state.restore_preferences(prefs);
            Vec::new()
        }
        Msg::ManifestLoaded(index) => {
            // Manifest absence is non-fatal everywhere: keep defaults.
            if let Some(index) = index {
                state.adopt_index(index);
            }
            Vec::new()
        }
        Msg::PageLoaded {
            page,
            generation,
            record,
        } => {
            state.store_page(page, generation, record);
            Vec::new()
        }
        Msg::GoToPage(page) => go_to_page(&mut state, page),
        Msg::Navigate(delta) => {
            let target = i64::from(state.current_page()) + i64::from(delta);
            match u32::try_from(target) {
                Ok(page) => go_to_page(&mut state, page),
                Err(_) => Vec::new(),
            }
        }
        Msg::SetView(view) => set_view(&mut state, view),
        Msg::ToggleView => {
            let next = state.view_mode().toggled();
            set_view(&mut state, next)
        }
        Msg::SetZoom(level) => {
            if state.set_zoom(level) {
                vec![Effect::PersistZoom(level)]
            } else {
                Vec::new()
            }
        }
        Msg::ToggleMenu => {
            state.set_menu_open(!state.menu_open());
            Vec::new()
        }
        Msg::CloseMenu => {
            state.set_menu_open(false);
            Vec::new()
        }
        Msg::SearchChanged(query) => {
            state.set_search_query(query);
            Vec::new()
        }
        Msg::SearchResultChosen(page) => {
            let effects = go_to_page(&mut state, page);
            state.set_menu_open(false);
            effects
        }
        Msg::FullscreenRequested => {
            let path = image_asset_path(state.current_page());
            state.set_menu_open(false);
            vec![Effect::OpenImage { path }]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Absolute navigation. Out-of-range requests change nothing; in-range
/// ones refresh page-dependent UI, request a load for uncached pages and
/// scroll back to the top.
fn go_to_page(state: &mut AppState, page: u32) -> Vec<Effect> {
    if !state.in_range(page) {
        return Vec::new();
    }
    state.jump_to(page);
    let mut effects = request_page_load(state, page);
    effects.push(Effect::ScrollToTop);
    effects
}

/// Emits a load effect unless the page has a cache entry (including the
/// failed sentinel) or the same load is already in flight.
fn request_page_load(state: &mut AppState, page: u32) -> Vec<Effect> {
    if state.cached(page).is_some() {
        return Vec::new();
    }
    if let Some(pending) = state.loading() {
        if pending.page == page && pending.generation == state.generation() {
            return Vec::new();
        }
    }
    let generation = state.begin_load(page);
    vec![Effect::LoadPage { page, generation }]
}

fn set_view(state: &mut AppState, view: ViewMode) -> Vec<Effect> {
    state.set_view(view);
    state.set_menu_open(false);
    vec![Effect::PersistView(view)]
}
