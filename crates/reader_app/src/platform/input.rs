use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use reader_core::{AppState, Msg, ReaderViewModel, ZOOM_LEVELS};

/// Presentation-only state: text scroll offset, menu input buffers and a
/// transient status line. Everything reader-semantic lives in the core.
#[derive(Debug, Default)]
pub(crate) struct LocalUi {
    pub text_scroll: u16,
    pub menu: MenuInput,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum MenuField {
    #[default]
    Search,
    PageInput,
}

#[derive(Debug, Default)]
pub(crate) struct MenuInput {
    pub focus: MenuField,
    pub page_buffer: String,
    pub selected: usize,
}

impl MenuInput {
    /// Called when the menu opens: focus the search box and seed the page
    /// input with the current page.
    pub(crate) fn reset(&mut self, current_page: u32) {
        self.focus = MenuField::Search;
        self.page_buffer = current_page.to_string();
        self.selected = 0;
    }
}

pub(crate) enum InputAction {
    Dispatch(Msg),
    Quit,
    None,
}

/// Single global key handler. While the menu is open its text inputs have
/// focus, so the global shortcuts are suppressed and keystrokes edit the
/// focused field instead.
pub(crate) fn handle_key(
    key: KeyEvent,
    state: &AppState,
    view: &ReaderViewModel,
    local: &mut LocalUi,
) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputAction::Quit;
    }

    if state.menu_open() {
        handle_menu_key(key, view, local)
    } else {
        handle_global_key(key, state, local)
    }
}

fn handle_menu_key(key: KeyEvent, view: &ReaderViewModel, local: &mut LocalUi) -> InputAction {
    let menu = &mut local.menu;
    match key.code {
        KeyCode::Esc => InputAction::Dispatch(Msg::CloseMenu),
        KeyCode::Tab => {
            menu.focus = match menu.focus {
                MenuField::Search => MenuField::PageInput,
                MenuField::PageInput => MenuField::Search,
            };
            InputAction::None
        }
        KeyCode::Up => {
            menu.selected = menu.selected.saturating_sub(1);
            InputAction::None
        }
        KeyCode::Down => {
            let last = view.search.results.len().saturating_sub(1);
            menu.selected = (menu.selected + 1).min(last);
            InputAction::None
        }
        KeyCode::Enter => match menu.focus {
            MenuField::PageInput => match menu.page_buffer.parse::<u32>() {
                Ok(page) => InputAction::Dispatch(Msg::GoToPage(page)),
                Err(_) => InputAction::None,
            },
            MenuField::Search => {
                let last = view.search.results.len().saturating_sub(1);
                match view.search.results.get(menu.selected.min(last)) {
                    Some(hit) => InputAction::Dispatch(Msg::SearchResultChosen(hit.page)),
                    None => InputAction::None,
                }
            }
        },
        KeyCode::Backspace => match menu.focus {
            MenuField::Search => {
                let mut query = view.search.query.clone();
                query.pop();
                InputAction::Dispatch(Msg::SearchChanged(query))
            }
            MenuField::PageInput => {
                menu.page_buffer.pop();
                InputAction::None
            }
        },
        KeyCode::Char(ch) => match menu.focus {
            MenuField::Search => {
                menu.selected = 0;
                let mut query = view.search.query.clone();
                query.push(ch);
                InputAction::Dispatch(Msg::SearchChanged(query))
            }
            MenuField::PageInput => {
                if ch.is_ascii_digit() && menu.page_buffer.len() < 4 {
                    menu.page_buffer.push(ch);
                }
                InputAction::None
            }
        },
        _ => InputAction::None,
    }
}

fn handle_global_key(key: KeyEvent, state: &AppState, local: &mut LocalUi) -> InputAction {
    match key.code {
        KeyCode::Left => InputAction::Dispatch(Msg::Navigate(-1)),
        KeyCode::Right => InputAction::Dispatch(Msg::Navigate(1)),
        KeyCode::Esc => InputAction::Dispatch(Msg::CloseMenu),
        KeyCode::PageDown => {
            local.text_scroll = local.text_scroll.saturating_add(10);
            InputAction::None
        }
        KeyCode::PageUp => {
            local.text_scroll = local.text_scroll.saturating_sub(10);
            InputAction::None
        }
        KeyCode::Char(ch) => match ch {
            'v' | 'V' => InputAction::Dispatch(Msg::ToggleView),
            'm' | 'M' => InputAction::Dispatch(Msg::ToggleMenu),
            'f' | 'F' => InputAction::Dispatch(Msg::FullscreenRequested),
            'q' | 'Q' => InputAction::Quit,
            '+' | '=' => zoom_step(state, 1),
            '-' => zoom_step(state, -1),
            _ => InputAction::None,
        },
        _ => InputAction::None,
    }
}

/// Steps through the fixed zoom set; at either end the key does nothing.
fn zoom_step(state: &AppState, direction: i32) -> InputAction {
    let Some(index) = ZOOM_LEVELS.iter().position(|&level| level == state.zoom()) else {
        return InputAction::None;
    };
    let next = index as i32 + direction;
    if next < 0 || next as usize >= ZOOM_LEVELS.len() {
        return InputAction::None;
    }
    InputAction::Dispatch(Msg::SetZoom(ZOOM_LEVELS[next as usize]))
}
