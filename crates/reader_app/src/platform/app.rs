use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use reader_core::{update, AppState, Msg};
use reader_engine::{
    ArtifactFetcher, EngineHandle, FsArtifactFetcher, HttpArtifactFetcher, OUTPUT_ROOT,
};
use reader_logging::reader_info;

use super::effects::{map_engine_event, EffectRunner};
use super::input::{handle_key, InputAction, LocalUi};
use super::{logging, persistence, ui};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    // The artifact root is the extractor's output: a directory by
    // default, or a static host when given an http(s) base URL.
    let artifact_root = std::env::args()
        .nth(1)
        .unwrap_or_else(|| OUTPUT_ROOT.to_string());
    let fetcher = build_fetcher(&artifact_root)?;
    let engine = EngineHandle::new(fetcher);
    let runner = EffectRunner::new(engine.clone(), persistence::prefs_path());
    reader_info!("Reading artifacts from {artifact_root}");

    let mut session = Session {
        state: AppState::new(),
        runner,
        local: LocalUi::default(),
    };

    // Preferences apply before the first render; boot then requests the
    // manifest and the first page.
    let prefs = persistence::load_preferences(&persistence::prefs_path());
    session.dispatch(Msg::RestorePreferences(prefs));
    session.dispatch(Msg::Started);

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let result = event_loop(&mut terminal, &mut session, &engine);

    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn build_fetcher(root: &str) -> anyhow::Result<Arc<dyn ArtifactFetcher>> {
    if root.starts_with("http://") || root.starts_with("https://") {
        let fetcher = HttpArtifactFetcher::new(root)
            .map_err(|err| anyhow::anyhow!("invalid artifact root {root}: {err}"))?;
        Ok(Arc::new(fetcher))
    } else {
        Ok(Arc::new(FsArtifactFetcher::new(PathBuf::from(root))))
    }
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    local: LocalUi,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) {
        let menu_was_open = self.state.menu_open();

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let reactions = self
            .runner
            .run(effects, self.state.view_mode(), self.state.zoom());
        if reactions.scroll_to_top {
            self.local.text_scroll = 0;
        }
        if let Some(path) = reactions.opened_image {
            self.local.status = Some(format!("Page scan: {path}"));
        }
        if !menu_was_open && self.state.menu_open() {
            self.local.menu.reset(self.state.current_page());
        }
    }
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    session: &mut Session,
    engine: &EngineHandle,
) -> anyhow::Result<()> {
    let mut redraw = true;
    loop {
        // Drain settled loads before rendering.
        while let Some(engine_event) = engine.try_recv() {
            session.dispatch(map_engine_event(engine_event));
        }

        if session.state.consume_dirty() {
            redraw = true;
        }
        if redraw {
            let view = session.state.view();
            terminal
                .draw(|frame| ui::render::draw(frame, &view, &session.local))
                .context("draw frame")?;
            redraw = false;
        }

        if event::poll(POLL_INTERVAL).context("poll input")? {
            match event::read().context("read input")? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    let view = session.state.view();
                    match handle_key(key, &session.state, &view, &mut session.local) {
                        InputAction::Quit => break,
                        InputAction::Dispatch(msg) => session.dispatch(msg),
                        InputAction::None => {}
                    }
                    redraw = true;
                }
                Event::Resize(_, _) => redraw = true,
                _ => {}
            }
        }
    }
    Ok(())
}
