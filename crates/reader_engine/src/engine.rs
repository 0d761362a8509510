use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use reader_logging::reader_warn;

use crate::fetch::ArtifactFetcher;
use crate::types::EngineEvent;

enum EngineCommand {
    LoadManifest,
    LoadPage { page: u32, generation: u64 },
}

/// Handle to the artifact loader. Commands go in over a channel; each one
/// becomes an independent task on a tokio runtime owned by a background
/// thread, and settled loads come back as [`EngineEvent`]s for the app
/// loop to drain.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(fetcher: Arc<dyn ArtifactFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn load_manifest(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadManifest);
    }

    pub fn load_page(&self, page: u32, generation: u64) {
        let _ = self.cmd_tx.send(EngineCommand::LoadPage { page, generation });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn ArtifactFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadManifest => {
            let result = fetcher.fetch_manifest().await;
            if let Err(err) = &result {
                reader_warn!("Manifest load failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::ManifestLoaded { result });
        }
        EngineCommand::LoadPage { page, generation } => {
            let result = fetcher.fetch_page(page).await;
            if let Err(err) = &result {
                reader_warn!("Page {page} load failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::PageLoaded {
                page,
                generation,
                result,
            });
        }
    }
}
