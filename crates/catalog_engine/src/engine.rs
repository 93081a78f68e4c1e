use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_core::{CategoryId, PageRequest};
use catalog_logging::{catalog_debug, catalog_warn};

use crate::scheduler::AutoplayScheduler;
use crate::{
    CatalogClient, CatalogError, CatalogSettings, EngineEvent, FailureKind, ReqwestCatalogClient,
};

/// Receives engine results. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    FetchCategories,
    FetchHighlights,
    FetchPreview { category_id: CategoryId },
    FetchPage(PageRequest),
    ScheduleAdvance { generation: u64, delay: Duration },
    CancelAdvance,
}

/// Front door to the engine worker thread.
///
/// Commands are queued and executed on a tokio runtime owned by the worker.
/// Dropping the handle stops the worker and cancels any pending advance.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: CatalogSettings, sink: Arc<dyn EventSink>) -> Result<Self, CatalogError> {
        let client = Arc::new(ReqwestCatalogClient::new(settings)?);
        Self::with_client(client, sink)
    }

    pub fn with_client(
        client: Arc<dyn CatalogClient>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, CatalogError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(runtime_error)?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut scheduler = AutoplayScheduler::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::ScheduleAdvance { generation, delay } => {
                        let sink = sink.clone();
                        scheduler.schedule(runtime.handle(), generation, delay, move |generation| {
                            sink.emit(EngineEvent::AdvanceDue { generation });
                        });
                    }
                    EngineCommand::CancelAdvance => scheduler.cancel(),
                    command => {
                        let client = client.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            handle_fetch(client.as_ref(), command, sink.as_ref()).await;
                        });
                    }
                }
            }
            scheduler.cancel();
            catalog_debug!("engine worker stopped");
        });

        Ok(Self { cmd_tx })
    }

    pub fn fetch_categories(&self) {
        self.send(EngineCommand::FetchCategories);
    }

    pub fn fetch_highlights(&self) {
        self.send(EngineCommand::FetchHighlights);
    }

    pub fn fetch_preview(&self, category_id: CategoryId) {
        self.send(EngineCommand::FetchPreview { category_id });
    }

    pub fn fetch_page(&self, request: PageRequest) {
        self.send(EngineCommand::FetchPage(request));
    }

    pub fn schedule_advance(&self, generation: u64, delay: Duration) {
        self.send(EngineCommand::ScheduleAdvance { generation, delay });
    }

    pub fn cancel_advance(&self) {
        self.send(EngineCommand::CancelAdvance);
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            catalog_warn!("engine worker is gone; command dropped");
        }
    }
}

async fn handle_fetch(client: &dyn CatalogClient, command: EngineCommand, sink: &dyn EventSink) {
    let event = match command {
        EngineCommand::FetchCategories => {
            EngineEvent::CategoriesFetched(client.fetch_categories().await)
        }
        EngineCommand::FetchHighlights => {
            EngineEvent::HighlightsFetched(client.fetch_highlights().await)
        }
        EngineCommand::FetchPreview { category_id } => EngineEvent::PreviewFetched {
            category_id,
            result: client.fetch_preview(category_id).await,
        },
        EngineCommand::FetchPage(request) => EngineEvent::PageFetched {
            request,
            result: client.fetch_page(request.category_id, request.page).await,
        },
        EngineCommand::ScheduleAdvance { .. } | EngineCommand::CancelAdvance => return,
    };
    sink.emit(event);
}

fn runtime_error(err: std::io::Error) -> CatalogError {
    CatalogError::new(FailureKind::Internal, format!("engine runtime: {err}"))
}
