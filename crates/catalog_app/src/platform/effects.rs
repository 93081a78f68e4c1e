use std::sync::{mpsc, Arc};

use catalog_core::{Effect, FetchFailure, Msg};
use catalog_engine::{CatalogError, CatalogSettings, EngineEvent, EngineHandle, EventSink};
use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: CatalogSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, CatalogError> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { tx: msg_tx }))?;
        Ok(Self { engine })
    }

    /// Executes `effects`; returns `true` once shutdown was requested.
    pub fn enqueue(&self, effects: Vec<Effect>) -> bool {
        let mut shutdown = false;
        for effect in effects {
            match effect {
                Effect::FetchCategories => self.engine.fetch_categories(),
                Effect::FetchHighlights => self.engine.fetch_highlights(),
                Effect::FetchPreview { category_id } => self.engine.fetch_preview(category_id),
                Effect::FetchPage(request) => {
                    catalog_info!(
                        "FetchPage category={} page={} epoch={}",
                        request.category_id,
                        request.page,
                        request.epoch
                    );
                    self.engine.fetch_page(request);
                }
                Effect::ScheduleAdvance { generation, delay } => {
                    self.engine.schedule_advance(generation, delay);
                }
                Effect::CancelAdvance => self.engine.cancel_advance(),
                Effect::ScrollCarouselTo { index } => {
                    // The terminal renders focus from the view model.
                    catalog_debug!("carousel moved to {}", index);
                }
                Effect::Shutdown => shutdown = true,
            }
        }
        shutdown
    }
}

/// Forwards engine events into the update loop.
struct MsgSink {
    tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event_to_msg(event));
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CategoriesFetched(result) => Msg::CategoriesLoaded(result.map_err(map_failure)),
        EngineEvent::HighlightsFetched(result) => Msg::HighlightsLoaded(result.map_err(map_failure)),
        EngineEvent::PreviewFetched {
            category_id,
            result,
        } => Msg::PreviewLoaded {
            category_id,
            result: result.map_err(map_failure),
        },
        EngineEvent::PageFetched { request, result } => Msg::PageLoaded {
            request,
            result: result.map_err(map_failure),
        },
        EngineEvent::AdvanceDue { generation } => Msg::AutoplayFired { generation },
    }
}

fn map_failure(err: CatalogError) -> FetchFailure {
    if err.is_malformed() {
        catalog_warn!("malformed catalog response: {}", err.message);
        FetchFailure::MalformedResponse(err.message)
    } else {
        catalog_warn!("catalog request failed: {}", err);
        FetchFailure::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::PageRequest;
    use catalog_engine::FailureKind;

    #[test]
    fn page_events_keep_their_request_token() {
        let request = PageRequest {
            epoch: 3,
            category_id: 28,
            page: 4,
        };
        let msg = event_to_msg(EngineEvent::PageFetched {
            request,
            result: Err(CatalogError {
                kind: FailureKind::HttpStatus(503),
                message: "503 Service Unavailable".into(),
            }),
        });
        assert_eq!(
            msg,
            Msg::PageLoaded {
                request,
                result: Err(FetchFailure::Transport(
                    "http status 503: 503 Service Unavailable".into()
                )),
            }
        );
    }

    #[test]
    fn malformed_errors_map_to_malformed_response() {
        let msg = event_to_msg(EngineEvent::HighlightsFetched(Err(CatalogError {
            kind: FailureKind::Malformed,
            message: "missing field `results`".into(),
        })));
        assert_eq!(
            msg,
            Msg::HighlightsLoaded(Err(FetchFailure::MalformedResponse(
                "missing field `results`".into()
            )))
        );
    }

    #[test]
    fn timer_events_become_autoplay_messages() {
        assert_eq!(
            event_to_msg(EngineEvent::AdvanceDue { generation: 9 }),
            Msg::AutoplayFired { generation: 9 }
        );
    }
}
