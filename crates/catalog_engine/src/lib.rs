//! Catalog engine: remote catalog access, timers and effect execution.
mod client;
mod engine;
mod scheduler;
mod settings;
mod types;
mod wire;

pub use client::{CatalogClient, ReqwestCatalogClient};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use scheduler::AutoplayScheduler;
pub use settings::CatalogSettings;
pub use types::{CatalogError, EngineEvent, FailureKind};
