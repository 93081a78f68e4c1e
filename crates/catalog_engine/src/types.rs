use std::fmt;

use catalog_core::{Category, CategoryId, Item, Page, PageRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    CategoriesFetched(Result<Vec<Category>, CatalogError>),
    HighlightsFetched(Result<Vec<Item>, CatalogError>),
    PreviewFetched {
        category_id: CategoryId,
        result: Result<Vec<Item>, CatalogError>,
    },
    PageFetched {
        request: PageRequest,
        result: Result<Page, CatalogError>,
    },
    AdvanceDue {
        generation: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CatalogError {
    pub kind: FailureKind,
    pub message: String,
}

impl CatalogError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The body arrived but could not be understood.
    pub fn is_malformed(&self) -> bool {
        self.kind == FailureKind::Malformed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidRequest,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Malformed,
    Network,
    /// Local setup failed before any request was made.
    Internal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Malformed => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Internal => write!(f, "internal error"),
        }
    }
}
