pub type ItemId = u64;
pub type CategoryId = u64;

/// One catalog entry as returned by the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub release_date: Option<String>,
    pub rating: f64,
    pub poster_ref: Option<String>,
}

impl Item {
    /// Leading 4-digit year of `release_date`, if it has one.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        let year = date.get(..4)?;
        if !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        year.parse().ok()
    }
}

/// Result of one page fetch. `items` is in the service's relevance order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub page_number: u32,
    pub items: Vec<Item>,
    pub total_pages: u32,
    pub total_results: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Why a fetch did not produce a usable payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
