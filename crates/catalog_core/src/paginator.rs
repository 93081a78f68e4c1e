//! Incremental, deduplicating page merger for one category view.
//!
//! The paginator never performs I/O itself. `reset` and `fetch_next_page`
//! hand out a [`PageRequest`] that the caller executes; the response is fed
//! back through [`Paginator::apply`] together with the same request. Every
//! request carries the epoch it was issued in, so responses that outlive a
//! reset are recognised and dropped.

use std::collections::HashSet;

use catalog_logging::{catalog_debug, catalog_warn};

use crate::{CategoryId, FetchFailure, Item, ItemId, Page};

/// Highest page the catalog service will serve.
pub const DEFAULT_PAGE_CAP: u32 = 500;

/// Token identifying one outstanding page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub epoch: u64,
    pub category_id: CategoryId,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    /// The page was merged; `added` new items, `skipped` duplicates.
    Merged { page: u32, added: usize, skipped: usize },
    /// The fetch failed; state is unchanged apart from the cleared guard.
    Failed { page: u32, failure: FetchFailure },
    /// The response belongs to an earlier reset or is not the outstanding request.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paginator {
    category_id: Option<CategoryId>,
    epoch: u64,
    seen_ids: HashSet<ItemId>,
    merged: Vec<Item>,
    current_page: u32,
    total_pages: u32,
    page_cap: u32,
    in_flight: Option<PageRequest>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_CAP)
    }
}

impl Paginator {
    /// Creates an idle paginator with no category. `page_cap` bounds the
    /// service-reported page count.
    pub fn new(page_cap: u32) -> Self {
        Self {
            category_id: None,
            epoch: 0,
            seen_ids: HashSet::new(),
            merged: Vec::new(),
            current_page: 0,
            total_pages: 1,
            page_cap: page_cap.max(1),
            in_flight: None,
        }
    }

    /// Discards all state, starts a new epoch for `category_id` and returns
    /// the request for page 1.
    pub fn reset(&mut self, category_id: CategoryId) -> PageRequest {
        self.clear();
        self.category_id = Some(category_id);
        catalog_debug!(
            "paginator reset: category={} epoch={}",
            category_id,
            self.epoch
        );
        self.issue()
    }

    /// Discards all state without starting a new fetch. Any outstanding
    /// response becomes stale.
    pub fn close(&mut self) {
        self.clear();
        self.category_id = None;
        catalog_debug!("paginator closed: epoch={}", self.epoch);
    }

    /// Returns the request for the next page, or `None` when a fetch is
    /// already in flight, no category is open, or the end has been reached.
    pub fn fetch_next_page(&mut self) -> Option<PageRequest> {
        self.category_id?;
        if self.in_flight.is_some() {
            catalog_debug!("fetch_next_page ignored: fetch already in flight");
            return None;
        }
        if self.current_page >= self.total_pages {
            catalog_debug!(
                "fetch_next_page ignored: end of data at page {}/{}",
                self.current_page,
                self.total_pages
            );
            return None;
        }
        Some(self.issue())
    }

    /// Applies the outcome of `request`.
    ///
    /// The merge happens only if `request` is exactly the outstanding fetch of
    /// the current epoch; anything else is reported as [`MergeOutcome::Stale`]
    /// and leaves the paginator untouched.
    pub fn apply(
        &mut self,
        request: PageRequest,
        result: Result<Page, FetchFailure>,
    ) -> MergeOutcome {
        if self.in_flight != Some(request) {
            catalog_debug!(
                "discarding stale page {} for category {} (epoch {}, current epoch {})",
                request.page,
                request.category_id,
                request.epoch,
                self.epoch
            );
            return MergeOutcome::Stale;
        }
        self.in_flight = None;

        let page = match result {
            Ok(page) if page.page_number != request.page => {
                let failure = FetchFailure::MalformedResponse(format!(
                    "requested page {} but service answered page {}",
                    request.page, page.page_number
                ));
                return self.fail(request, failure);
            }
            Ok(page) => page,
            Err(failure) => return self.fail(request, failure),
        };

        self.total_pages = page.total_pages.min(self.page_cap);
        let received = page.items.len();
        let before = self.merged.len();
        for item in page.items {
            if self.seen_ids.insert(item.id) {
                self.merged.push(item);
            }
        }
        let added = self.merged.len() - before;
        self.current_page = request.page;

        catalog_debug!(
            "merged page {}/{} for category {}: added={} skipped={}",
            self.current_page,
            self.total_pages,
            request.category_id,
            added,
            received - added
        );
        MergeOutcome::Merged {
            page: request.page,
            added,
            skipped: received - added,
        }
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Items merged so far, in first-arrival order.
    pub fn merged(&self) -> &[Item] {
        &self.merged
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_more(&self) -> bool {
        self.category_id.is_some() && self.current_page < self.total_pages
    }

    fn clear(&mut self) {
        self.epoch += 1;
        self.seen_ids.clear();
        self.merged.clear();
        self.current_page = 0;
        self.total_pages = 1;
        self.in_flight = None;
    }

    fn issue(&mut self) -> PageRequest {
        let request = PageRequest {
            epoch: self.epoch,
            category_id: self.category_id.unwrap_or_default(),
            page: self.current_page + 1,
        };
        self.in_flight = Some(request);
        request
    }

    fn fail(&mut self, request: PageRequest, failure: FetchFailure) -> MergeOutcome {
        catalog_warn!(
            "page {} for category {} failed: {}",
            request.page,
            request.category_id,
            failure
        );
        MergeOutcome::Failed {
            page: request.page,
            failure,
        }
    }
}
