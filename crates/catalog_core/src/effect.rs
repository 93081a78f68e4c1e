use std::time::Duration;

use crate::{CategoryId, PageRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCategories,
    FetchHighlights,
    FetchPreview { category_id: CategoryId },
    FetchPage(PageRequest),
    ScheduleAdvance { generation: u64, delay: Duration },
    CancelAdvance,
    ScrollCarouselTo { index: usize },
    Shutdown,
}
