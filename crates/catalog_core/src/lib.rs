//! Catalog core: pure pagination, sorting and carousel state plus the update loop.
mod carousel;
mod display;
mod effect;
mod item;
mod msg;
mod paginator;
mod sort;
mod state;
mod update;
mod view_model;

pub use carousel::{Carousel, CarouselCommand, CarouselPhase, AUTOPLAY_DELAY};
pub use display::{poster_url, rating_label, year_label, IMAGE_BASE_URL};
pub use effect::Effect;
pub use item::{Category, CategoryId, FetchFailure, Item, ItemId, Page};
pub use msg::Msg;
pub use paginator::{MergeOutcome, PageRequest, Paginator, DEFAULT_PAGE_CAP};
pub use sort::{project, SortKey, UnknownSortKey};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, CarouselView, CategoryListView, CategorySection, GenreEntry, ItemRow, Screen,
};
