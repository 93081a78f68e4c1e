use crate::{Category, CategoryId, FetchFailure, Item, Page, PageRequest, SortKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Home screen opened; load genres and highlights.
    AppStarted,
    /// Genre list arrived.
    CategoriesLoaded(Result<Vec<Category>, FetchFailure>),
    /// Highlights for the carousel arrived.
    HighlightsLoaded(Result<Vec<Item>, FetchFailure>),
    /// First items of one genre for its home-screen row.
    PreviewLoaded {
        category_id: CategoryId,
        result: Result<Vec<Item>, FetchFailure>,
    },
    /// User navigated to a category. Without a name, the loaded genre list is consulted.
    CategorySelected {
        category_id: CategoryId,
        name: Option<String>,
    },
    /// User went back to the home screen.
    CategoryClosed,
    /// User asked for the full genre index.
    GenresRequested,
    /// Scroll position neared the end of the list, or the user asked for more.
    LoadMoreRequested,
    /// Engine completion for a page request.
    PageLoaded {
        request: PageRequest,
        result: Result<Page, FetchFailure>,
    },
    /// User picked a different ordering.
    SortChanged(SortKey),
    /// Finger down on the carousel.
    CarouselInteractionStarted,
    /// Finger up on the carousel.
    CarouselInteractionEnded,
    /// A manual swipe came to rest on `index`.
    CarouselSettled { index: usize },
    /// Autoplay timer fired.
    AutoplayFired { generation: u64 },
    /// User asked to quit.
    QuitRequested,
}
