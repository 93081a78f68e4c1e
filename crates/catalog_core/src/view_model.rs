use crate::{CarouselPhase, CategoryId, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Genres,
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: u64,
    pub title: String,
    pub year: String,
    pub rating: String,
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselView {
    pub items: Vec<ItemRow>,
    pub focus: usize,
    pub phase: CarouselPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub category_id: CategoryId,
    pub name: String,
    pub items: Vec<ItemRow>,
}

/// One line of the genre index, whether or not its preview loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreEntry {
    pub category_id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListView {
    pub category_id: CategoryId,
    pub name: String,
    pub sort_key: SortKey,
    pub rows: Vec<ItemRow>,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
    pub loading_home: bool,
    pub carousel: CarouselView,
    pub sections: Vec<CategorySection>,
    pub genres: Vec<GenreEntry>,
    pub category: Option<CategoryListView>,
    pub dirty: bool,
}
