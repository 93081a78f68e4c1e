use std::collections::HashMap;

use crate::view_model::{
    AppViewModel, CarouselView, CategoryListView, CategorySection, GenreEntry, ItemRow, Screen,
};
use crate::{
    poster_url, project, rating_label, year_label, Carousel, Category, CategoryId, FetchFailure,
    Item, Paginator, SortKey,
};

const LIST_POSTER_SIZE: &str = "w200";
const HIGHLIGHT_POSTER_SIZE: &str = "w500";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OpenCategory {
    pub(crate) id: CategoryId,
    pub(crate) name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) categories: Vec<Category>,
    pub(crate) previews: HashMap<CategoryId, Vec<Item>>,
    pub(crate) highlights: Vec<Item>,
    pub(crate) carousel: Carousel,
    pub(crate) categories_pending: bool,
    pub(crate) highlights_pending: bool,
    pub(crate) open: Option<OpenCategory>,
    pub(crate) genres_shown: bool,
    pub(crate) paginator: Paginator,
    pub(crate) sort_key: SortKey,
    pub(crate) last_error: Option<FetchFailure>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `paginator` for category views, e.g. one built with a custom page cap.
    pub fn with_paginator(paginator: Paginator) -> Self {
        Self {
            paginator,
            ..Self::default()
        }
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn last_error(&self) -> Option<&FetchFailure> {
        self.last_error.as_ref()
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let carousel = CarouselView {
            items: self
                .highlights
                .iter()
                .map(|item| row(item, HIGHLIGHT_POSTER_SIZE))
                .collect(),
            focus: self.carousel.current_index(),
            phase: self.carousel.phase(),
        };

        let sections = self
            .categories
            .iter()
            .filter_map(|category| {
                let items = self.previews.get(&category.id)?;
                if items.is_empty() {
                    return None;
                }
                Some(CategorySection {
                    category_id: category.id,
                    name: category.name.clone(),
                    items: items
                        .iter()
                        .map(|item| row(item, LIST_POSTER_SIZE))
                        .collect(),
                })
            })
            .collect();

        let category = self.open.as_ref().map(|open| CategoryListView {
            category_id: open.id,
            name: open.name.clone(),
            sort_key: self.sort_key,
            rows: project(self.paginator.merged(), self.sort_key)
                .into_iter()
                .map(|item| row(item, LIST_POSTER_SIZE))
                .collect(),
            current_page: self.paginator.current_page(),
            total_pages: self.paginator.total_pages(),
            has_more: self.paginator.has_more(),
            loading: self.paginator.is_fetching(),
            error: self.last_error.as_ref().map(ToString::to_string),
        });

        let genres = self
            .categories
            .iter()
            .map(|category| GenreEntry {
                category_id: category.id,
                name: category.name.clone(),
            })
            .collect();

        let screen = if category.is_some() {
            Screen::Category
        } else if self.genres_shown {
            Screen::Genres
        } else {
            Screen::Home
        };

        AppViewModel {
            screen,
            loading_home: self.categories_pending || self.highlights_pending,
            carousel,
            sections,
            genres,
            category,
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn category_name(&self, id: CategoryId) -> String {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.clone())
            .unwrap_or_else(|| format!("Category {id}"))
    }
}

fn row(item: &Item, poster_size: &str) -> ItemRow {
    ItemRow {
        id: item.id,
        title: item.title.clone(),
        year: year_label(item),
        rating: rating_label(item),
        poster_url: poster_url(item.poster_ref.as_deref(), poster_size),
    }
}
