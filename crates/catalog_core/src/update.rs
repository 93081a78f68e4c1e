use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

use crate::state::OpenCategory;
use crate::{AppState, CarouselCommand, Effect, MergeOutcome, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AppStarted => {
            state.categories_pending = true;
            state.highlights_pending = true;
            state.mark_dirty();
            vec![Effect::FetchCategories, Effect::FetchHighlights]
        }
        Msg::CategoriesLoaded(result) => {
            state.categories_pending = false;
            state.mark_dirty();
            match result {
                Ok(categories) => {
                    catalog_info!("loaded {} categories", categories.len());
                    let effects = categories
                        .iter()
                        .map(|category| Effect::FetchPreview {
                            category_id: category.id,
                        })
                        .collect();
                    state.categories = categories;
                    effects
                }
                Err(failure) => {
                    catalog_warn!("category list failed: {}", failure);
                    Vec::new()
                }
            }
        }
        Msg::HighlightsLoaded(result) => {
            state.highlights_pending = false;
            state.mark_dirty();
            let highlights = result.unwrap_or_else(|failure| {
                catalog_warn!("highlights failed: {}", failure);
                Vec::new()
            });
            let mut commands = state.carousel.replace(highlights.len());
            state.highlights = highlights;
            commands.extend(state.carousel.start());
            carousel_effects(commands)
        }
        Msg::PreviewLoaded {
            category_id,
            result,
        } => {
            match result {
                Ok(items) => {
                    state.previews.insert(category_id, items);
                    state.mark_dirty();
                }
                Err(failure) => {
                    catalog_warn!("preview for category {} failed: {}", category_id, failure);
                }
            }
            Vec::new()
        }
        Msg::CategorySelected { category_id, name } => {
            if state.open.as_ref().map(|open| open.id) == Some(category_id) {
                return (state, Vec::new());
            }
            let name = name.unwrap_or_else(|| state.category_name(category_id));
            catalog_info!("opening category {} ({})", category_id, name);
            state.open = Some(OpenCategory {
                id: category_id,
                name,
            });
            state.genres_shown = false;
            state.last_error = None;
            let request = state.paginator.reset(category_id);
            state.mark_dirty();
            vec![Effect::FetchPage(request)]
        }
        Msg::CategoryClosed => {
            close_category(&mut state);
            if std::mem::take(&mut state.genres_shown) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::GenresRequested => {
            close_category(&mut state);
            if !state.genres_shown {
                state.genres_shown = true;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::LoadMoreRequested => match state.paginator.fetch_next_page() {
            Some(request) => {
                state.mark_dirty();
                vec![Effect::FetchPage(request)]
            }
            None => Vec::new(),
        },
        Msg::PageLoaded { request, result } => {
            match state.paginator.apply(request, result) {
                MergeOutcome::Merged { .. } => {
                    state.last_error = None;
                    state.mark_dirty();
                }
                MergeOutcome::Failed { failure, .. } => {
                    state.last_error = Some(failure);
                    state.mark_dirty();
                }
                MergeOutcome::Stale => {}
            }
            Vec::new()
        }
        Msg::SortChanged(sort_key) => {
            if state.sort_key != sort_key {
                catalog_debug!("sort key {} -> {}", state.sort_key, sort_key);
                state.sort_key = sort_key;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CarouselInteractionStarted => {
            let commands = state.carousel.on_interaction_start();
            carousel_changed(&mut state, commands)
        }
        Msg::CarouselInteractionEnded => {
            let commands = state.carousel.on_interaction_end();
            carousel_changed(&mut state, commands)
        }
        Msg::CarouselSettled { index } => {
            let before = state.carousel.current_index();
            state.carousel.settle(index);
            if state.carousel.current_index() != before {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::AutoplayFired { generation } => {
            let commands = state.carousel.fire(generation);
            carousel_changed(&mut state, commands)
        }
        Msg::QuitRequested => {
            state.open = None;
            state.paginator.close();
            let mut effects = carousel_effects(state.carousel.teardown());
            effects.push(Effect::Shutdown);
            effects
        }
    };

    (state, effects)
}

fn close_category(state: &mut AppState) {
    if state.open.take().is_some() {
        state.paginator.close();
        state.last_error = None;
        state.mark_dirty();
    }
}

fn carousel_changed(state: &mut AppState, commands: Vec<CarouselCommand>) -> Vec<Effect> {
    if !commands.is_empty() {
        state.mark_dirty();
    }
    carousel_effects(commands)
}

fn carousel_effects(commands: Vec<CarouselCommand>) -> Vec<Effect> {
    commands
        .into_iter()
        .map(|command| match command {
            CarouselCommand::Schedule { generation, delay } => {
                Effect::ScheduleAdvance { generation, delay }
            }
            CarouselCommand::Cancel => Effect::CancelAdvance,
            CarouselCommand::MoveTo { index } => Effect::ScrollCarouselTo { index },
        })
        .collect()
}
