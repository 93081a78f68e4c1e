use std::fmt::Write;

use catalog_core::{
    AppViewModel, CarouselPhase, CarouselView, CategoryListView, CategorySection, GenreEntry,
    ItemRow, Screen,
};

/// Renders the view model as plain text for the terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    match (view.screen, view.category.as_ref()) {
        (Screen::Category, Some(list)) => render_category(&mut out, list),
        (Screen::Genres, _) => render_genres(&mut out, &view.genres),
        _ => render_home(&mut out, view),
    }
    out
}

fn render_home(out: &mut String, view: &AppViewModel) {
    if view.loading_home {
        let _ = writeln!(out, "Loading...");
        return;
    }
    render_carousel(out, &view.carousel);
    let _ = writeln!(out);
    if view.sections.is_empty() {
        let _ = writeln!(out, "No categories available.");
    }
    for section in &view.sections {
        render_section(out, section);
    }
}

fn render_carousel(out: &mut String, carousel: &CarouselView) {
    let phase = match carousel.phase {
        CarouselPhase::Idle => "idle",
        CarouselPhase::Running => "autoplay",
        CarouselPhase::Suspended => "paused",
    };
    match carousel.items.get(carousel.focus) {
        Some(focused) => {
            let _ = writeln!(
                out,
                "== Now playing [{}/{} {}] {}",
                carousel.focus + 1,
                carousel.items.len(),
                phase,
                label(focused)
            );
        }
        None => {
            let _ = writeln!(out, "== Now playing: nothing to show");
        }
    }
}

fn render_section(out: &mut String, section: &CategorySection) {
    let titles: Vec<&str> = section.items.iter().map(|row| row.title.as_str()).collect();
    let _ = writeln!(
        out,
        "[{}] {}: {}",
        section.category_id,
        section.name,
        titles.join(" | ")
    );
}

fn render_genres(out: &mut String, genres: &[GenreEntry]) {
    let _ = writeln!(out, "== Genres (`open <id>`)");
    if genres.is_empty() {
        let _ = writeln!(out, "No genres loaded.");
    }
    for genre in genres {
        let _ = writeln!(out, "{:>6}  {}", genre.category_id, genre.name);
    }
}

fn render_category(out: &mut String, list: &CategoryListView) {
    let _ = writeln!(
        out,
        "== {} (genre {}) sorted by {}",
        list.name, list.category_id, list.sort_key
    );
    for (position, row) in list.rows.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {}", position + 1, label(row));
    }

    let mut status = format!(
        "page {}/{} | {} items",
        list.current_page,
        list.total_pages,
        list.rows.len()
    );
    if list.loading {
        status.push_str(" | loading...");
    } else if list.has_more {
        status.push_str(" | `more` for next page");
    } else {
        status.push_str(" | end of list");
    }
    let _ = writeln!(out, "{status}");
    if let Some(error) = &list.error {
        let _ = writeln!(out, "! {error} (`more` to retry)");
    }
}

fn label(row: &ItemRow) -> String {
    format!("{} ({}) rating {}", row.title, row.year, row.rating)
}
