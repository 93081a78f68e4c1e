use crate::Item;

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Full poster URL for a poster reference at the given size (e.g. `w200`).
/// `None` when the item has no poster; callers choose their own placeholder.
pub fn poster_url(poster_ref: Option<&str>, size: &str) -> Option<String> {
    let poster_ref = poster_ref.filter(|r| !r.is_empty())?;
    Some(format!("{IMAGE_BASE_URL}{size}{poster_ref}"))
}

pub fn year_label(item: &Item) -> String {
    item.release_year()
        .map(|year| year.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn rating_label(item: &Item) -> String {
    format!("{:.1}", item.rating)
}
