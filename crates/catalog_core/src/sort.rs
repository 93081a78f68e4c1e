use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::Item;

/// Client-side ordering applied on top of the merged sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SortKey {
    /// Arrival order.
    #[default]
    None,
    TitleAsc,
    TitleDesc,
    YearAsc,
    YearDesc,
    RatingAsc,
    RatingDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::None,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::YearAsc,
        SortKey::YearDesc,
        SortKey::RatingAsc,
        SortKey::RatingDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::YearAsc => "year-asc",
            SortKey::YearDesc => "year-desc",
            SortKey::RatingAsc => "rating-asc",
            SortKey::RatingDesc => "rating-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key `{0}`")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSortKey(wanted.to_string()))
    }
}

/// Returns `items` ordered by `key` without touching the input.
///
/// Every call sorts the whole sequence. The sort is stable, so items with
/// equal keys keep their arrival order in both directions.
pub fn project(items: &[Item], key: SortKey) -> Vec<&Item> {
    let mut view: Vec<&Item> = items.iter().collect();
    match key {
        SortKey::None => {}
        SortKey::TitleAsc => view.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::TitleDesc => view.sort_by(|a, b| compare_titles(&a.title, &b.title).reverse()),
        SortKey::YearAsc => view.sort_by_key(|item| sort_year(item)),
        SortKey::YearDesc => view.sort_by(|a, b| sort_year(b).cmp(&sort_year(a))),
        SortKey::RatingAsc => view.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortKey::RatingDesc => view.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    view
}

fn sort_year(item: &Item) -> i32 {
    item.release_year().unwrap_or(0)
}

// Accents and case are folded away first so "Émile" sits between "Amélie"
// and "Zodiac". Accented spelling, then raw order, break the remaining ties.
fn compare_titles(a: &str, b: &str) -> Ordering {
    fold_title(a)
        .cmp(fold_title(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| a.cmp(b))
}

fn fold_title(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(title: &str) -> impl Iterator<Item = char> + '_ {
    title.chars().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_parse_from_their_display_form() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>(), Ok(key));
        }
        assert_eq!(" Rating-Desc ".parse::<SortKey>(), Ok(SortKey::RatingDesc));
        assert_eq!(
            "newest".parse::<SortKey>(),
            Err(UnknownSortKey("newest".to_string()))
        );
    }

    #[test]
    fn title_comparison_folds_case_and_accents() {
        assert_eq!(compare_titles("alien", "Brazil"), Ordering::Less);
        assert_eq!(compare_titles("Émile", "émile"), Ordering::Less);
        assert_eq!(compare_titles("Émile", "Zodiac"), Ordering::Less);
        assert_eq!(compare_titles("Emile", "Émile"), Ordering::Less);
        assert_eq!(compare_titles("Zodiac", "zodiac"), Ordering::Less);
        assert_eq!(compare_titles("Up", "Up"), Ordering::Equal);
    }
}
