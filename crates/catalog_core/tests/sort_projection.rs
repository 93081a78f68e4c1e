use catalog_core::{project, Item, SortKey};
use pretty_assertions::assert_eq;

fn item(id: u64, title: &str, date: Option<&str>, rating: f64) -> Item {
    Item {
        id,
        title: title.to_string(),
        release_date: date.map(ToOwned::to_owned),
        rating,
        poster_ref: None,
    }
}

fn sample() -> Vec<Item> {
    vec![
        item(1, "brazil", Some("1985-02-20"), 7.8),
        item(2, "Alien", Some("1979-05-25"), 8.1),
        item(3, "Zodiac", None, 7.7),
        item(4, "alien", Some("1979-09-01"), 8.1),
        item(5, "Heat", Some("1995-12-15"), 8.3),
    ]
}

fn ids(projected: &[&Item]) -> Vec<u64> {
    projected.iter().map(|item| item.id).collect()
}

#[test]
fn none_returns_arrival_order() {
    let items = sample();
    assert_eq!(ids(&project(&items, SortKey::None)), vec![1, 2, 3, 4, 5]);
}

#[test]
fn projection_never_mutates_input_and_is_idempotent() {
    let items = sample();
    let snapshot = items.clone();
    for key in SortKey::ALL {
        let once = ids(&project(&items, key));
        let twice = ids(&project(&items, key));
        assert_eq!(once, twice, "key {key}");
        assert_eq!(items, snapshot, "key {key}");
    }
}

#[test]
fn title_sort_ignores_case() {
    let items = sample();
    assert_eq!(ids(&project(&items, SortKey::TitleAsc)), vec![2, 4, 1, 5, 3]);
    assert_eq!(ids(&project(&items, SortKey::TitleDesc)), vec![3, 5, 1, 4, 2]);
}

#[test]
fn accented_titles_sort_with_their_base_letters() {
    let items = vec![
        item(1, "Zodiac", None, 0.0),
        item(2, "Émile", None, 0.0),
        item(3, "Amélie", None, 0.0),
        item(4, "Emile", None, 0.0),
    ];
    let titles = |key| {
        project(&items, key)
            .iter()
            .map(|item| item.title.as_str())
            .collect::<Vec<_>>()
    };
    assert_eq!(
        titles(SortKey::TitleAsc),
        vec!["Amélie", "Emile", "Émile", "Zodiac"]
    );
    assert_eq!(
        titles(SortKey::TitleDesc),
        vec!["Zodiac", "Émile", "Emile", "Amélie"]
    );
}

#[test]
fn year_desc_treats_absent_year_as_zero() {
    let items = vec![
        item(1, "a", Some("2001-01-01"), 5.0),
        item(2, "b", None, 5.0),
        item(3, "c", Some("1999-06-30"), 5.0),
    ];
    assert_eq!(ids(&project(&items, SortKey::YearDesc)), vec![1, 3, 2]);
    assert_eq!(ids(&project(&items, SortKey::YearAsc)), vec![2, 3, 1]);
}

#[test]
fn unparsable_release_date_sorts_like_absent() {
    let items = vec![
        item(1, "a", Some("soon"), 5.0),
        item(2, "b", Some("1950-01-01"), 5.0),
        item(3, "c", None, 5.0),
    ];
    assert_eq!(ids(&project(&items, SortKey::YearAsc)), vec![1, 3, 2]);
}

#[test]
fn equal_keys_keep_arrival_order_in_both_directions() {
    let items = sample();
    // Items 2 and 4 share rating 8.1 and year 1979.
    assert_eq!(ids(&project(&items, SortKey::RatingAsc)), vec![3, 1, 2, 4, 5]);
    assert_eq!(ids(&project(&items, SortKey::RatingDesc)), vec![5, 2, 4, 1, 3]);
    assert_eq!(ids(&project(&items, SortKey::YearAsc)), vec![3, 2, 4, 1, 5]);
    assert_eq!(ids(&project(&items, SortKey::YearDesc)), vec![5, 1, 2, 4, 3]);
}

#[test]
fn projection_of_empty_sequence_is_empty() {
    for key in SortKey::ALL {
        assert!(project(&[], key).is_empty());
    }
}
