//! JSON payloads of the catalog service and their conversion into domain types.

use catalog_core::{Category, Item, Page};
use serde::Deserialize;

use crate::{CatalogError, FailureKind};

#[derive(Debug, Deserialize)]
struct PageDto {
    page: u32,
    results: Vec<MovieDto>,
    total_pages: u32,
    #[serde(default)]
    total_results: u64,
}

#[derive(Debug, Deserialize)]
struct MovieDto {
    id: u64,
    title: String,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    vote_average: f64,
    #[serde(default)]
    poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenreListDto {
    genres: Vec<GenreDto>,
}

#[derive(Debug, Deserialize)]
struct GenreDto {
    id: u64,
    name: String,
}

pub(crate) fn decode_page(bytes: &[u8]) -> Result<Page, CatalogError> {
    let dto: PageDto = parse(bytes)?;
    Ok(Page {
        page_number: dto.page,
        items: dto.results.into_iter().map(Item::from).collect(),
        total_pages: dto.total_pages,
        total_results: dto.total_results,
    })
}

pub(crate) fn decode_genres(bytes: &[u8]) -> Result<Vec<Category>, CatalogError> {
    let dto: GenreListDto = parse(bytes)?;
    Ok(dto
        .genres
        .into_iter()
        .map(|genre| Category {
            id: genre.id,
            name: genre.name,
        })
        .collect())
}

fn parse<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T, CatalogError> {
    serde_json::from_slice(bytes)
        .map_err(|err| CatalogError::new(FailureKind::Malformed, err.to_string()))
}

impl From<MovieDto> for Item {
    fn from(dto: MovieDto) -> Self {
        Item {
            id: dto.id,
            title: dto.title,
            // The service sends "" for unknown dates.
            release_date: dto.release_date.filter(|date| !date.trim().is_empty()),
            rating: dto.vote_average.clamp(0.0, 10.0),
            poster_ref: dto.poster_path.filter(|path| !path.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_discover_page() {
        let body = br#"{
            "page": 2,
            "results": [
                {"id": 603, "title": "The Matrix", "release_date": "1999-03-30",
                 "vote_average": 8.2, "poster_path": "/matrix.jpg", "popularity": 90.1},
                {"id": 11, "title": "Untitled", "release_date": "", "poster_path": null}
            ],
            "total_pages": 37,
            "total_results": 729
        }"#;

        let page = decode_page(body).expect("page");
        assert_eq!(page.page_number, 2);
        assert_eq!(page.total_pages, 37);
        assert_eq!(page.total_results, 729);
        assert_eq!(page.items[0].poster_ref.as_deref(), Some("/matrix.jpg"));
        assert_eq!(page.items[0].release_year(), Some(1999));
        assert_eq!(page.items[1].release_date, None);
        assert_eq!(page.items[1].rating, 0.0);
        assert_eq!(page.items[1].poster_ref, None);
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let err = decode_page(br#"{"page": 1, "total_pages": 3}"#).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.message.contains("results"));

        let err = decode_page(br#"{"page": 1, "results": [{"title": "no id"}], "total_pages": 1}"#)
            .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = decode_genres(b"<html>maintenance</html>").unwrap_err();
        assert_eq!(err.kind, FailureKind::Malformed);
    }

    #[test]
    fn decodes_genre_list() {
        let genres =
            decode_genres(br#"{"genres":[{"id":28,"name":"Action"},{"id":35,"name":"Comedy"}]}"#)
                .unwrap();
        assert_eq!(
            genres,
            vec![
                Category {
                    id: 28,
                    name: "Action".into()
                },
                Category {
                    id: 35,
                    name: "Comedy".into()
                },
            ]
        );
    }
}
