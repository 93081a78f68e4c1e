use bytes::BytesMut;
use futures_util::StreamExt;
use url::Url;

use catalog_core::{Category, CategoryId, Item, Page};
use catalog_logging::catalog_debug;

use crate::wire::{decode_genres, decode_page};
use crate::{CatalogError, CatalogSettings, FailureKind};

/// Read access to the remote catalog. Implementations never retry; retry
/// policy belongs to the caller.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// One page of one category. `page` must be at least 1.
    async fn fetch_page(&self, category_id: CategoryId, page: u32) -> Result<Page, CatalogError>;

    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// Currently featured items for the highlights carousel.
    async fn fetch_highlights(&self) -> Result<Vec<Item>, CatalogError>;

    /// Leading items of a category for its home-screen row.
    async fn fetch_preview(&self, category_id: CategoryId) -> Result<Vec<Item>, CatalogError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogClient {
    settings: CatalogSettings,
    client: reqwest::Client,
}

impl ReqwestCatalogClient {
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| CatalogError::new(FailureKind::Internal, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, CatalogError> {
        let raw = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path);
        let mut url = Url::parse(&raw)
            .map_err(|err| CatalogError::new(FailureKind::InvalidRequest, err.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.settings.api_key);
            pairs.append_pair("language", &self.settings.language);
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<BytesMut, CatalogError> {
        catalog_debug!("GET {}", redact(&url));
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(CatalogError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(CatalogError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl CatalogClient for ReqwestCatalogClient {
    async fn fetch_page(&self, category_id: CategoryId, page: u32) -> Result<Page, CatalogError> {
        if page == 0 {
            return Err(CatalogError::new(
                FailureKind::InvalidRequest,
                "page numbers start at 1",
            ));
        }
        let url = self.endpoint(
            "discover/movie",
            &[
                ("with_genres", category_id.to_string()),
                ("page", page.to_string()),
            ],
        )?;
        let body = self.get(url).await?;
        decode_page(&body)
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let url = self.endpoint("genre/movie/list", &[])?;
        let body = self.get(url).await?;
        decode_genres(&body)
    }

    async fn fetch_highlights(&self) -> Result<Vec<Item>, CatalogError> {
        let url = self.endpoint("movie/now_playing", &[("page", "1".to_string())])?;
        let body = self.get(url).await?;
        let mut items = decode_page(&body)?.items;
        items.truncate(self.settings.highlight_count);
        Ok(items)
    }

    async fn fetch_preview(&self, category_id: CategoryId) -> Result<Vec<Item>, CatalogError> {
        let mut items = self.fetch_page(category_id, 1).await?.items;
        items.truncate(self.settings.preview_count);
        Ok(items)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        return CatalogError::new(FailureKind::Timeout, err.to_string());
    }
    CatalogError::new(FailureKind::Network, err.to_string())
}

// Keeps the API key out of the log file.
fn redact(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "api_key" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}
