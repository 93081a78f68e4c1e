use std::time::Duration;

use catalog_core::DEFAULT_PAGE_CAP;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub base_url: String,
    pub api_key: String,
    pub language: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    /// Number of now-playing items shown in the highlights carousel.
    pub highlight_count: usize,
    /// Number of items shown per genre on the home screen.
    pub preview_count: usize,
    pub page_cap: u32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            language: "en-US".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
            highlight_count: 5,
            preview_count: 5,
            page_cap: DEFAULT_PAGE_CAP,
        }
    }
}
