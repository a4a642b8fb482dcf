//! NASA astronomy picture of the day.

use watchboard_core::error::Result;
use watchboard_core::PictureOfDay;

use crate::http::HttpClient;
use crate::PictureSource;

pub struct ApodFeed {
    http: HttpClient,
    url: String,
    api_key: String,
}

impl ApodFeed {
    pub fn new(http: HttpClient, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { http, url: url.into(), api_key: api_key.into() }
    }
}

impl PictureSource for ApodFeed {
    async fn today(&self) -> Result<PictureOfDay> {
        self.http
            .get_json(&self.url, &[("api_key", self.api_key.clone())], "picture of the day")
            .await
    }
}
