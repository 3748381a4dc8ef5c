/// Unsplash photo search
///
/// One GET against `search/photos`, returning the results in API order.
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::Config;
use crate::state::data::ImageRecord;

/// Data-source failure. Whatever the cause, the gallery stays on its loading
/// placeholder.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid search URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("search returned HTTP {0}")]
    Status(StatusCode),
    #[error("malformed search response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: String,
    urls: ResultUrls,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResultUrls {
    regular: String,
}

impl From<SearchResult> for ImageRecord {
    fn from(result: SearchResult) -> Self {
        ImageRecord {
            id: result.id,
            url: result.urls.regular,
            description: result.alt_description.or(result.description),
        }
    }
}

/// Build the search URL, credential included as `client_id`
pub fn search_url(config: &Config) -> Result<Url, FetchError> {
    let mut url = Url::parse(&config.api_base_url)?.join("search/photos")?;
    url.query_pairs_mut()
        .append_pair("query", &config.query)
        .append_pair("orientation", &config.orientation)
        .append_pair("per_page", &config.per_page.to_string())
        .append_pair("client_id", &config.access_key);
    Ok(url)
}

pub fn parse_search_response(body: &str) -> Result<Vec<ImageRecord>, FetchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.results.into_iter().map(ImageRecord::from).collect())
}

pub async fn search_photos(client: &Client, config: &Config) -> Result<Vec<ImageRecord>, FetchError> {
    let url = search_url(config)?;

    let response = client
        .get(url)
        .header("Accept-Version", config.api_version.as_str())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.text().await?;
    parse_search_response(&body)
}

/// Fetch boundary for the gallery: failures are logged and swallowed
pub async fn load_images(client: Client, config: Config) -> Option<Vec<ImageRecord>> {
    log::debug!("🔍 Searching '{}' ({}, {} per page)", config.query, config.orientation, config.per_page);

    match search_photos(&client, &config).await {
        Ok(records) => {
            log::info!("✅ Fetched {} images for '{}'", records.len(), config.query);
            Some(records)
        }
        Err(e) => {
            log::error!("❌ Fetching images failed: {}", e);
            None
        }
    }
}
