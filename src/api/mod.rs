/// Network access
///
/// This module handles:
/// - Searching Unsplash for the photo batch (unsplash.rs)
/// - Downloading photos and generating thumbnails (photo.rs)

pub mod photo;
pub mod unsplash;

/// Shared HTTP client for the search and photo downloads
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("⚠️  Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
}
