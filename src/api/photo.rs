/// Photo download and thumbnail generation
///
/// The full image is handed to iced as downloaded. Thumbnails are decoded,
/// cropped square and downscaled on a blocking worker so the UI thread never
/// touches image codecs.
use iced::widget::image::Handle;
use image::{imageops::FilterType, RgbaImage};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::state::data::{ImageRecord, Photo};
use crate::state::layout::THUMBNAIL_SIZE;

/// Thumbnail edge in pixels (2x the on-screen size for HiDPI)
const THUMBNAIL_PIXELS: u32 = THUMBNAIL_SIZE as u32 * 2;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("download failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("download returned HTTP {0}")]
    Status(StatusCode),
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("thumbnail worker failed: {0}")]
    Worker(String),
}

/// Decode `bytes` and produce a square thumbnail
pub fn make_thumbnail(bytes: &[u8]) -> Result<RgbaImage, PhotoError> {
    let img = image::load_from_memory(bytes)?;
    let thumbnail = img.resize_to_fill(THUMBNAIL_PIXELS, THUMBNAIL_PIXELS, FilterType::Lanczos3);
    Ok(thumbnail.to_rgba8())
}

pub async fn download_photo(client: &Client, url: &str) -> Result<Photo, PhotoError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(PhotoError::Status(status));
    }

    let bytes = response.bytes().await?;

    // Spawn blocking because decoding and Lanczos resizing are CPU-intensive
    let thumbnail = tokio::task::spawn_blocking({
        let bytes = bytes.clone();
        move || make_thumbnail(&bytes)
    })
    .await
    .map_err(|e| PhotoError::Worker(e.to_string()))??;

    let (width, height) = thumbnail.dimensions();

    Ok(Photo {
        full: Handle::from_bytes(bytes),
        thumbnail: Handle::from_rgba(width, height, thumbnail.into_raw()),
    })
}

/// Download boundary for one gallery slot: failures are logged and the slot
/// is left without pixels
pub async fn load_photo(client: Client, index: usize, record: ImageRecord) -> (usize, Option<Photo>) {
    match download_photo(&client, &record.url).await {
        Ok(photo) => {
            log::debug!("📸 Loaded photo {} ({})", index, record.id);
            (index, Some(photo))
        }
        Err(e) => {
            log::warn!("⚠️  Photo {} ({}) failed: {}", index, record.id, e);
            (index, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([30, 120, 60, 255]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_thumbnail_is_square() {
        let thumbnail = make_thumbnail(&png_bytes(600, 900)).unwrap();
        assert_eq!(thumbnail.dimensions(), (THUMBNAIL_PIXELS, THUMBNAIL_PIXELS));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = make_thumbnail(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PhotoError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_photo_leaves_slot_empty() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let record = ImageRecord {
            id: "a".to_string(),
            url: format!("http://127.0.0.1:{port}/a.jpg"),
            description: None,
        };

        let (index, photo) = load_photo(Client::builder().no_proxy().build().unwrap(), 4, record).await;
        assert_eq!(index, 4);
        assert!(photo.is_none());
    }
}
