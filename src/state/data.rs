/// Shared data structures for the gallery state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.
use iced::widget::image::Handle;

/// A single photo returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Unsplash photo ID (unique and stable)
    pub id: String,
    /// Display-resolution image URL (`urls.regular`)
    pub url: String,
    /// Alt text, when the photographer provided one
    pub description: Option<String>,
}

/// Decoded pixels for one record, ready for the image widget
#[derive(Debug, Clone)]
pub struct Photo {
    /// Full image as downloaded
    pub full: Handle,
    /// Square thumbnail for the strip
    pub thumbnail: Handle,
}

/// Download state of a record's pixels
#[derive(Debug, Clone, Default)]
pub enum PhotoSlot {
    #[default]
    Pending,
    Ready(Photo),
    Failed,
}

impl PhotoSlot {
    pub fn photo(&self) -> Option<&Photo> {
        match self {
            PhotoSlot::Ready(photo) => Some(photo),
            _ => None,
        }
    }
}
