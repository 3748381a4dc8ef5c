use super::data::ImageRecord;

/// What caused the active index to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// The carousel came to rest on a page after a user gesture
    PageSettle,
    /// The user clicked a thumbnail in the strip
    ThumbnailTap,
}

/// A committed change of the active index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub source: SelectionSource,
}

/// The gallery screen's state.
///
/// `images` is filled exactly once by the first fetch completion. `active_index`
/// is the single source of truth for which photo both views show; it only
/// changes through [`GalleryState::on_page_settle`] and
/// [`GalleryState::on_thumbnail_tap`].
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    images: Option<Vec<ImageRecord>>,
    active_index: usize,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the fetch has delivered a result
    pub fn is_loading(&self) -> bool {
        self.images.is_none()
    }

    pub fn images(&self) -> Option<&[ImageRecord]> {
        self.images.as_deref()
    }

    pub fn len(&self) -> usize {
        self.images.as_ref().map_or(0, Vec::len)
    }

    /// The active index, or `None` while loading or when the batch is empty
    pub fn active_index(&self) -> Option<usize> {
        (self.active_index < self.len()).then_some(self.active_index)
    }

    /// Whether the thumbnail at `index` carries the highlight ring
    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    /// Store the fetched batch. Returns `false` (and keeps the existing batch)
    /// if images were already loaded.
    pub fn on_fetch_complete(&mut self, records: Vec<ImageRecord>) -> bool {
        if self.images.is_some() {
            return false;
        }

        self.images = Some(records);
        self.active_index = 0;
        true
    }

    pub fn on_page_settle(&mut self, index: usize) -> Option<Selection> {
        self.select(index, SelectionSource::PageSettle)
    }

    pub fn on_thumbnail_tap(&mut self, index: usize) -> Option<Selection> {
        self.select(index, SelectionSource::ThumbnailTap)
    }

    fn select(&mut self, index: usize, source: SelectionSource) -> Option<Selection> {
        if index >= self.len() {
            log::debug!("Ignoring {:?} for out-of-range index {}", source, index);
            return None;
        }

        if self.active_index != index {
            log::debug!("🖼️  Active image {} -> {} ({:?})", self.active_index, index, source);
        }
        self.active_index = index;

        Some(Selection { index, source })
    }
}
