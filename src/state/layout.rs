/// Geometry for both lists
///
/// The carousel pages are exactly one viewport wide, so page math only needs
/// the page width. The thumbnail strip is a row of fixed-size squares, which
/// lets us compute where any thumbnail sits without asking the widget tree.

/// Edge length of a thumbnail on screen
pub const THUMBNAIL_SIZE: f32 = 80.0;
/// Gap between thumbnails, also used as the strip's horizontal padding
pub const THUMBNAIL_SPACING: f32 = 10.0;

/// Offset that shows page `index` of the carousel
pub fn page_offset(index: usize, page_width: f32) -> f32 {
    index as f32 * page_width
}

/// The page a carousel offset rests closest to, clamped to the list
pub fn nearest_page(offset: f32, page_width: f32, len: usize) -> usize {
    if len == 0 || page_width <= 0.0 {
        return 0;
    }

    let page = (offset / page_width).round().max(0.0) as usize;
    page.min(len - 1)
}

/// Fixed geometry of the thumbnail strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    pub thumbnail_size: f32,
    pub spacing: f32,
    pub padding: f32,
}

impl Default for StripGeometry {
    fn default() -> Self {
        Self {
            thumbnail_size: THUMBNAIL_SIZE,
            spacing: THUMBNAIL_SPACING,
            padding: THUMBNAIL_SPACING,
        }
    }
}

impl StripGeometry {
    /// Distance from the start of one thumbnail to the next
    pub fn stride(&self) -> f32 {
        self.thumbnail_size + self.spacing
    }

    /// Total scrollable width of a strip holding `count` thumbnails
    pub fn content_width(&self, count: usize) -> f32 {
        let items = count as f32 * self.thumbnail_size;
        let gaps = count.saturating_sub(1) as f32 * self.spacing;
        2.0 * self.padding + items + gaps
    }

    /// Horizontal center of thumbnail `index` in content coordinates
    pub fn thumbnail_center(&self, index: usize) -> f32 {
        self.padding + index as f32 * self.stride() + self.thumbnail_size / 2.0
    }

    /// Strip offset that centers thumbnail `index` in a viewport `viewport_width`
    /// wide.
    ///
    /// Never negative: thumbnails near the start keep the strip at 0. Also never
    /// past the end of the content, so the last thumbnails stay flush right.
    pub fn centered_offset(&self, index: usize, viewport_width: f32, count: usize) -> f32 {
        let centered = self.thumbnail_center(index) - viewport_width / 2.0;
        let max_offset = (self.content_width(count) - viewport_width).max(0.0);

        centered.min(max_offset).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(0, 420.0), 0.0);
        assert_eq!(page_offset(3, 420.0), 1260.0);
    }

    #[test]
    fn test_nearest_page_rounds_and_clamps() {
        assert_eq!(nearest_page(0.0, 400.0, 5), 0);
        assert_eq!(nearest_page(190.0, 400.0, 5), 0);
        assert_eq!(nearest_page(210.0, 400.0, 5), 1);
        assert_eq!(nearest_page(1600.0, 400.0, 5), 4);
        assert_eq!(nearest_page(9000.0, 400.0, 5), 4);
        assert_eq!(nearest_page(-50.0, 400.0, 5), 0);
    }

    #[test]
    fn test_nearest_page_degenerate_inputs() {
        assert_eq!(nearest_page(500.0, 400.0, 0), 0);
        assert_eq!(nearest_page(500.0, 0.0, 3), 0);
    }

    #[test]
    fn test_content_width() {
        let strip = StripGeometry::default();
        assert_eq!(strip.content_width(0), 20.0);
        assert_eq!(strip.content_width(1), 100.0);
        assert_eq!(strip.content_width(20), 20.0 + 1600.0 + 190.0);
    }

    #[test]
    fn test_leading_thumbnails_clamp_to_zero() {
        let strip = StripGeometry::default();
        // Thumbnail 2 is centered at 10 + 180 + 40 = 230, which is left of
        // half a 500px viewport.
        for i in 0..=2 {
            assert_eq!(strip.centered_offset(i, 500.0, 20), 0.0);
        }
    }

    #[test]
    fn test_middle_thumbnail_is_centered() {
        let strip = StripGeometry::default();
        let offset = strip.centered_offset(10, 420.0, 20);

        assert_eq!(offset, 950.0 - 210.0);
        assert_eq!(offset + 210.0, strip.thumbnail_center(10));
    }

    #[test]
    fn test_trailing_thumbnails_stay_in_content() {
        let strip = StripGeometry::default();
        let max = strip.content_width(20) - 420.0;

        assert_eq!(strip.centered_offset(19, 420.0, 20), max);
    }

    #[test]
    fn test_offset_never_negative() {
        let strip = StripGeometry::default();
        for count in [0, 1, 3, 20] {
            for width in [100.0, 420.0, 1920.0] {
                for i in 0..count.max(1) {
                    assert!(strip.centered_offset(i, width, count) >= 0.0);
                }
            }
        }
    }
}
