/// The secondary view: a strip of square thumbnails, the active one ringed
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, image, scrollable, Row, Space};
use iced::{Border, Color, ContentFit, Element, Length, Padding};

use crate::state::data::PhotoSlot;
use crate::state::gallery::GalleryState;
use crate::state::layout::StripGeometry;
use crate::state::scroll::ScrollTracker;
use crate::Message;

/// Width of the highlight ring around the active thumbnail
const RING_WIDTH: f32 = 2.0;
const RING_RADIUS: f32 = 12.0;

pub fn view<'a>(
    gallery: &GalleryState,
    photos: &'a [PhotoSlot],
    tracker: &ScrollTracker,
    geometry: StripGeometry,
) -> Element<'a, Message> {
    let thumbnails = photos
        .iter()
        .enumerate()
        .map(|(index, slot)| thumbnail(index, slot, gallery.is_active(index), geometry));

    let row = Row::with_children(thumbnails)
        .spacing(geometry.spacing)
        .padding(Padding {
            top: 0.0,
            right: geometry.padding,
            bottom: 0.0,
            left: geometry.padding,
        });

    scrollable(row)
        .id(tracker.id().clone())
        .direction(Direction::Horizontal(
            Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(Message::StripScrolled)
        .width(Length::Fill)
        .into()
}

fn thumbnail<'a>(
    index: usize,
    slot: &'a PhotoSlot,
    active: bool,
    geometry: StripGeometry,
) -> Element<'a, Message> {
    let inner = geometry.thumbnail_size - 2.0 * RING_WIDTH;

    let content: Element<'a, Message> = match slot.photo() {
        Some(photo) => image(photo.thumbnail.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(inner))
            .height(Length::Fixed(inner))
            .into(),
        None => Space::new(Length::Fixed(inner), Length::Fixed(inner)).into(),
    };

    let ring = container(content)
        .padding(RING_WIDTH)
        .width(Length::Fixed(geometry.thumbnail_size))
        .height(Length::Fixed(geometry.thumbnail_size))
        .style(move |_theme| container::Style {
            background: slot
                .photo()
                .is_none()
                .then(|| Color::from_rgba(1.0, 1.0, 1.0, 0.15).into()),
            border: Border {
                color: if active { Color::WHITE } else { Color::TRANSPARENT },
                width: RING_WIDTH,
                radius: RING_RADIUS.into(),
            },
            ..Default::default()
        });

    button(ring)
        .padding(0.0)
        .on_press(Message::ThumbnailTapped(index))
        .style(|_theme, _status| button::Style::default())
        .into()
}
