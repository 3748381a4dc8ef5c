/// The primary view: one photo per page, full window
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{container, image, scrollable, text, Row};
use iced::{Color, ContentFit, Element, Length};

use crate::state::data::{ImageRecord, PhotoSlot};
use crate::state::scroll::ScrollTracker;
use crate::Message;

pub fn view<'a>(
    images: &'a [ImageRecord],
    photos: &'a [PhotoSlot],
    tracker: &ScrollTracker,
) -> Element<'a, Message> {
    let page_width = tracker.viewport_width();

    let pages = images
        .iter()
        .zip(photos)
        .map(|(record, slot)| page(record, slot, page_width));

    scrollable(Row::with_children(pages))
        .id(tracker.id().clone())
        .direction(Direction::Horizontal(
            Scrollbar::new()
                .width(0.0) // Hide scrollbar
                .scroller_width(0.0),
        ))
        .on_scroll(Message::CarouselScrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn page<'a>(record: &'a ImageRecord, slot: &'a PhotoSlot, page_width: f32) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot.photo() {
        Some(photo) => image(photo.full.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        // Alt text stands in until the pixels arrive (or if they never do)
        None => text(record.description.as_deref().unwrap_or_default())
            .size(14)
            .color(Color::from_rgb(0.5, 0.5, 0.5))
            .into(),
    };

    container(content)
        .center_x(Length::Fixed(page_width))
        .center_y(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb(0.06, 0.06, 0.06).into()),
            ..Default::default()
        })
        .into()
}
