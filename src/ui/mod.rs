/// View builders for the gallery screen
///
/// - The paginated photo carousel (carousel.rs)
/// - The thumbnail strip (strip.rs)
use iced::widget::{container, text};
use iced::{Element, Length};

use crate::Message;

pub mod carousel;
pub mod strip;

/// Placeholder shown until the photo batch arrives
pub fn loading<'a>() -> Element<'a, Message> {
    container(text("Loading...").size(16))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
