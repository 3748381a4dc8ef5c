use std::time::Instant;

use env_logger::{Builder, Target};
use iced::widget::{column, scrollable, stack, Space};
use iced::{task, window, Element, Length, Size, Subscription, Task, Theme};
use log::LevelFilter;

mod api;
mod config;
mod state;
mod ui;

use config::Config;
use state::data::{ImageRecord, Photo, PhotoSlot};
use state::gallery::{GalleryState, Selection};
use state::layout::{self, StripGeometry, THUMBNAIL_SIZE};
use state::motion::Easing;
use state::scroll::{ScrollOrigin, ScrollTracker};

/// The gallery screen
struct Gallery {
    /// Loaded records and the active index
    gallery: GalleryState,
    /// Pixels for each record, same order as the records
    photos: Vec<PhotoSlot>,
    /// Primary view scroll state; its viewport width is the page width
    carousel: ScrollTracker,
    /// Thumbnail strip scroll state
    strip: ScrollTracker,
    geometry: StripGeometry,
    client: reqwest::Client,
    /// In-flight search; aborted if the screen goes away first
    fetch: Option<task::Handle>,
    /// In-flight photo downloads
    downloads: Option<task::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The search finished; `None` if it failed
    ImagesLoaded(Option<Vec<ImageRecord>>),
    /// One photo finished downloading; `None` if it failed
    PhotoLoaded(usize, Option<Photo>),
    /// The carousel scrolled (user gesture or our own scroll_to)
    CarouselScrolled(scrollable::Viewport),
    /// The thumbnail strip scrolled
    StripScrolled(scrollable::Viewport),
    /// User clicked a thumbnail
    ThumbnailTapped(usize),
    /// Display frame, only subscribed while a list is animating or settling
    Frame(Instant),
    WindowResized(Size),
}

impl Gallery {
    /// Create the screen and start the one-time search
    fn new(config: Config) -> (Self, Task<Message>) {
        let client = api::http_client();
        let width = config.window_width;

        let (fetch, handle) = Task::perform(
            api::unsplash::load_images(client.clone(), config),
            Message::ImagesLoaded,
        )
        .abortable();

        (
            Gallery {
                gallery: GalleryState::new(),
                photos: Vec::new(),
                carousel: ScrollTracker::new(width),
                strip: ScrollTracker::new(width).with_easing(Easing::EaseInOut),
                geometry: StripGeometry::default(),
                client,
                fetch: Some(handle),
                downloads: None,
            },
            fetch,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ImagesLoaded(Some(records)) => {
                self.fetch = None;

                if !self.gallery.on_fetch_complete(records.clone()) {
                    return Task::none();
                }

                log::info!("🎨 Gallery ready with {} images", records.len());
                self.photos = vec![PhotoSlot::Pending; records.len()];

                let downloads = records.into_iter().enumerate().map(|(index, record)| {
                    Task::perform(
                        api::photo::load_photo(self.client.clone(), index, record),
                        |(index, photo)| Message::PhotoLoaded(index, photo),
                    )
                });

                let (task, handle) = Task::batch(downloads).abortable();
                self.downloads = Some(handle);
                task
            }
            Message::ImagesLoaded(None) => {
                self.fetch = None;
                log::warn!("No images to show; staying on the loading screen");
                Task::none()
            }
            Message::PhotoLoaded(index, photo) => {
                if let Some(slot) = self.photos.get_mut(index) {
                    *slot = photo.map_or(PhotoSlot::Failed, PhotoSlot::Ready);
                }
                Task::none()
            }
            Message::CarouselScrolled(viewport) => {
                self.on_carousel_scrolled(
                    viewport.absolute_offset().x,
                    viewport.bounds().width,
                    Instant::now(),
                );
                Task::none()
            }
            Message::StripScrolled(viewport) => {
                self.strip.on_scrolled(
                    viewport.absolute_offset().x,
                    viewport.bounds().width,
                    Instant::now(),
                );
                Task::none()
            }
            Message::ThumbnailTapped(index) => {
                if let Some(selection) = self.gallery.on_thumbnail_tap(index) {
                    self.follow_selection(selection, Instant::now());
                }
                Task::none()
            }
            Message::Frame(now) => self.on_frame(now),
            Message::WindowResized(size) => {
                self.carousel.set_viewport_width(size.width);
                self.strip.set_viewport_width(size.width);

                // Keep the active page aligned to the new page width
                match self.gallery.active_index() {
                    Some(index) => {
                        let offset = self
                            .carousel
                            .jump_to(layout::page_offset(index, self.carousel.viewport_width()));
                        self.carousel.scroll_to(offset)
                    }
                    None => Task::none(),
                }
            }
        }
    }

    fn on_carousel_scrolled(&mut self, offset: f32, viewport_width: f32, now: Instant) {
        if self.carousel.on_scrolled(offset, viewport_width, now) == ScrollOrigin::User {
            log::trace!("Carousel gesture at {:.1}", offset);
        }
    }

    /// Advance animations and settle finished gestures
    fn on_frame(&mut self, now: Instant) -> Task<Message> {
        if let Some(offset) = self.carousel.take_settled(now) {
            let page = layout::nearest_page(
                offset,
                self.carousel.viewport_width(),
                self.gallery.len(),
            );
            if let Some(selection) = self.gallery.on_page_settle(page) {
                self.follow_selection(selection, now);
            }
        }

        // Strip gestures only move the strip
        let _ = self.strip.take_settled(now);

        let mut tasks = Vec::new();
        if let Some(offset) = self.carousel.tick(now) {
            tasks.push(self.carousel.scroll_to(offset));
        }
        if let Some(offset) = self.strip.tick(now) {
            tasks.push(self.strip.scroll_to(offset));
        }

        Task::batch(tasks)
    }

    /// Bring both lists to the selected index
    fn follow_selection(&mut self, selection: Selection, now: Instant) {
        let page = layout::page_offset(selection.index, self.carousel.viewport_width());
        let strip = self.geometry.centered_offset(
            selection.index,
            self.strip.viewport_width(),
            self.gallery.len(),
        );

        log::debug!(
            "Following {:?} to {}: carousel -> {:.0}, strip -> {:.0}",
            selection.source,
            selection.index,
            page,
            strip
        );

        self.carousel.animate_to(page, now);
        self.strip.animate_to(strip, now);
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let Some(images) = self.gallery.images() else {
            return ui::loading();
        };

        let carousel = ui::carousel::view(images, &self.photos, &self.carousel);
        let strip = ui::strip::view(&self.gallery, &self.photos, &self.strip, self.geometry);

        stack![
            carousel,
            column![
                Space::with_height(Length::Fill),
                strip,
                Space::with_height(Length::Fixed(THUMBNAIL_SIZE)),
            ],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        if self.carousel.is_busy() || self.strip.is_busy() {
            Subscription::batch([resize, window::frames().map(Message::Frame)])
        } else {
            resize
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        for handle in [self.fetch.take(), self.downloads.take()].into_iter().flatten() {
            handle.abort();
        }
    }
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }

    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("nature_gallery", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    init_logger();

    let config = Config::load().unwrap_or_else(|e| {
        log::error!("❌ {}; using defaults", e);
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    });

    if !config.has_access_key() {
        log::warn!("⚠️  No Unsplash access key configured; set UNSPLASH_ACCESS_KEY");
    }

    let window_size = Size::new(config.window_width, config.window_height);

    iced::application("Nature Gallery", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Gallery::new(config))
}
