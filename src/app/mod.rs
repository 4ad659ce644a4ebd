// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery, the preview, localization,
//! and user feedback, and translates messages into side effects like
//! background decoding or fullscreen switching. Policy decisions (window
//! sizing, scan options, interval prefill) stay close to the main update
//! loop so user-facing behavior is easy to audit.

mod message;
pub mod subscription;
pub mod update;
pub mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery::{scanner, GalleryNavigator, ImagePrefetchCache, Slideshow};
use crate::i18n::fluent::I18n;
use crate::media::PreviewData;
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: GalleryNavigator,
    /// Payload of the open preview, `None` while closed or still loading.
    preview_data: Option<PreviewData>,
    /// Index whose payload is currently decoding in the background.
    loading_index: Option<usize>,
    slideshow: Slideshow,
    /// Contents of the slideshow interval field, in decimal seconds.
    interval_input: String,
    fullscreen: bool,
    window_id: Option<window::Id>,
    prefetch_cache: ImagePrefetchCache,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("entries", &self.gallery.len())
            .field("current_index", &self.gallery.current_index())
            .field("slideshow_running", &self.slideshow.is_running())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: GalleryNavigator::new(),
            preview_data: None,
            loading_index: None,
            slideshow: Slideshow::default(),
            interval_input: format_interval(config::DEFAULT_SLIDESHOW_INTERVAL_SECS),
            fullscreen: false,
            window_id: None,
            prefetch_cache: ImagePrefetchCache::with_defaults(),
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Formats a seconds value for the interval field prefill.
fn format_interval(secs: f64) -> String {
    format!("{secs}")
}

impl App {
    /// Initializes application state and scans the gallery directory given
    /// in `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.interval_input = format_interval(
            config
                .slideshow_interval_secs
                .unwrap_or(config::DEFAULT_SLIDESHOW_INTERVAL_SECS),
        );

        let directory = flags
            .gallery_dir
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let options = scanner::ScanOptions {
            sort_by: config.sort_by.unwrap_or_default(),
            sort_direction: config.sort_direction.unwrap_or_default(),
            exclude_dotfiles: config.exclude_dotfiles.unwrap_or(true),
        };

        match scanner::scan_gallery(&directory, options) {
            Ok(entries) => app.gallery = GalleryNavigator::with_entries(entries),
            Err(_) => app
                .notifications
                .push(Notification::error("notification-scan-error")),
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.current_entry() {
            Some(entry) => format!("{} - {app_name}", entry.name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_slideshow_subscription(self.slideshow),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            preview_data: &mut self.preview_data,
            loading_index: &mut self.loading_index,
            slideshow: &mut self.slideshow,
            interval_input: &mut self.interval_input,
            fullscreen: &mut self.fullscreen,
            window_id: &mut self.window_id,
            prefetch_cache: &mut self.prefetch_cache,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Listing(listing_message) => {
                update::handle_listing_message(&mut ctx, listing_message)
            }
            Message::Controls(controls_message) => {
                update::handle_controls_message(&mut ctx, controls_message)
            }
            Message::Preview(preview_message) => {
                update::handle_preview_message(&mut ctx, preview_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::PreviewLoaded { index, result } => {
                update::handle_preview_loaded(&mut ctx, index, result)
            }
            Message::NeighborPrefetched { path, result } => {
                update::handle_neighbor_prefetched(&mut ctx, path, result)
            }
            Message::DownloadDialogResult(destination) => {
                update::handle_download_dialog_result(&mut ctx, destination)
            }
            Message::SlideshowTick(_instant) => update::handle_slideshow_tick(&mut ctx),
            Message::Tick(_instant) => {
                ctx.notifications.tick();
                Task::none()
            }
            Message::RawEvent { window, event } => {
                update::handle_raw_event(&mut ctx, window, event)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            preview_data: self.preview_data.as_ref(),
            slideshow: self.slideshow,
            interval_input: &self.interval_input,
            fullscreen: self.fullscreen,
            notifications: &self.notifications,
        })
    }
}
