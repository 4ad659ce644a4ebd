// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::{ImageData, PreviewData};
use crate::ui::controls;
use crate::ui::listing;
use crate::ui::notifications;
use crate::ui::preview;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Listing(listing::Message),
    Controls(controls::Message),
    Preview(preview::Message),
    Notification(notifications::NotificationMessage),
    /// Result of loading the preview payload for the entry at `index`.
    PreviewLoaded {
        index: usize,
        result: Result<PreviewData, Error>,
    },
    /// Result from decoding an adjacent entry in the background.
    NeighborPrefetched {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// Result from the save-a-copy dialog.
    DownloadDialogResult(Option<PathBuf>),
    /// Slideshow advance.
    SlideshowTick(Instant),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// A native event routed from the subscription.
    RawEvent {
        window: iced::window::Id,
        event: iced::Event,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Gallery directory to scan on startup (defaults to the working
    /// directory).
    pub gallery_dir: Option<String>,
}
