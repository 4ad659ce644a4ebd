// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the `UpdateContext` borrowed view over the app state
//! and all specialized message handlers. State only ever changes here, in
//! response to a message; views receive what they render as arguments.

use super::Message;
use crate::error::Error;
use crate::gallery::{prefetch, GalleryNavigator, ImagePrefetchCache, Slideshow, SlideshowInterval};
use crate::media::{self, MediaKind, PreviewData};
use crate::ui::controls;
use crate::ui::listing;
use crate::ui::notifications::{self, Notification};
use crate::ui::preview;
use iced::{keyboard, window, Task};
use std::path::PathBuf;

/// Navigation intents shared by the controls bar, keyboard shortcuts, and
/// the slideshow tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRequest {
    Next,
    Previous,
    First,
    Last,
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut GalleryNavigator,
    pub preview_data: &'a mut Option<PreviewData>,
    pub loading_index: &'a mut Option<usize>,
    pub slideshow: &'a mut Slideshow,
    pub interval_input: &'a mut String,
    pub fullscreen: &'a mut bool,
    pub window_id: &'a mut Option<window::Id>,
    pub prefetch_cache: &'a mut ImagePrefetchCache,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles listing component messages.
pub fn handle_listing_message(ctx: &mut UpdateContext<'_>, message: listing::Message) -> Task<Message> {
    match message {
        listing::Message::Open(index) => open_entry(ctx, index),
    }
}

/// Handles preview controls messages.
pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
) -> Task<Message> {
    match message {
        controls::Message::First => handle_navigate(ctx, NavigationRequest::First),
        controls::Message::Previous => handle_navigate(ctx, NavigationRequest::Previous),
        controls::Message::Next => handle_navigate(ctx, NavigationRequest::Next),
        controls::Message::Last => handle_navigate(ctx, NavigationRequest::Last),
        controls::Message::Download => handle_download_requested(ctx),
        controls::Message::IntervalChanged(value) => {
            *ctx.interval_input = value;
            Task::none()
        }
        controls::Message::ToggleSlideshow => handle_toggle_slideshow(ctx),
        controls::Message::ToggleFullscreen => {
            toggle_fullscreen(ctx.fullscreen, ctx.window_id.as_ref())
        }
        controls::Message::Close => close_preview(ctx),
    }
}

/// Handles preview pane messages.
pub fn handle_preview_message(
    ctx: &mut UpdateContext<'_>,
    message: preview::Message,
) -> Task<Message> {
    match message {
        preview::Message::OpenExternally => {
            if let Some(entry) = ctx.gallery.current_entry() {
                if open::that(&entry.path).is_err() {
                    let name = entry.name.clone();
                    ctx.notifications.push(
                        Notification::error("notification-open-external-error")
                            .with_arg("name", name),
                    );
                }
            }
            Task::none()
        }
    }
}

/// Resolves a navigation intent against the navigator and opens the target.
pub fn handle_navigate(ctx: &mut UpdateContext<'_>, request: NavigationRequest) -> Task<Message> {
    let target = match request {
        NavigationRequest::Next => ctx.gallery.next(),
        NavigationRequest::Previous => ctx.gallery.previous(),
        NavigationRequest::First => ctx.gallery.first(),
        NavigationRequest::Last => ctx.gallery.last(),
    };

    match target {
        Some(index) => open_entry(ctx, index),
        None => Task::none(),
    }
}

/// Opens the entry at `index`: mounts its preview payload (from the prefetch
/// cache when warm, decoded in the background otherwise) and hints the new
/// neighbors for prefetching.
pub fn open_entry(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let Some(entry) = ctx.gallery.open(index).cloned() else {
        return Task::none();
    };

    let load_task = match entry.kind {
        Some(MediaKind::Video) => {
            *ctx.preview_data = Some(PreviewData::Video);
            *ctx.loading_index = None;
            Task::none()
        }
        Some(MediaKind::Image) => {
            if let Some(cached) = ctx.prefetch_cache.take(&entry.path) {
                *ctx.preview_data = Some(PreviewData::Image(cached));
                *ctx.loading_index = None;
                Task::none()
            } else {
                *ctx.preview_data = None;
                *ctx.loading_index = Some(index);
                let path = entry.path.clone();
                Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || media::load_image(&path))
                            .await
                            .unwrap_or_else(|e| Err(Error::Io(format!("Load task failed: {e}"))))
                    },
                    move |result| Message::PreviewLoaded {
                        index,
                        result: result.map(PreviewData::Image),
                    },
                )
            }
        }
        // open() rejects non-previewable indices, so this arm is unreachable.
        None => return Task::none(),
    };

    Task::batch([load_task, prefetch_neighbors(ctx)])
}

/// Spawns background decodes for the previewable neighbors of the open
/// preview that are not already cached.
fn prefetch_neighbors(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut tasks = Vec::new();

    for hint in prefetch::hints(ctx.gallery) {
        if hint.kind != MediaKind::Image || ctx.prefetch_cache.contains(&hint.path) {
            continue;
        }
        tasks.push(Task::perform(
            prefetch::load_for_prefetch(hint.path),
            |(path, result)| Message::NeighborPrefetched { path, result },
        ));
    }

    Task::batch(tasks)
}

/// Closes the preview, stopping the slideshow and leaving fullscreen before
/// releasing the mounted payload.
pub fn close_preview(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.slideshow.stop();
    ctx.gallery.close();
    *ctx.preview_data = None;
    *ctx.loading_index = None;
    update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), false)
}

/// Handles the async preview load result.
pub fn handle_preview_loaded(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    result: Result<PreviewData, Error>,
) -> Task<Message> {
    // A result for anything but the open entry is stale (the user navigated
    // on while it was decoding).
    if ctx.gallery.current_index() != Some(index) {
        return Task::none();
    }
    *ctx.loading_index = None;

    match result {
        Ok(data) => {
            *ctx.preview_data = Some(data);
            Task::none()
        }
        Err(_) => {
            let name = ctx
                .gallery
                .current_entry()
                .map(|e| e.name.clone())
                .unwrap_or_default();
            ctx.notifications
                .push(Notification::error("notification-load-error").with_arg("name", name));
            close_preview(ctx)
        }
    }
}

/// Handles a finished neighbor prefetch. Failures are silent: prefetching is
/// best-effort and the entry will be decoded again on open.
pub fn handle_neighbor_prefetched(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<media::ImageData, Error>,
) -> Task<Message> {
    if let Ok(image) = result {
        ctx.prefetch_cache.insert(path, image);
    }
    Task::none()
}

/// Starts or stops the slideshow. A start parses the interval field; empty
/// or invalid input cancels silently.
pub fn handle_toggle_slideshow(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.gallery.current_index().is_none() {
        ctx.slideshow.stop();
        return Task::none();
    }

    ctx.slideshow
        .toggle(SlideshowInterval::parse(ctx.interval_input));
    Task::none()
}

/// Advances the slideshow by one entry.
pub fn handle_slideshow_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.gallery.current_index().is_none() {
        ctx.slideshow.stop();
        return Task::none();
    }
    handle_navigate(ctx, NavigationRequest::Next)
}

/// Opens the save-a-copy dialog for the current entry.
pub fn handle_download_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(entry) = ctx.gallery.current_entry() else {
        return Task::none();
    };
    let file_name = entry.name.clone();

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::DownloadDialogResult,
    )
}

/// Handles the save-a-copy dialog result: copies the current entry's file to
/// the chosen destination.
pub fn handle_download_dialog_result(
    ctx: &mut UpdateContext<'_>,
    destination: Option<PathBuf>,
) -> Task<Message> {
    let Some(destination) = destination else {
        // User cancelled the dialog.
        return Task::none();
    };
    let Some(entry) = ctx.gallery.current_entry() else {
        return Task::none();
    };

    let shown_name = destination
        .file_name()
        .map_or_else(|| entry.name.clone(), |n| n.to_string_lossy().into_owned());

    match std::fs::copy(&entry.path, &destination) {
        Ok(_) => ctx.notifications.push(
            Notification::success("notification-download-success").with_arg("name", shown_name),
        ),
        Err(_) => ctx.notifications.push(
            Notification::error("notification-download-error").with_arg("name", shown_name),
        ),
    }
    Task::none()
}

/// Handles native events routed from the subscription.
///
/// The window id is captured from every event so fullscreen toggling has a
/// target. Keyboard shortcuts are only active while a preview is open.
pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    event: iced::Event,
) -> Task<Message> {
    *ctx.window_id = Some(window);

    if ctx.gallery.current_index().is_none() {
        return Task::none();
    }

    let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return Task::none();
    };

    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => close_preview(ctx),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
            handle_navigate(ctx, NavigationRequest::Previous)
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
            handle_navigate(ctx, NavigationRequest::Next)
        }
        keyboard::Key::Named(keyboard::key::Named::Home) => {
            handle_navigate(ctx, NavigationRequest::First)
        }
        keyboard::Key::Named(keyboard::key::Named::End) => {
            handle_navigate(ctx, NavigationRequest::Last)
        }
        keyboard::Key::Character(ref c)
            if c.as_str() == "s" && !modifiers.command() && !modifiers.alt() =>
        {
            handle_toggle_slideshow(ctx)
        }
        keyboard::Key::Character(ref c)
            if c.as_str() == "f" && !modifiers.command() && !modifiers.alt() =>
        {
            toggle_fullscreen(ctx.fullscreen, ctx.window_id.as_ref())
        }
        _ => Task::none(),
    }
}

/// Toggles fullscreen for the tracked window.
pub fn toggle_fullscreen(fullscreen: &mut bool, window_id: Option<&window::Id>) -> Task<Message> {
    let desired = !*fullscreen;
    update_fullscreen_mode(fullscreen, window_id, desired)
}

/// Updates fullscreen mode to the desired state. Idempotent: asking for the
/// current state is a no-op.
fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}
