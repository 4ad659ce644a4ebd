// SPDX-License-Identifier: MPL-2.0
//! Media kind detection and preview payloads.
//!
//! The gallery only ever decodes what the preview actually shows: images are
//! loaded into pixel data, videos stay on disk and are represented by a
//! poster pane (playback is delegated to the system player).

pub mod image;

use std::path::Path;

pub use image::{load_image, ImageData};

/// Displayable kind of a gallery entry.
///
/// Entries whose file type matches neither set carry no kind and are skipped
/// by preview navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Payload behind an open preview.
#[derive(Debug, Clone)]
pub enum PreviewData {
    Image(ImageData),
    /// Videos are not decoded; the preview shows a poster pane for them.
    Video,
}

impl PreviewData {
    /// Returns the media kind of this payload.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        match self {
            PreviewData::Image(_) => MediaKind::Image,
            PreviewData::Video => MediaKind::Video,
        }
    }
}

/// Supported media extensions.
pub mod extensions {
    /// Image file extensions.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "webp", "bmp", "ico", "tif", "tiff",
    ];

    /// Video file extensions.
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mkv", "webm", "avi", "mov", "mpeg"];
}

/// Detects the media kind of a path from its extension.
///
/// Returns `None` for extensions outside the supported sets, which marks the
/// entry as non-previewable.
#[must_use]
pub fn detect_media_kind(path: &Path) -> Option<MediaKind> {
    let extension = path.extension().and_then(|s| s.to_str())?;
    let extension = extension.to_lowercase();

    if extensions::IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Image)
    } else if extensions::VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_image_extensions() {
        assert_eq!(
            detect_media_kind(Path::new("photo.jpg")),
            Some(MediaKind::Image)
        );
        assert_eq!(
            detect_media_kind(Path::new("photo.PNG")),
            Some(MediaKind::Image)
        );
        assert_eq!(
            detect_media_kind(Path::new("anim.gif")),
            Some(MediaKind::Image)
        );
    }

    #[test]
    fn detects_video_extensions() {
        assert_eq!(
            detect_media_kind(Path::new("clip.mp4")),
            Some(MediaKind::Video)
        );
        assert_eq!(
            detect_media_kind(Path::new("clip.MKV")),
            Some(MediaKind::Video)
        );
    }

    #[test]
    fn rejects_unsupported_extensions() {
        assert_eq!(detect_media_kind(Path::new("notes.txt")), None);
        assert_eq!(detect_media_kind(Path::new("archive.zip")), None);
        assert_eq!(detect_media_kind(Path::new("no_extension")), None);
    }

    #[test]
    fn preview_data_reports_kind() {
        assert_eq!(PreviewData::Video.kind(), MediaKind::Video);
    }
}
