// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from raster formats (PNG, JPEG, GIF, WebP, ...).

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Approximate decoded size in bytes (RGBA, 4 bytes per pixel).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if the file cannot be read ([`crate::error::Error::Io`])
/// or the image data cannot be decoded ([`crate::error::Error::Decode`]).
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image.save(&image_path).expect("failed to write test image");

        let data = load_image(&image_path).expect("load should succeed");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.size_bytes(), 4 * 2 * 4);
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let result = load_image(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn load_invalid_data_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("broken.png");
        fs::write(&image_path, b"definitely not an image").expect("failed to write file");

        let result = load_image(&image_path);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn from_rgba_builds_handle() {
        let data = ImageData::from_rgba(2, 2, vec![0; 16]);
        assert_eq!(data.width, 2);
        assert_eq!(data.height, 2);
    }
}
