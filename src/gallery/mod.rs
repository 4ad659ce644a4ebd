// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: the immutable entry list and navigation over it.
//!
//! The listing is scanned once at startup and never mutated; everything the
//! preview does (open, close, next/previous/first/last, slideshow, prefetch)
//! is index navigation over that list, with non-previewable entries treated
//! as gaps to skip.

pub mod entry;
pub mod navigator;
pub mod prefetch;
pub mod scanner;
pub mod slideshow;

pub use entry::Entry;
pub use navigator::{GalleryNavigator, NavigationInfo, Neighbors};
pub use prefetch::ImagePrefetchCache;
pub use slideshow::{Slideshow, SlideshowInterval};
