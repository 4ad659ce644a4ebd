// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a lightweight media gallery previewer built with the
//! Iced GUI framework.
//!
//! It turns a directory listing into an interactive full-screen preview with
//! skip-invalid navigation, an auto-advancing slideshow, and prefetch of
//! adjacent entries, and demonstrates internationalization with Fluent and
//! user preference management.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;
