// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`listing`] - Gallery listing with kind badges and sizes
//! - [`preview`] - Full-window preview pane (image / video poster)
//! - [`controls`] - Preview controls bar (navigation, slideshow, fullscreen)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controls;
pub mod design_tokens;
pub mod listing;
pub mod notifications;
pub mod preview;
pub mod styles;
