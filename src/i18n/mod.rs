// SPDX-License-Identifier: MPL-2.0
//! Internationalization support via Fluent.

pub mod fluent;

pub use fluent::I18n;
