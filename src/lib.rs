// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is an agency showcase desktop app built with the Iced GUI
//! framework.
//!
//! It renders a scrollable landing page (development process, filterable
//! project gallery with a detail overlay, service offerings) and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
