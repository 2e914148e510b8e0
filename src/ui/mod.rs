// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`landing`] - The showcase page: process, projects gallery, services
//! - [`settings`] - Application preferences (language, appearance)
//! - [`about`] - Application version, license, and credits
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (entrance reveals)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Glyph icons and catalog icon-token mapping
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod design_tokens;
pub mod icons;
pub mod landing;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod state;
pub mod styles;
pub mod theming;
