// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are Unicode glyphs rendered as text, which keeps the binary free of
//! raster assets and renders consistently with the active font at any size.
//! Catalog records reference icons via the [`Icon`](crate::catalog::Icon)
//! token; [`for_token`] maps a token to its glyph.
//!
//! # Naming Convention
//!
//! Glyph constants use generic visual names describing the icon's appearance,
//! not the action context (e.g., `CROSS` not `close_dialog`).

use crate::catalog::Icon;
use iced::widget::{text, Text};
use iced::Color;

/// Chevron pointing right: list bullets, forward affordances.
pub const CHEVRON_RIGHT: &str = "›";
/// Chevron pointing left: back affordances.
pub const CHEVRON_LEFT: &str = "‹";
/// Cross: dismiss/close.
pub const CROSS: &str = "✕";
/// Arrow pointing up-right: external link.
pub const ARROW_UP_RIGHT: &str = "↗";
/// Angle brackets: source code.
pub const BRACKETS: &str = "</>";
/// Arrows pointing outward: expand/details.
pub const EXPAND: &str = "⤢";
/// Three horizontal lines: hamburger menu.
pub const HAMBURGER: &str = "☰";
/// Letter i in a circle: information.
pub const INFO: &str = "ⓘ";
/// Gear: settings.
pub const COG: &str = "⚙";
/// Checkmark: success.
pub const CHECKMARK: &str = "✓";
/// Exclamation mark: warnings and errors.
pub const BANG: &str = "!";

/// Returns the glyph for a catalog icon token.
#[must_use]
pub fn for_token(icon: Icon) -> &'static str {
    match icon {
        Icon::Search => "⌕",
        Icon::Pen => "✎",
        Icon::Terminal => ">_",
        Icon::Server => "▤",
        Icon::Cloud => "☁",
        Icon::Code => "</>",
        Icon::Layers => "❏",
        Icon::Database => "⛁",
    }
}

/// Creates a glyph text widget with the given size.
#[must_use]
pub fn sized(glyph: &'static str, size: f32) -> Text<'static> {
    text(glyph).size(size)
}

/// Creates a glyph text widget with the given size and color.
#[must_use]
pub fn tinted(glyph: &'static str, size: f32, color: Color) -> Text<'static> {
    text(glyph)
        .size(size)
        .style(move |_theme| iced::widget::text::Style { color: Some(color) })
}
