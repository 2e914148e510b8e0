// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the detail modal backdrop and panel.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn backdrop_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Dimmed backdrop behind the detail overlay.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(backdrop_color())),
        ..Default::default()
    }
}

/// Elevated panel holding the detail overlay content.
pub fn modal(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        text_color: Some(extended.background.base.text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
