// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for settings and about sections.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card surface for projects, services, and process steps.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Accent-tinted card header (service cards, process cards).
pub fn accent_header(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tint)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Icon tile: small elevated square holding a glyph.
pub fn icon_tile(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Outlined pill badge above section headings.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: None,
        text_color: Some(palette::BRAND_500),
        border: Border {
            color: palette::BRAND_500,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Small tinted pill for project tags and technologies.
pub fn tag(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..palette::BRAND_500
        })),
        text_color: Some(palette::BRAND_600),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder tile standing in for a project image.
///
/// The record's `image` path is not resolved here; asset serving is an
/// external concern, so cards render a tinted surface instead.
pub fn image_placeholder(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tint)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark call-to-action panel at the end of the process section.
pub fn cta_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Top navigation bar surface.
pub fn navbar(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        ..Default::default()
    }
}

/// Dropdown surface under the navbar hamburger.
pub fn dropdown(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: extended.background.strong.color,
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_uses_brand_outline() {
        let style = badge(&Theme::Light);
        assert_eq!(style.border.color, palette::BRAND_500);
        assert!(style.background.is_none());
    }

    #[test]
    fn card_has_rounded_corners_and_shadow() {
        let style = card(&Theme::Dark);
        assert!(style.background.is_some());
        assert!(style.shadow.blur_radius > 0.0);
    }

    #[test]
    fn image_placeholder_uses_given_tint() {
        let tint = Color::from_rgba(0.2, 0.4, 0.6, 0.12);
        let style = image_placeholder(tint)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(tint)));
    }
}
