// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_folio::ui::styles::{button, container, overlay};
    use iced_folio::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::chip_selected(&theme, iced::widget::button::Status::Hovered);
        let _ = button::chip_unselected(&theme, iced::widget::button::Status::Active);
        let _ = button::link(&theme, iced::widget::button::Status::Active);
        let _ = button::ghost(&theme, iced::widget::button::Status::Hovered);
        let _ = button::menu_item(&theme, iced::widget::button::Status::Pressed);
        let _ = button::dismiss(&theme, iced::widget::button::Status::Active);
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Light;

        let _ = container::panel(&theme);
        let _ = container::card(&theme);
        let _ = container::badge(&theme);
        let _ = container::tag(&theme);
        let _ = container::cta_panel(&theme);
        let _ = container::navbar(&theme);
        let _ = container::dropdown(&theme);
        let _ = overlay::backdrop(&theme);
        let _ = overlay::modal(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::BRAND_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::ICON_LG;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }
}
