// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language selection and appearance.
//!
//! Choices apply immediately and are persisted by the application layer; the
//! screen itself holds no state of its own.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, scrollable, text, Column, Container, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Back,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
}

/// Process a settings message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::BackPressed => Event::Back,
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
    }
}

/// Render the settings screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!(
            "{} {}",
            icons::CHEVRON_LEFT,
            ctx.i18n.tr("settings-back-button")
        ))
        .size(typography::BODY),
    )
    .on_press(Message::BackPressed);

    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let language_section = build_language_section(&ctx);
    let appearance_section = build_appearance_section(&ctx);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(language_section)
        .push(appearance_section);

    scrollable(content).into()
}

/// Build the language selection section.
fn build_language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut buttons = Column::new().spacing(spacing::XS);

    for locale in &ctx.i18n.available_locales {
        let translated_name = ctx.i18n.tr(&format!("language-name-{locale}"));
        let label = if translated_name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            format!("{translated_name} ({locale})")
        };

        let is_current = ctx.i18n.current_locale() == locale;
        let mut item = button(Text::new(label).size(typography::BODY))
            .on_press(Message::LanguageSelected(locale.clone()))
            .padding([spacing::XS, spacing::MD]);
        item = if is_current {
            item.style(styles::button::chip_selected)
        } else {
            item.style(styles::button::chip_unselected)
        };

        buttons = buttons.push(item);
    }

    build_section(
        icons::INFO,
        ctx.i18n.tr("settings-section-language"),
        buttons.into(),
    )
}

/// Build the appearance (theme mode) section.
fn build_appearance_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let modes = [
        (ThemeMode::Light, "theme-mode-light"),
        (ThemeMode::Dark, "theme-mode-dark"),
        (ThemeMode::System, "theme-mode-system"),
    ];

    let mut row = Row::new().spacing(spacing::XS);
    for (mode, key) in modes {
        let mut item = button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .on_press(Message::ThemeModeSelected(mode))
            .padding([spacing::XS, spacing::MD]);
        item = if ctx.theme_mode == mode {
            item.style(styles::button::chip_selected)
        } else {
            item.style(styles::button::chip_unselected)
        };
        row = row.push(item);
    }

    build_section(
        icons::COG,
        ctx.i18n.tr("settings-section-appearance"),
        row.into(),
    )
}

/// Build a section with icon, title, and content (same pattern as the about
/// screen).
fn build_section<'a>(
    glyph: &'static str,
    title: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(glyph, sizing::ICON_MD))
        .push(Text::new(title).size(typography::TITLE_SM));

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
