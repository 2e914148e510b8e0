// SPDX-License-Identifier: MPL-2.0
//! About screen module displaying application information and licenses.
//!
//! This module shows application details, license notices, credits for
//! dependencies, and links to the project repository.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, scrollable, text, Column, Container, Row, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Repository URL.
const REPOSITORY_URL: &str = "https://codeberg.org/folio/iced_folio";

/// Issues URL.
const ISSUES_URL: &str = "https://codeberg.org/folio/iced_folio/issues";

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
    OpenRepository,
    OpenIssues,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Back,
    OpenUrl(&'static str),
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackPressed => Event::Back,
        Message::OpenRepository => Event::OpenUrl(REPOSITORY_URL),
        Message::OpenIssues => Event::OpenUrl(ISSUES_URL),
    }
}

/// Render the about screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!(
            "{} {}",
            icons::CHEVRON_LEFT,
            ctx.i18n.tr("about-back-button")
        ))
        .size(typography::BODY),
    )
    .on_press(Message::BackPressed);

    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let app_section = build_app_section(&ctx);
    let license_section = build_license_section(&ctx);
    let credits_section = build_credits_section(&ctx);
    let links_section = build_links_section(&ctx);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(app_section)
        .push(license_section)
        .push(credits_section)
        .push(links_section);

    scrollable(content).into()
}

/// Build the application info section.
fn build_app_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let app_name = Text::new(ctx.i18n.tr("about-app-name")).size(typography::TITLE_MD);
    let version = Text::new(format!("v{APP_VERSION}")).size(typography::BODY);
    let description = Text::new(ctx.i18n.tr("about-app-description")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(app_name)
                .push(version),
        )
        .push(description);

    build_section(
        icons::INFO,
        ctx.i18n.tr("about-section-app"),
        content.into(),
    )
}

/// Build the license section.
fn build_license_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let license_name = Text::new(ctx.i18n.tr("about-license-name")).size(typography::BODY_LG);
    let license_summary = Text::new(ctx.i18n.tr("about-license-summary")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(license_name)
        .push(license_summary);

    build_section(
        icons::BRACKETS,
        ctx.i18n.tr("about-section-license"),
        content.into(),
    )
}

/// Build the credits section.
fn build_credits_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(build_credit_item(&ctx.i18n.tr("about-credits-iced")))
        .push(build_credit_item(&ctx.i18n.tr("about-credits-fluent")));

    build_section(
        icons::COG,
        ctx.i18n.tr("about-section-credits"),
        content.into(),
    )
}

/// Build a single credit item.
fn build_credit_item<'a>(description: &str) -> Element<'a, Message> {
    Text::new(format!("• {description}"))
        .size(typography::BODY)
        .into()
}

/// Build the links section.
fn build_links_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(build_link_item(
            ctx.i18n.tr("about-link-repository"),
            REPOSITORY_URL,
            Message::OpenRepository,
        ))
        .push(build_link_item(
            ctx.i18n.tr("about-link-issues"),
            ISSUES_URL,
            Message::OpenIssues,
        ));

    build_section(
        icons::ARROW_UP_RIGHT,
        ctx.i18n.tr("about-section-links"),
        content.into(),
    )
}

/// Build a link item with label and a clickable URL.
fn build_link_item<'a>(label: String, url: &'a str, message: Message) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(format!("{label}:")).size(typography::BODY))
        .push(
            button(Text::new(url).size(typography::BODY))
                .on_press(message)
                .padding(0.0)
                .style(styles::button::link),
        )
        .into()
}

/// Build a section with icon, title, and content (same pattern as settings).
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n };
        let _element = view(ctx);
    }

    #[test]
    fn back_emits_back_event() {
        let event = update(&Message::BackPressed);
        assert!(matches!(event, Event::Back));
    }

    #[test]
    fn link_messages_emit_urls() {
        match update(&Message::OpenRepository) {
            Event::OpenUrl(url) => assert!(url.contains("iced_folio")),
            Event::Back => panic!("expected OpenUrl"),
        }
    }

    #[test]
    fn app_version_is_valid() {
        assert!(!APP_VERSION.is_empty());
    }
}
