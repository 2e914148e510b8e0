// SPDX-License-Identifier: MPL-2.0
//! Services section: the four service offerings.
//!
//! Purely presentational. Each card carries a "learn more" affordance with no
//! destination wired; routing belongs to an outer shell.

use crate::catalog::services::{self, ServiceOffering};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::state::Reveal;
use crate::ui::styles;
use crate::ui::theming;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text, Column, Container, Row, Space, Text},
    Element, Length, Padding, Theme,
};
use std::time::Instant;

/// Contextual data needed to render the services section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub reveal: &'a Reveal,
    pub now: Instant,
}

/// Messages emitted by the services section.
#[derive(Debug, Clone)]
pub enum Message {
    /// "Learn more" pressed on the offering at this index.
    LearnMore(usize),
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    None,
}

/// Process a message from this section.
///
/// The "learn more" affordance has no destination of its own, so every
/// message resolves to no event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::LearnMore(_) => Event::None,
    }
}

/// Number of animated items: one per offering.
#[must_use]
pub fn item_count() -> usize {
    services::offerings().len()
}

/// Render the services section.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = build_header(ctx.i18n);

    let mut cards = Row::new().spacing(spacing::LG);
    for (index, offering) in services::offerings().iter().enumerate() {
        let progress = ctx.reveal.item_progress(index, ctx.now);
        cards = cards.push(entering(build_card(ctx.i18n, index, offering), progress));
    }

    Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(header)
        .push(cards)
        .into()
}

/// Wraps a card with its entrance transition.
fn entering(content: Element<'_, Message>, progress: f32) -> Element<'_, Message> {
    if progress <= f32::EPSILON {
        return Space::new().width(Length::FillPortion(1)).into();
    }
    let slide = (1.0 - progress) * spacing::MD;
    Container::new(content)
        .width(Length::FillPortion(1))
        .padding(Padding {
            top: slide,
            ..Padding::ZERO
        })
        .into()
}

fn build_header(i18n: &I18n) -> Element<'_, Message> {
    let badge = Container::new(
        Text::new(i18n.tr("services-badge")).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::MD])
    .style(styles::container::badge);

    let heading = Text::new(i18n.tr("services-heading")).size(typography::TITLE_XL);

    let intro = Text::new(i18n.tr("services-intro"))
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(heading)
        .push(intro)
        .into()
}

fn build_card<'a>(
    i18n: &'a I18n,
    index: usize,
    offering: &'a ServiceOffering,
) -> Element<'a, Message> {
    let icon_tile = Container::new(icons::tinted(
        icons::for_token(offering.icon),
        sizing::ICON_LG,
        palette::BRAND_500,
    ))
    .width(Length::Fixed(sizing::ICON_TILE))
    .height(Length::Fixed(sizing::ICON_TILE))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::icon_tile);

    let title = Text::new(offering.title).size(typography::TITLE_MD);
    let description = Text::new(offering.description)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    let header = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(icon_tile)
            .push(title)
            .push(description),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::accent_header(theming::accent_tint(
        offering.accent,
    )));

    let mut features = Column::new().spacing(spacing::SM);
    for feature in offering.features {
        features = features.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(icons::tinted(
                    icons::CHEVRON_RIGHT,
                    sizing::ICON_SM,
                    palette::BRAND_500,
                ))
                .push(Text::new(*feature).size(typography::BODY)),
        );
    }

    let learn_more = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("services-learn-more")).size(typography::BODY))
            .push(icons::sized(icons::CHEVRON_RIGHT, sizing::ICON_SM)),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::ghost)
    .on_press(Message::LearnMore(index));

    let body = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(Container::new(features).padding([0.0, spacing::MD]))
        .push(Container::new(learn_more).padding([spacing::XS, spacing::SM]));

    Container::new(body)
        .padding(spacing::XXS)
        .height(Length::Shrink)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learn_more_has_no_wired_destination() {
        assert!(matches!(update(&Message::LearnMore(0)), Event::None));
        assert!(matches!(update(&Message::LearnMore(3)), Event::None));
    }

    #[test]
    fn item_count_matches_catalog() {
        assert_eq!(item_count(), 4);
    }

    #[test]
    fn view_renders_before_and_after_reveal() {
        let i18n = I18n::default();
        let now = Instant::now();

        let untriggered = Reveal::new();
        let _ = view(ViewContext {
            i18n: &i18n,
            reveal: &untriggered,
            now,
        });

        let running = Reveal::started(now);
        let _ = view(ViewContext {
            i18n: &i18n,
            reveal: &running,
            now: now + std::time::Duration::from_secs(2),
        });
    }
}
