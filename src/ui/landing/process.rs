// SPDX-License-Identifier: MPL-2.0
//! Process section: the four development steps and the call-to-action panel.
//!
//! Purely presentational; the step catalog is a compile-time constant and the
//! only interaction is the call-to-action button, an affordance whose
//! destination (booking/navigation) is wired by an outer shell, not here.

use crate::catalog::process::{self, ProcessStep};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::state::Reveal;
use crate::ui::styles;
use crate::ui::theming;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text, Column, Container, Row, Space, Text},
    Color, Element, Length, Padding, Theme,
};
use std::time::Instant;

/// Contextual data needed to render the process section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub reveal: &'a Reveal,
    pub now: Instant,
}

/// Messages emitted by the process section.
#[derive(Debug, Clone)]
pub enum Message {
    GetStarted,
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    None,
}

/// Process a message from this section.
///
/// The call-to-action has no destination of its own, so every message
/// resolves to no event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::GetStarted => Event::None,
    }
}

/// Number of animated items: one per step plus the call-to-action panel.
#[must_use]
pub fn item_count() -> usize {
    process::steps().len() + 1
}

/// Render the process section.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = build_header(ctx.i18n);

    let mut cards = Row::new().spacing(spacing::LG);
    for (index, step) in process::steps().iter().enumerate() {
        let progress = ctx.reveal.item_progress(index, ctx.now);
        cards = cards.push(entering(build_card(ctx.i18n, step), progress));
    }

    let cta_progress = ctx
        .reveal
        .item_progress(process::steps().len(), ctx.now);
    let cta = entering(build_cta(ctx.i18n), cta_progress);

    Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(header)
        .push(cards)
        .push(cta)
        .into()
}

/// Wraps an item with its entrance transition: hidden until it starts, then
/// sliding up as its progress approaches 1.
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
        Text::new(i18n.tr("process-badge")).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::MD])
    .style(styles::container::badge);

    let heading = Text::new(i18n.tr("process-heading")).size(typography::TITLE_XL);

    let intro = Text::new(i18n.tr("process-intro"))
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

fn build_card<'a>(i18n: &'a I18n, step: &'a ProcessStep) -> Element<'a, Message> {
    let icon_tile = Container::new(icons::tinted(
        icons::for_token(step.icon),
        sizing::ICON_MD,
        palette::BRAND_500,
    ))
    .width(Length::Fixed(sizing::ICON_TILE))
    .height(Length::Fixed(sizing::ICON_TILE))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::icon_tile);

    let ordinal = Text::new(format!("{:02}", step.number))
        .size(typography::ORDINAL)
        .style(move |_theme: &Theme| text::Style {
            color: Some(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BRAND_500
            }),
        });

    let top_row = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Top)
        .push(icon_tile)
        .push(Space::new().width(Length::Fill))
        .push(ordinal);

    let title = Text::new(step.title).size(typography::TITLE_MD);
    let summary = Text::new(step.summary).size(typography::BODY);
    let details = Text::new(step.details)
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    let mut tasks = Column::new().spacing(spacing::XS).push(
        Text::new(i18n.tr("process-activities-label")).size(typography::BODY_SM),
    );
    for task in step.tasks {
        tasks = tasks.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::tinted(
                    icons::CHEVRON_RIGHT,
                    sizing::ICON_SM,
                    palette::BRAND_500,
                ))
                .push(Text::new(*task).size(typography::BODY_SM)),
        );
    }

    let tasks_panel = Container::new(tasks)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::accent_header(theming::accent_tint(
            step.accent,
        )));

    let body = Column::new()
        .spacing(spacing::SM)
        .push(top_row)
        .push(title)
        .push(summary)
        .push(details)
        .push(tasks_panel);

    Container::new(body)
        .padding(spacing::MD)
        .height(Length::Shrink)
        .style(styles::container::card)
        .into()
}

fn build_cta(i18n: &I18n) -> Element<'_, Message> {
    let heading = Text::new(i18n.tr("process-cta-heading")).size(typography::TITLE_MD);
    let body = Text::new(i18n.tr("process-cta-body")).size(typography::BODY);

    let cta_button = button(
        Text::new(i18n.tr("process-cta-button")).size(typography::BODY_LG),
    )
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::primary)
    .on_press(Message::GetStarted);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(body)
        .push(cta_button);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .style(styles::container::cta_panel)
        .into()
}
