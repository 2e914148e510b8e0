// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the brand title and hamburger menu that appear at the
//! top of the landing screen. The menu provides access to the Settings and
//! About screens.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenSettings,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenSettings,
    OpenAbout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenSettings => {
            *menu_open = false;
            Event::OpenSettings
        }
        Message::OpenAbout => {
            *menu_open = false;
            Event::OpenAbout
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the top bar with the hamburger menu button and brand title.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(icons::sized(icons::HAMBURGER, sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    let brand = Text::new(ctx.i18n.tr("navbar-brand")).size(typography::TITLE_MD);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(brand);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::navbar)
        .into()
}

/// Build the dropdown menu with Settings and About options.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let settings_item = build_menu_item(
        icons::COG,
        ctx.i18n.tr("menu-settings"),
        Message::OpenSettings,
    );

    let about_item = build_menu_item(icons::INFO, ctx.i18n.tr("menu-about"), Message::OpenAbout);

    let menu_column = Column::new()
        .spacing(spacing::XXS)
        .push(settings_item)
        .push(about_item);

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(styles::container::dropdown)
        .into()
}

/// Build a single menu item with icon and label.
fn build_menu_item<'a>(
    glyph: &'static str,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(glyph, sizing::ICON_SM))
        .push(Text::new(label));

    button(row)
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::menu_item)
        .into()
}
