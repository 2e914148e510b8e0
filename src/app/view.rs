// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::landing::{self, ViewContext as LandingViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications;
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub landing: &'a landing::State,
    pub theme_mode: ThemeMode,
    pub menu_open: bool,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Landing => view_landing(ctx.landing, ctx.i18n, ctx.menu_open),
        Screen::Settings => view_settings(ctx.i18n, ctx.theme_mode),
        Screen::About => view_about(ctx.i18n),
    };

    let toasts = notifications::Toast::view_overlay(ctx.notifications, ctx.i18n)
        .map(Message::Notification);

    Stack::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn view_landing<'a>(
    landing: &'a landing::State,
    i18n: &'a I18n,
    menu_open: bool,
) -> Element<'a, Message> {
    let navbar_view = navbar::view(NavbarViewContext { i18n, menu_open }).map(Message::Navbar);

    let landing_view = landing
        .view(LandingViewContext {
            i18n,
            now: Instant::now(),
        })
        .map(Message::Landing);

    Column::new()
        .push(navbar_view)
        .push(landing_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_settings(i18n: &I18n, theme_mode: ThemeMode) -> Element<'_, Message> {
    settings::view(SettingsViewContext { i18n, theme_mode }).map(Message::Settings)
}

fn view_about(i18n: &I18n) -> Element<'_, Message> {
    about::view(AboutViewContext { i18n }).map(Message::About)
}
