// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for different parts
//! of the application. Handlers receive an [`UpdateContext`] with mutable
//! references to the app state they are allowed to touch.

use super::{Message, Screen};
use crate::config::{self, Config, GeneralConfig};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::landing::{self, Event as LandingEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications;
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub landing: &'a mut landing::State,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles messages from the landing page.
pub fn handle_landing_message(
    ctx: &mut UpdateContext<'_>,
    message: landing::Message,
) -> Task<Message> {
    match ctx.landing.update(message, Instant::now()) {
        LandingEvent::None => Task::none(),
        LandingEvent::OpenUrl(url) => open_url(url),
    }
}

/// Handles screen switches from top-level messages.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    *ctx.menu_open = false;
    Task::none()
}

/// Handles messages from the navigation bar.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => {}
        NavbarEvent::OpenSettings => *ctx.screen = Screen::Settings,
        NavbarEvent::OpenAbout => *ctx.screen = Screen::About,
    }
    Task::none()
}

/// Handles messages from the settings screen.
///
/// Language and theme choices apply immediately and are persisted; a failed
/// save degrades to a warning toast.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(message) {
        SettingsEvent::Back => *ctx.screen = Screen::Landing,
        SettingsEvent::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale);
            persist_preferences(ctx);
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            persist_preferences(ctx);
        }
    }
    Task::none()
}

/// Handles messages from the about screen.
pub fn handle_about_message(
    ctx: &mut UpdateContext<'_>,
    message: &about::Message,
) -> Task<Message> {
    match about::update(message) {
        AboutEvent::Back => {
            *ctx.screen = Screen::Landing;
            Task::none()
        }
        AboutEvent::OpenUrl(url) => open_url(url.to_owned()),
    }
}

/// Opens an external URL in the system browser.
///
/// The spawn happens off the update loop; failures come back as
/// [`Message::LinkOpened`] and surface as an error toast.
pub fn open_url(url: String) -> Task<Message> {
    Task::perform(
        async move { open::that(&url).map_err(|e| Error::Browser(e.to_string())) },
        Message::LinkOpened,
    )
}

/// Writes the current preferences to the config file.
fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    let config = Config {
        general: GeneralConfig {
            language: Some(ctx.i18n.current_locale().to_string()),
            theme_mode: *ctx.theme_mode,
        },
    };
    if config::save(&config).is_err() {
        ctx.notifications.push(notifications::Notification::warning(
            "notification-config-save-warning",
        ));
    }
}
