// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the landing page and the
//! chrome screens.
//!
//! The `App` struct wires together the domains (landing page, localization,
//! preferences) and translates messages into side effects like config
//! persistence or opening external links. This file intentionally keeps
//! policy decisions (window sizing, persistence format, localization
//! switching) close to the main update loop so it is easy to audit
//! user-facing behavior.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::landing;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    landing: landing::State,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("overlay_open", &self.landing.overlay_open())
            .finish()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Landing,
            landing: landing::State::new(Instant::now()),
            theme_mode: ThemeMode::System,
            menu_open: false,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and the
    /// launcher `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.screen {
            Screen::Landing => app_name,
            Screen::Settings => format!("{} - {}", self.i18n.tr("settings-title"), app_name),
            Screen::About => format!("{} - {}", self.i18n.tr("about-title"), app_name),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(
            self.screen,
            self.landing.overlay_open(),
        );
        let tick_sub = subscription::create_tick_subscription(
            self.landing.is_animating(Instant::now()),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            landing: &mut self.landing,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Landing(landing_message) => {
                update::handle_landing_message(&mut ctx, landing_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::About(about_message) => {
                update::handle_about_message(&mut ctx, &about_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::LinkOpened(result) => {
                if result.is_err() {
                    self.notifications.push(notifications::Notification::error(
                        "notification-open-link-error",
                    ));
                }
                Task::none()
            }
            Message::Tick(_instant) => {
                // Periodic tick: entrance animations only need the redraw;
                // the notification manager handles auto-dismiss.
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            landing: &self.landing,
            theme_mode: self.theme_mode,
            menu_open: self.menu_open,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::projects::CategoryFilter;
    use crate::ui::about;
    use crate::ui::landing::gallery;
    use crate::ui::navbar;
    use crate::ui::settings;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(config::CONFIG_DIR_ENV).ok();
        std::env::set_var(config::CONFIG_DIR_ENV, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(config::CONFIG_DIR_ENV, value);
        } else {
            std::env::remove_var(config::CONFIG_DIR_ENV);
        }
    }

    #[test]
    fn new_starts_on_landing_without_overlay() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Landing);
            assert!(!app.landing.overlay_open());
            assert_eq!(app.landing.gallery().filter(), CategoryFilter::All);
        });
    }

    #[test]
    fn filter_message_updates_gallery() {
        let mut app = App::default();
        let _ = app.update(Message::Landing(crate::ui::landing::Message::Gallery(
            gallery::Message::FilterSelected(CategoryFilter::Mobile),
        )));

        let ids: Vec<_> = app
            .landing
            .gallery()
            .visible_records()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 6]);
    }

    #[test]
    fn show_and_dismiss_details_round_trip() {
        let mut app = App::default();
        let _ = app.update(Message::Landing(crate::ui::landing::Message::Gallery(
            gallery::Message::ShowDetails(2),
        )));
        assert!(app.landing.overlay_open());
        assert_eq!(
            app.landing.gallery().selected_record().unwrap().title,
            "EcoShop"
        );

        let _ = app.update(Message::Landing(
            crate::ui::landing::Message::DismissOverlay,
        ));
        assert!(!app.landing.overlay_open());
    }

    #[test]
    fn selecting_unknown_project_leaves_overlay_closed() {
        let mut app = App::default();
        let _ = app.update(Message::Landing(crate::ui::landing::Message::Gallery(
            gallery::Message::ShowDetails(99),
        )));
        assert!(!app.landing.overlay_open());
    }

    #[test]
    fn navbar_menu_opens_settings_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);
        assert!(!app.menu_open);
    }

    #[test]
    fn switch_screen_closes_menu() {
        let mut app = App::default();
        app.menu_open = true;
        let _ = app.update(Message::SwitchScreen(Screen::About));
        assert_eq!(app.screen, Screen::About);
        assert!(!app.menu_open);
    }

    #[test]
    fn settings_back_returns_to_landing() {
        let mut app = App {
            screen: Screen::Settings,
            ..App::default()
        };
        let _ = app.update(Message::Settings(settings::Message::BackPressed));
        assert_eq!(app.screen, Screen::Landing);
    }

    #[test]
    fn about_back_returns_to_landing() {
        let mut app = App {
            screen: Screen::About,
            ..App::default()
        };
        let _ = app.update(Message::About(about::Message::BackPressed));
        assert_eq!(app.screen, Screen::Landing);
    }

    #[test]
    fn language_selected_updates_config_file() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();
            let target_locale: unic_langid::LanguageIdentifier = app
                .i18n
                .available_locales
                .iter()
                .find(|locale| locale.to_string() == "fr")
                .cloned()
                .expect("fr locale should be embedded");

            let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
                target_locale.clone(),
            )));

            assert_eq!(app.i18n.current_locale(), &target_locale);

            let config_path = config_root.join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("fr"));
        });
    }

    #[test]
    fn theme_mode_selected_applies_and_persists() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();
            let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
                ThemeMode::Dark,
            )));

            assert_eq!(app.theme_mode, ThemeMode::Dark);
            assert_eq!(app.theme(), Theme::Dark);

            let contents = fs::read_to_string(config_root.join("settings.toml"))
                .expect("config should be readable");
            assert!(contents.contains("dark"));
        });
    }

    #[test]
    fn link_open_failure_pushes_error_notification() {
        let mut app = App::default();
        let _ = app.update(Message::LinkOpened(Err(crate::error::Error::Browser(
            "no handler".into(),
        ))));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn link_open_success_is_silent() {
        let mut app = App::default();
        let _ = app.update(Message::LinkOpened(Ok(())));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn notification_dismiss_message_removes_toast() {
        let mut app = App::default();
        app.notifications
            .push(notifications::Notification::error("notification-open-link-error"));
        let id = app.notifications.visible().next().unwrap().id();

        let _ = app.update(Message::Notification(notifications::Message::Dismiss(id)));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn title_follows_active_screen() {
        let mut app = App::default();
        app.i18n.set_locale("en-US".parse().unwrap());
        assert_eq!(app.title(), "IcedFolio");

        app.screen = Screen::Settings;
        assert_eq!(app.title(), "Settings - IcedFolio");

        app.screen = Screen::About;
        assert_eq!(app.title(), "About - IcedFolio");
    }

    #[test]
    fn get_started_and_learn_more_are_inert() {
        let mut app = App::default();
        let _ = app.update(Message::Landing(crate::ui::landing::Message::Process(
            crate::ui::landing::process::Message::GetStarted,
        )));
        let _ = app.update(Message::Landing(crate::ui::landing::Message::Services(
            crate::ui::landing::services::Message::LearnMore(0),
        )));
        assert_eq!(app.screen, Screen::Landing);
        assert!(!app.notifications.has_notifications());
    }
}
