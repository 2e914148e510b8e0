// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::about;
use crate::ui::landing;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Landing(landing::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    About(about::Message),
    SwitchScreen(Screen),
    Notification(notifications::Message),
    /// Result of opening an external link in the system browser.
    LinkOpened(Result<(), Error>),
    /// Periodic tick driving entrance animations and toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
