// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications carry i18n message keys resolved at render time; the
//! [`Manager`] owns the queue and auto-dismiss timing, and [`Toast`] renders
//! the visible notifications as an overlay column.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
