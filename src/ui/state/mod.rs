// SPDX-License-Identifier: MPL-2.0
//! Reusable UI state helpers.

pub mod reveal;

pub use reveal::Reveal;
