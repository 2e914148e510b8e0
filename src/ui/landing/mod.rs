// SPDX-License-Identifier: MPL-2.0
//! Landing page: section composition, scroll-triggered entrance animations,
//! and the project detail overlay.
//!
//! The page stacks three independent sections (process, projects gallery,
//! services) in one scrollable column. Sections reveal themselves once when
//! scrolled into view; the gallery additionally owns the filter/selection
//! state driving the detail overlay, which is stacked above the whole page.

pub mod gallery;
pub mod process;
pub mod project_detail;
pub mod services;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::state::Reveal;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{mouse_area, scrollable, Column, Container, Stack},
    Element, Length,
};
use std::time::Instant;

/// Relative scroll offset at which the projects section reveals.
const PROJECTS_REVEAL_AT: f32 = 0.2;

/// Relative scroll offset at which the services section reveals.
const SERVICES_REVEAL_AT: f32 = 0.6;

/// Landing page state: the gallery plus per-section reveal bookkeeping.
#[derive(Debug)]
pub struct State {
    gallery: gallery::State,
    process_reveal: Reveal,
    services_reveal: Reveal,
}

/// Messages emitted by the landing page.
#[derive(Debug, Clone)]
pub enum Message {
    /// The page was scrolled to this relative offset (0.0 top, 1.0 bottom).
    Scrolled(f32),
    /// Escape or backdrop click asked to dismiss the detail overlay.
    DismissOverlay,
    Process(process::Message),
    Gallery(gallery::Message),
    Services(services::Message),
}

/// Events propagated to the application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open an external URL in the system browser.
    OpenUrl(String),
}

/// Contextual data needed to render the landing page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub now: Instant,
}

impl State {
    /// Creates the landing state with the top section already revealing,
    /// since it is visible without scrolling.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            gallery: gallery::State::new(),
            process_reveal: Reveal::started(now),
            services_reveal: Reveal::new(),
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    /// Returns `true` if the detail overlay is open.
    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.gallery.selected_record().is_some()
    }

    /// Returns `true` while any section entrance animation is running.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.process_reveal.is_animating(process::item_count(), now)
            || self
                .services_reveal
                .is_animating(services::item_count(), now)
            || self.gallery.is_animating(now)
    }

    /// Applies a landing page message.
    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Scrolled(relative_y) => {
                // Trigger-once reveals; scrolling back up never replays them.
                if relative_y >= PROJECTS_REVEAL_AT {
                    self.gallery.reveal_section(now);
                }
                if relative_y >= SERVICES_REVEAL_AT {
                    self.services_reveal.trigger(now);
                }
                Event::None
            }
            Message::DismissOverlay => {
                let _ = self
                    .gallery
                    .handle_message(gallery::Message::CloseDetails, now);
                Event::None
            }
            Message::Process(message) => match process::update(&message) {
                process::Event::None => Event::None,
            },
            Message::Services(message) => match services::update(&message) {
                services::Event::None => Event::None,
            },
            Message::Gallery(message) => {
                match self.gallery.handle_message(message, now) {
                    gallery::Event::None => Event::None,
                    gallery::Event::OpenUrl(url) => Event::OpenUrl(url),
                }
            }
        }
    }

    /// Render the landing page, stacking the detail overlay above the
    /// scrollable sections when a project is selected.
    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let process_section = process::view(process::ViewContext {
            i18n: ctx.i18n,
            reveal: &self.process_reveal,
            now: ctx.now,
        })
        .map(Message::Process);

        let gallery_section = self
            .gallery
            .view(gallery::ViewContext {
                i18n: ctx.i18n,
                now: ctx.now,
            })
            .map(Message::Gallery);

        let services_section = services::view(services::ViewContext {
            i18n: ctx.i18n,
            reveal: &self.services_reveal,
            now: ctx.now,
        })
        .map(Message::Services);

        let sections = Column::new()
            .spacing(spacing::XXL)
            .padding(spacing::XL)
            .max_width(sizing::CONTENT_WIDTH)
            .push(process_section)
            .push(gallery_section)
            .push(services_section);

        let page = scrollable(
            Container::new(sections)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_scroll(|viewport| Message::Scrolled(viewport.relative_offset().y))
        .width(Length::Fill)
        .height(Length::Fill);

        let mut stack = Stack::new().push(page);

        if let Some(record) = self.gallery.selected_record() {
            // Dimmed backdrop; clicking it dismisses the overlay.
            let backdrop = mouse_area(
                Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::overlay::backdrop),
            )
            .on_press(Message::DismissOverlay);
            stack = stack.push(backdrop);

            let detail = project_detail::view(ctx.i18n, record).map(Message::Gallery);
            stack = stack.push(
                Container::new(detail)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            );
        }

        stack.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::projects::CategoryFilter;
    use std::time::Duration;

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn new_state_reveals_only_the_top_section() {
        let t = now();
        let state = State::new(t);
        assert!(state.is_animating(t));
        assert!(!state.overlay_open());
        assert_eq!(state.gallery().filter(), CategoryFilter::All);
    }

    #[test]
    fn scrolling_past_thresholds_triggers_sections() {
        let t = now();
        let mut state = State::new(t);
        let settled = t + Duration::from_secs(10);
        assert!(!state.is_animating(settled));

        let _ = state.update(Message::Scrolled(0.3), settled);
        assert!(state.is_animating(settled));

        let later = settled + Duration::from_secs(10);
        let _ = state.update(Message::Scrolled(0.7), later);
        assert!(state.is_animating(later));
    }

    #[test]
    fn scrolling_back_does_not_replay_reveals() {
        let t = now();
        let mut state = State::new(t);
        let _ = state.update(Message::Scrolled(0.9), t);
        let settled = t + Duration::from_secs(10);

        // Scrolling to the top and back down must not restart anything.
        let _ = state.update(Message::Scrolled(0.0), settled);
        let _ = state.update(Message::Scrolled(0.9), settled);
        assert!(!state.is_animating(settled));
    }

    #[test]
    fn dismiss_overlay_closes_selection() {
        let t = now();
        let mut state = State::new(t);
        let _ = state.update(Message::Gallery(gallery::Message::ShowDetails(2)), t);
        assert!(state.overlay_open());

        let _ = state.update(Message::DismissOverlay, t);
        assert!(!state.overlay_open());
    }

    #[test]
    fn dismiss_overlay_is_harmless_when_closed() {
        let t = now();
        let mut state = State::new(t);
        let _ = state.update(Message::DismissOverlay, t);
        assert!(!state.overlay_open());
    }

    #[test]
    fn gallery_url_events_bubble_up() {
        let t = now();
        let mut state = State::new(t);
        match state.update(Message::Gallery(gallery::Message::VisitProject(1)), t) {
            Event::OpenUrl(url) => assert!(url.starts_with("https://")),
            Event::None => panic!("expected OpenUrl event"),
        }
    }

    #[test]
    fn unwired_affordances_resolve_to_no_event() {
        let t = now();
        let mut state = State::new(t);
        assert!(matches!(
            state.update(Message::Process(process::Message::GetStarted), t),
            Event::None
        ));
        assert!(matches!(
            state.update(Message::Services(services::Message::LearnMore(1)), t),
            Event::None
        ));
    }

    #[test]
    fn view_renders_with_and_without_overlay() {
        let t = now();
        let mut state = State::new(t);
        let i18n = I18n::default();

        let _ = state.view(ViewContext { i18n: &i18n, now: t });

        let _ = state.update(Message::Gallery(gallery::Message::ShowDetails(4)), t);
        let _ = state.view(ViewContext { i18n: &i18n, now: t });
    }
}
