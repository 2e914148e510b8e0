// SPDX-License-Identifier: MPL-2.0
//! Projects gallery: category filter chips, the project card grid, and the
//! state backing the detail overlay.
//!
//! The gallery owns the page's only non-trivial transient state: the
//! single-select [`CategoryFilter`] and the selected-project pointer. Both
//! reset with the component; the catalog itself is never mutated. The visible
//! subset is recomputed from the filter on every render with a single linear
//! pass over the catalog.

use crate::catalog::projects::{self, Category, CategoryFilter, ProjectId, ProjectRecord};
use crate::catalog::Accent;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
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

/// Number of cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Transient gallery state.
///
/// `selected` only ever holds an id present in the catalog: selection of an
/// unknown id is ignored, so the overlay can never open on a dangling
/// reference.
#[derive(Debug)]
pub struct State {
    filter: CategoryFilter,
    selected: Option<ProjectId>,
    grid_reveal: Reveal,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(CategoryFilter),
    ShowDetails(ProjectId),
    CloseDetails,
    VisitProject(ProjectId),
    ViewSource(ProjectId),
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open an external URL in the system browser.
    OpenUrl(String),
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub now: Instant,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter: CategoryFilter::default(),
            selected: None,
            grid_reveal: Reveal::new(),
        }
    }

    /// The currently active filter.
    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// The record backing the open detail overlay, if any.
    ///
    /// Resolved through the catalog on every call so the overlay is
    /// conditioned solely on this being `Some`.
    #[must_use]
    pub fn selected_record(&self) -> Option<&'static ProjectRecord> {
        self.selected.and_then(projects::find)
    }

    /// Records matched by the active filter, in catalog order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&'static ProjectRecord> {
        projects::visible(self.filter)
    }

    /// Starts the grid entrance animation when the section first scrolls
    /// into view. Subsequent calls are ignored.
    pub fn reveal_section(&mut self, now: Instant) {
        self.grid_reveal.trigger(now);
    }

    /// Returns `true` while grid cards are still animating in.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.grid_reveal
            .is_animating(self.visible_records().len(), now)
    }

    /// Applies a gallery message.
    ///
    /// Filter changes recompute the visible subset (derived state) and replay
    /// the grid entrance, the rendition of the source material's exit/enter
    /// card transition. Re-selecting the active filter is a no-op.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::FilterSelected(filter) => {
                if filter != self.filter {
                    self.filter = filter;
                    self.grid_reveal.restart(now);
                }
                Event::None
            }
            Message::ShowDetails(id) => {
                if projects::find(id).is_some() {
                    self.selected = Some(id);
                }
                Event::None
            }
            Message::CloseDetails => {
                self.selected = None;
                Event::None
            }
            Message::VisitProject(id) => match projects::find(id).and_then(|r| r.link) {
                Some(url) => Event::OpenUrl(url.to_owned()),
                None => Event::None,
            },
            Message::ViewSource(id) => {
                match projects::find(id).and_then(|r| r.source_link) {
                    Some(url) => Event::OpenUrl(url.to_owned()),
                    None => Event::None,
                }
            }
        }
    }

    /// Render the gallery section (header, filter chips, card grid).
    ///
    /// The detail overlay is rendered separately by the landing page so it
    /// can be stacked above the whole scrollable area.
    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = build_header(ctx.i18n);
        let chips = self.build_chips(ctx.i18n);
        let grid = self.build_grid(&ctx);

        Column::new()
            .spacing(spacing::XL)
            .width(Length::Fill)
            .push(header)
            .push(chips)
            .push(grid)
            .into()
    }

    fn build_chips<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::SM);
        for filter in CategoryFilter::ALL {
            let label = Text::new(i18n.tr(filter.label_key())).size(typography::BODY);
            let mut chip = button(label)
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::FilterSelected(filter));
            chip = if filter == self.filter {
                chip.style(styles::button::chip_selected)
            } else {
                chip.style(styles::button::chip_unselected)
            };
            row = row.push(chip);
        }

        Container::new(row)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }

    fn build_grid<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let visible = self.visible_records();

        let mut grid = Column::new().spacing(spacing::LG).width(Length::Fill);
        for (row_index, chunk) in visible.chunks(GRID_COLUMNS).enumerate() {
            let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
            for (column_index, record) in chunk.iter().copied().enumerate() {
                let index = row_index * GRID_COLUMNS + column_index;
                let progress = self.grid_reveal.item_progress(index, ctx.now);
                row = row.push(entering(build_card(ctx.i18n, record), progress));
            }
            // Pad the last row so cards keep their column width.
            for _ in chunk.len()..GRID_COLUMNS {
                row = row.push(Space::new().width(Length::FillPortion(1)));
            }
            grid = grid.push(row);
        }

        grid.into()
    }
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

/// Accent used for a category's image placeholder tint.
#[must_use]
pub fn category_accent(category: Category) -> Accent {
    match category {
        Category::Web => Accent::Blue,
        Category::Mobile => Accent::Green,
        Category::Ecommerce => Accent::Pink,
        Category::Saas => Accent::Purple,
    }
}

fn build_header(i18n: &I18n) -> Element<'_, Message> {
    let badge = Container::new(
        Text::new(i18n.tr("projects-badge")).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::MD])
    .style(styles::container::badge);

    let heading = Text::new(i18n.tr("projects-heading")).size(typography::TITLE_XL);

    let intro = Text::new(i18n.tr("projects-intro"))
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

fn build_card<'a>(i18n: &'a I18n, record: &'a ProjectRecord) -> Element<'a, Message> {
    let tint = theming::accent_tint(category_accent(record.category));

    // The record's image path is a placeholder; cards render a tinted tile
    // with the details affordance instead of loading an asset.
    let image_area = Container::new(
        button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(Text::new(i18n.tr("project-view-details")).size(typography::BODY))
                .push(icons::sized(icons::EXPAND, sizing::ICON_SM)),
        )
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::chip_unselected)
        .on_press(Message::ShowDetails(record.id)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::image_placeholder(tint));

    let mut tags = Row::new().spacing(spacing::XS);
    for tag in record.tags {
        tags = tags.push(
            Container::new(Text::new(*tag).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::tag),
        );
    }

    let title = Text::new(record.title).size(typography::TITLE_MD);
    let description = Text::new(record.description)
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    let case_study = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("project-view-case-study")).size(typography::BODY))
            .push(icons::sized(icons::CHEVRON_RIGHT, sizing::ICON_SM)),
    )
    .padding(0.0)
    .style(styles::button::link)
    .on_press(Message::ShowDetails(record.id));

    // Link affordances are suppressed for records without the matching URL.
    let mut link_icons = Row::new().spacing(spacing::XS);
    if record.source_link.is_some() {
        link_icons = link_icons.push(
            button(icons::sized(icons::BRACKETS, sizing::ICON_SM))
                .padding(spacing::XXS)
                .style(styles::button::ghost)
                .on_press(Message::ViewSource(record.id)),
        );
    }
    if record.link.is_some() {
        link_icons = link_icons.push(
            button(icons::sized(icons::ARROW_UP_RIGHT, sizing::ICON_SM))
                .padding(spacing::XXS)
                .style(styles::button::ghost)
                .on_press(Message::VisitProject(record.id)),
        );
    }

    let footer = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(case_study)
        .push(Space::new().width(Length::Fill))
        .push(link_icons);

    let info = Column::new()
        .spacing(spacing::SM)
        .push(tags)
        .push(title)
        .push(description)
        .push(footer);

    let body = Column::new()
        .spacing(spacing::MD)
        .push(image_area)
        .push(Container::new(info).padding([0.0, spacing::MD]));

    Container::new(body)
        .padding(spacing::XXS)
        .style(styles::container::card)
        .into()
}
