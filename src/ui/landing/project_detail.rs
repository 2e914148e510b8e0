// SPDX-License-Identifier: MPL-2.0
//! Detail overlay content for a selected project record.
//!
//! Rendering is conditioned entirely on the gallery's selection being set;
//! this module only builds the panel for a record the caller already
//! resolved.

use super::gallery::{self, Message};
use crate::catalog::projects::ProjectRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, scrollable, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Render the detail panel for `record`.
#[must_use]
pub fn view<'a>(i18n: &'a I18n, record: &'a ProjectRecord) -> Element<'a, Message> {
    let header = build_header(i18n, record);
    let columns = Row::new()
        .spacing(spacing::XL)
        .push(build_overview_column(i18n, record))
        .push(build_facts_column(i18n, record));

    let content = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(columns);

    Container::new(scrollable(content))
        .width(Length::Fixed(sizing::DETAIL_WIDTH))
        .max_height(sizing::DETAIL_MAX_HEIGHT)
        .padding(spacing::LG)
        .style(styles::overlay::modal)
        .into()
}

fn build_header<'a>(i18n: &'a I18n, record: &'a ProjectRecord) -> Element<'a, Message> {
    let title = Text::new(record.title).size(typography::TITLE_MD);
    let subtitle = Text::new(format!(
        "{} • {} {}",
        record.client,
        i18n.tr("project-detail-completed"),
        record.completed
    ))
    .size(typography::BODY)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.weak.text),
    });

    let close_button = button(icons::sized(icons::CROSS, sizing::ICON_SM))
        .padding(spacing::XXS)
        .style(styles::button::dismiss)
        .on_press(Message::CloseDetails);

    let title_row = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Top)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(title)
                .push(subtitle),
        )
        .push(Space::new().width(Length::Fill))
        .push(close_button);

    title_row.into()
}

fn build_overview_column<'a>(
    i18n: &'a I18n,
    record: &'a ProjectRecord,
) -> Element<'a, Message> {
    let tint = theming::accent_tint(gallery::category_accent(record.category));
    let image_area = Container::new(Space::new().width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .style(styles::container::image_placeholder(tint));

    let about_heading =
        Text::new(i18n.tr("project-detail-about")).size(typography::TITLE_SM);
    let description = Text::new(record.description)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    // A record without a URL renders no corresponding button.
    let mut links = Row::new().spacing(spacing::SM);
    if record.link.is_some() {
        links = links.push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(Text::new(i18n.tr("project-visit-button")).size(typography::BODY))
                    .push(icons::sized(icons::ARROW_UP_RIGHT, sizing::ICON_SM)),
            )
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .on_press(Message::VisitProject(record.id)),
        );
    }
    if record.source_link.is_some() {
        links = links.push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(Text::new(i18n.tr("project-source-button")).size(typography::BODY))
                    .push(icons::sized(icons::BRACKETS, sizing::ICON_SM)),
            )
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::chip_unselected)
            .on_press(Message::ViewSource(record.id)),
        );
    }

    Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::MD)
        .push(image_area)
        .push(about_heading)
        .push(description)
        .push(links)
        .into()
}

fn build_facts_column<'a>(
    i18n: &'a I18n,
    record: &'a ProjectRecord,
) -> Element<'a, Message> {
    let features_heading =
        Text::new(i18n.tr("project-detail-features")).size(typography::TITLE_SM);
    let mut features = Column::new().spacing(spacing::XS);
    for feature in record.features {
        features = features.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::tinted(
                    icons::CHEVRON_RIGHT,
                    sizing::ICON_SM,
                    palette::BRAND_500,
                ))
                .push(Text::new(*feature).size(typography::BODY)),
        );
    }

    let technologies_heading =
        Text::new(i18n.tr("project-detail-technologies")).size(typography::TITLE_SM);
    let mut technologies = Row::new().spacing(spacing::XS);
    for technology in record.technologies {
        technologies = technologies.push(
            Container::new(Text::new(*technology).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::tag),
        );
    }

    let client_heading =
        Text::new(i18n.tr("project-detail-client")).size(typography::TITLE_SM);
    let client = Text::new(record.client)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::MD)
        .align_x(Horizontal::Left)
        .push(features_heading)
        .push(features)
        .push(technologies_heading)
        .push(technologies)
        .push(rule::horizontal(1))
        .push(client_heading)
        .push(client)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::projects;

    #[test]
    fn detail_view_renders_for_every_record() {
        let i18n = I18n::default();
        for record in projects::catalog() {
            let _ = view(&i18n, record);
        }
    }

    #[test]
    fn detail_view_renders_without_links() {
        let i18n = I18n::default();
        let record = ProjectRecord {
            link: None,
            source_link: None,
            ..*projects::find(1).unwrap()
        };
        let _ = view(&i18n, &record);
    }
}
