// SPDX-License-Identifier: MPL-2.0
//! Home screen: paper header, tag sidebar, and the filtered card grid.

use crate::content::{ChartId, Site};
use crate::gallery::{about, visible_cards, Category, TagSelection, CATEGORIES};
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, column, container, image, rule, scrollable, stack, text, Column, Container, Row,
};
use iced::{Border, Color, ContentFit, Element, Length, Theme};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleTag(&'static str),
    ClearTags,
    OpenChart(ChartId),
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub site: &'a Site,
    pub selection: &'a TagSelection,
    pub thumbnails: &'a HashMap<ChartId, image::Handle>,
    pub tag_icons: &'a HashMap<&'static str, image::Handle>,
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header())
        .push(section(
            "Abstract",
            text(about::ABSTRACT).size(typography::BODY).into(),
        ))
        .push(section("Resources", resources()))
        .push(text("Visualization Analogies").size(typography::TITLE_MD))
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(sidebar(ctx.selection, ctx.tag_icons))
                .push(cards(&ctx)),
        );

    scrollable(content).into()
}

fn header<'a>() -> Element<'a, Message> {
    column![
        text(about::TITLE).size(typography::TITLE_LG),
        text(about::authors_line()).size(typography::TITLE_SM),
        text(about::VENUE).size(typography::BODY_LG),
    ]
    .spacing(spacing::XS)
    .into()
}

fn resources<'a>() -> Element<'a, Message> {
    about::RESOURCES
        .iter()
        .fold(Column::new().spacing(spacing::XS), |list, resource| {
            list.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(text(format!("• {}:", resource.label)).size(typography::BODY))
                    .push(text(resource.url).size(typography::BODY)),
            )
        })
        .into()
}

fn section<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    column![text(title).size(typography::TITLE_SM), rule::horizontal(1), content]
        .spacing(spacing::SM)
        .into()
}

fn sidebar<'a>(
    selection: &'a TagSelection,
    icons: &'a HashMap<&'static str, image::Handle>,
) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::MD);

    for category in &CATEGORIES {
        list = list.push(category_block(category, selection, icons));
    }

    if !selection.is_empty() {
        list = list.push(
            button(text(format!("Clear filters ({})", selection.len())).size(typography::BODY))
                .style(button::text)
                .on_press(Message::ClearTags),
        );
    }

    Container::new(list)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .into()
}

fn category_block<'a>(
    category: &'static Category,
    selection: &'a TagSelection,
    icons: &'a HashMap<&'static str, image::Handle>,
) -> Element<'a, Message> {
    let buttons = category
        .tags
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, tag| {
            row.push(tag_button(
                *tag,
                selection.contains(tag),
                category.emphasized,
                icons.get(tag),
            ))
        })
        .wrap();

    column![text(category.title).size(typography::BODY_LG), buttons]
        .spacing(spacing::XS)
        .into()
}

fn tag_button<'a>(
    tag: &'static str,
    active: bool,
    emphasized: bool,
    icon: Option<&'a image::Handle>,
) -> Element<'a, Message> {
    let label = text(tag).size(typography::CAPTION).center();
    let content: Element<'a, Message> = match icon {
        Some(handle) => column![
            image(handle.clone())
                .width(Length::Fixed(sizing::TAG_ICON))
                .height(Length::Fixed(sizing::TAG_ICON)),
            label,
        ]
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .into(),
        None => label.into(),
    };

    button(content)
        .width(Length::Fixed(sizing::TAG_BUTTON_WIDTH))
        .padding(spacing::XXS)
        .style(move |theme: &Theme, status| {
            let mut style = if active {
                button::primary(theme, status)
            } else {
                button::secondary(theme, status)
            };
            if emphasized && !active {
                style.border = Border {
                    color: palette::ACCENT_500,
                    width: border::WIDTH_MD,
                    radius: radius::SM.into(),
                };
            }
            style
        })
        .on_press(Message::ToggleTag(tag))
        .into()
}

fn cards<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let site = ctx.site;
    let grid = visible_cards(site.listing(), ctx.selection)
        .into_iter()
        .fold(Row::new().spacing(spacing::MD), |row, id| {
            row.push(card(id, ctx.thumbnails.get(id), site.has_page(id)))
        })
        .wrap()
        .vertical_spacing(spacing::MD);

    Container::new(grid).width(Length::Fill).into()
}

fn card<'a>(
    id: &'a ChartId,
    thumbnail: Option<&'a image::Handle>,
    routable: bool,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text("…").size(typography::TITLE_MD))
            .center(Length::Fill)
            .into(),
    };

    let overlay = container(
        container(text(id.as_str()).size(typography::BODY_LG))
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(|_theme: &Theme| container::Style {
                background: Some(
                    Color {
                        a: opacity::CARD_OVERLAY,
                        ..palette::BLACK
                    }
                    .into(),
                ),
                text_color: Some(palette::WHITE),
                ..Default::default()
            }),
    )
    .height(Length::Fill)
    .align_y(Vertical::Bottom);

    let tile = container(stack![picture, overlay])
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .clip(true)
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::GRAY_100.into()),
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        });

    button(tile)
        .padding(0)
        .style(button::text)
        .on_press_maybe(routable.then(|| Message::OpenChart(id.clone())))
        .into()
}
