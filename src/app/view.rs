// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::content::{ChartId, Site};
use crate::gallery::TagSelection;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{chart, gallery};
use iced::widget::{container, image, text};
use iced::{Element, Length};
use std::collections::HashMap;

/// Contextual data needed to render the application view.
pub struct ViewContext<'a> {
    pub site: &'a Site,
    pub screen: &'a Screen,
    pub selection: &'a TagSelection,
    pub thumbnails: &'a HashMap<ChartId, image::Handle>,
    pub tag_icons: &'a HashMap<&'static str, image::Handle>,
    pub chart: Option<&'a chart::State>,
    pub container_height: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.screen {
        Screen::Gallery => gallery::view(gallery::ViewContext {
            site: ctx.site,
            selection: ctx.selection,
            thumbnails: ctx.thumbnails,
            tag_icons: ctx.tag_icons,
        })
        .map(Message::Gallery),
        Screen::Chart(id) => match (ctx.chart, ctx.site.route(id)) {
            (Some(state), Some(page)) if state.id() == id => state
                .view(page, ctx.container_height)
                .map(Message::Chart),
            _ => container(text(format!("Chart {id} is unavailable")).size(typography::BODY))
                .padding(spacing::LG)
                .width(Length::Fill)
                .into(),
        },
    }
}
