// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] borrowing the pieces of `App` they
//! mutate, so each one can be read without the full application struct.

use super::{Message, Screen};
use crate::content::{ChartId, ImageSource, Site};
use crate::error::Error;
use crate::gallery::{TagSelection, CATEGORIES};
use crate::media::{fetch_image, ImageCache, LoadedImage};
use crate::ui::{chart, gallery};
use crate::viewer::{ContainerLayout, ViewerTuning};
use iced::widget::image;
use iced::{Size, Task};
use std::collections::HashMap;

/// Mutable view of the application state used by the handlers.
pub(super) struct UpdateContext<'a> {
    pub site: &'a Site,
    pub screen: &'a mut Screen,
    pub selection: &'a mut TagSelection,
    pub chart: &'a mut Option<chart::State>,
    pub images: &'a mut ImageCache,
    pub thumbnails: &'a mut HashMap<ChartId, image::Handle>,
    pub tag_icons: &'a mut HashMap<&'static str, image::Handle>,
    pub viewport_height: &'a mut f32,
    pub layout: ContainerLayout,
    pub tuning: ViewerTuning,
}

impl UpdateContext<'_> {
    fn container_height(&self) -> f32 {
        self.layout.container_height(*self.viewport_height)
    }
}

/// Fetches the analogy image of every listed chart for the card grid.
pub(super) fn thumbnail_tasks(site: &Site) -> Task<Message> {
    Task::batch(site.listing().iter().map(|id| {
        let id = id.clone();
        let source = site.images().analogy_image(&id);
        Task::perform(fetch_image(source), move |result| Message::ThumbnailLoaded { id, result })
    }))
}

/// Fetches the icon of every tag shown in the sidebar.
pub(super) fn tag_icon_tasks(images: &ImageSource) -> Task<Message> {
    Task::batch(CATEGORIES.iter().flat_map(|category| {
        category.tags.iter().map(move |tag| {
            let tag: &'static str = *tag;
            let source = images.tag_icon(category.folder, tag);
            Task::perform(fetch_image(source), move |result| Message::TagIconLoaded {
                tag,
                result,
            })
        })
    }))
}

/// Switches to the detail screen of `id` if a page was generated for it.
pub(super) fn open_chart(ctx: &mut UpdateContext<'_>, id: ChartId) -> Task<Message> {
    if !ctx.site.has_page(&id) {
        log::warn!("no page generated for chart {id}");
        return Task::none();
    }

    let container_height = ctx.container_height();
    let (state, task) = chart::State::open(
        id.clone(),
        ctx.site.images(),
        container_height,
        ctx.tuning,
        ctx.images,
    );
    log::info!("opening chart {id}");
    *ctx.chart = Some(state);
    *ctx.screen = Screen::Chart(id);
    task.map(Message::Chart)
}

pub(super) fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::ToggleTag(tag) => {
            let selected = ctx.selection.toggle(tag);
            log::debug!("tag {tag} selected: {selected}");
            Task::none()
        }
        gallery::Message::ClearTags => {
            ctx.selection.clear();
            Task::none()
        }
        gallery::Message::OpenChart(id) => open_chart(ctx, id),
    }
}

pub(super) fn handle_chart_message(
    ctx: &mut UpdateContext<'_>,
    message: chart::Message,
) -> Task<Message> {
    let Some(state) = ctx.chart.as_mut() else {
        return Task::none();
    };

    match state.update(message, ctx.images) {
        chart::Event::None => {}
        chart::Event::BackToGallery => {
            // Dropping the viewers aborts their pending loads.
            *ctx.chart = None;
            *ctx.screen = Screen::Gallery;
            log::debug!(
                "image cache: {} entries, hit rate {:.2}",
                ctx.images.len(),
                ctx.images.hit_rate()
            );
        }
    }
    Task::none()
}

pub(super) fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    id: ChartId,
    result: Result<LoadedImage, Error>,
) {
    match result {
        Ok(loaded) => {
            let source = ctx.site.images().analogy_image(&id);
            ctx.thumbnails.insert(id, loaded.handle.clone());
            ctx.images.insert(source, loaded);
        }
        Err(err) => log::warn!("thumbnail for {id} unavailable: {err}"),
    }
}

pub(super) fn handle_tag_icon_loaded(
    ctx: &mut UpdateContext<'_>,
    tag: &'static str,
    result: Result<LoadedImage, Error>,
) {
    match result {
        Ok(loaded) => {
            ctx.tag_icons.insert(tag, loaded.handle);
        }
        Err(err) => log::debug!("icon for tag {tag} unavailable: {err}"),
    }
}

pub(super) fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    *ctx.viewport_height = size.height;
    let container_height = ctx.container_height();
    if let Some(state) = ctx.chart.as_mut() {
        state.set_container_height(container_height);
    }
}
