// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and chart
//! detail screens.
//!
//! The `App` struct owns the generated site, the tag selection, and the image
//! cache shared by card thumbnails and chart viewers. Messages are routed to
//! the handlers in `update`, which translate them into screen changes and
//! image fetches.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::content::{ChartId, Site};
use crate::gallery::TagSelection;
use crate::media::ImageCache;
use crate::ui::chart;
use crate::viewer::{ContainerLayout, ViewerTuning};
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;

const APP_TITLE: &str = "Visualization Analogies";

/// Root Iced application state.
pub struct App {
    site: Site,
    screen: Screen,
    selection: TagSelection,
    layout: ContainerLayout,
    tuning: ViewerTuning,
    /// Last known window height in logical pixels.
    viewport_height: f32,
    images: ImageCache,
    thumbnails: HashMap<ChartId, image::Handle>,
    tag_icons: HashMap<&'static str, image::Handle>,
    /// Present only while the chart screen is shown.
    chart: Option<chart::State>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("selected_tags", &self.selection.len())
            .field("images", &self.images)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once
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

impl App {
    /// Initializes state, starts thumbnail and tag icon fetches, and opens
    /// the initial chart if one was requested.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            site,
            config,
            initial_chart,
        } = flags;

        let mut app = App {
            site,
            screen: Screen::Gallery,
            selection: TagSelection::default(),
            layout: config.viewer.layout(),
            tuning: config.viewer.tuning(),
            viewport_height: WINDOW_DEFAULT_HEIGHT,
            images: ImageCache::new(config.cache.max_images_or_default()),
            thumbnails: HashMap::new(),
            tag_icons: HashMap::new(),
            chart: None,
        };

        let mut tasks = vec![
            update::thumbnail_tasks(&app.site),
            update::tag_icon_tasks(app.site.images()),
        ];
        if let Some(id) = initial_chart {
            tasks.push(update::open_chart(&mut app.context(), id));
        }

        (app, Task::batch(tasks))
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            site: &self.site,
            screen: &mut self.screen,
            selection: &mut self.selection,
            chart: &mut self.chart,
            images: &mut self.images,
            thumbnails: &mut self.thumbnails,
            tag_icons: &mut self.tag_icons,
            viewport_height: &mut self.viewport_height,
            layout: self.layout,
            tuning: self.tuning,
        }
    }

    fn title(&self) -> String {
        match &self.screen {
            Screen::Gallery => APP_TITLE.to_string(),
            Screen::Chart(id) => format!("{id} - {APP_TITLE}"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_resize_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::Gallery(message) => update::handle_gallery_message(&mut ctx, message),
            Message::Chart(message) => update::handle_chart_message(&mut ctx, message),
            Message::ThumbnailLoaded { id, result } => {
                update::handle_thumbnail_loaded(&mut ctx, id, result);
                Task::none()
            }
            Message::TagIconLoaded { tag, result } => {
                update::handle_tag_icon_loaded(&mut ctx, tag, result);
                Task::none()
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            site: &self.site,
            screen: &self.screen,
            selection: &self.selection,
            thumbnails: &self.thumbnails,
            tag_icons: &self.tag_icons,
            chart: self.chart.as_ref(),
            container_height: self.layout.container_height(self.viewport_height),
        })
    }
}
