// SPDX-License-Identifier: MPL-2.0
//! Detail screen for one chart: description, read-only data, and the analogy
//! and actual chart images side by side with their own pan/zoom state.

use crate::content::{ChartId, ChartPage, ImageSource};
use crate::media::ImageCache;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::zoomable;
use crate::viewer::ViewerTuning;
use iced::alignment::Vertical;
use iced::widget::{button, column, container, row, scrollable, text, Column, Container};
use iced::{Border, Element, Font, Length, Task, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    Analogy(zoomable::Message),
    Actual(zoomable::Message),
    BackToGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToGallery,
}

#[derive(Debug)]
pub struct State {
    id: ChartId,
    analogy: zoomable::State,
    actual: zoomable::State,
}

impl State {
    pub fn open(
        id: ChartId,
        images: &ImageSource,
        container_height: f32,
        tuning: ViewerTuning,
        cache: &mut ImageCache,
    ) -> (Self, Task<Message>) {
        let (analogy, analogy_task) =
            zoomable::State::open(images.analogy_image(&id), container_height, tuning, cache);
        let (actual, actual_task) = zoomable::State::open(
            images.actual_chart_image(&id),
            container_height,
            tuning,
            cache,
        );

        let state = Self {
            id,
            analogy,
            actual,
        };
        let task = Task::batch([
            analogy_task.map(Message::Analogy),
            actual_task.map(Message::Actual),
        ]);
        (state, task)
    }

    #[must_use]
    pub fn id(&self) -> &ChartId {
        &self.id
    }

    #[must_use]
    pub fn analogy(&self) -> &zoomable::State {
        &self.analogy
    }

    #[must_use]
    pub fn actual(&self) -> &zoomable::State {
        &self.actual
    }

    /// Refits both viewers after the window height changed.
    pub fn set_container_height(&mut self, height: f32) {
        self.analogy.set_container_height(height);
        self.actual.set_container_height(height);
    }

    pub fn update(&mut self, message: Message, cache: &mut ImageCache) -> Event {
        match message {
            Message::Analogy(message) => self.analogy.update(message, cache),
            Message::Actual(message) => self.actual.update(message, cache),
            Message::BackToGallery => return Event::BackToGallery,
        }
        Event::None
    }

    pub fn view<'a>(&'a self, page: &'a ChartPage, container_height: f32) -> Element<'a, Message> {
        let back_button = button(text("← Gallery").size(typography::BODY))
            .style(button::secondary)
            .on_press(Message::BackToGallery);

        let header = row![back_button, text(self.id.as_str()).size(typography::TITLE_LG)]
            .spacing(spacing::MD)
            .align_y(Vertical::Center);

        let description = panel(
            "Analogy Description",
            scrollable(text(&page.description_text).size(typography::BODY)).height(Length::Fill),
        );

        let data = panel(
            "Chart Data (Read-Only)",
            scrollable(
                text(&page.data_pretty)
                    .font(Font::MONOSPACE)
                    .size(typography::CODE),
            )
            .height(Length::Fill),
        );

        let images = column![
            self.analogy
                .view("Visualization Analogy", container_height)
                .map(Message::Analogy),
            self.actual
                .view("Actual Chart", container_height)
                .map(Message::Actual),
        ]
        .spacing(spacing::MD)
        .width(Length::FillPortion(3));

        let text_panels = column![description, data]
            .spacing(spacing::MD)
            .width(Length::FillPortion(2))
            .height(Length::Fill);

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(header)
            .push(
                row![text_panels, images]
                    .spacing(spacing::MD)
                    .height(Length::Fill),
            )
            .into()
    }
}

fn panel<'a>(title: &'a str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let inner = column![text(title).size(typography::TITLE_SM), content.into()]
        .spacing(spacing::XS)
        .height(Length::Fill);

    Container::new(inner)
        .padding(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::decode;
    use crate::test_utils::{assert_abs_diff_eq, png_bytes};
    use crate::viewer::ViewerInput;

    fn seeded_cache(images: &ImageSource, id: &ChartId) -> ImageCache {
        let mut cache = ImageCache::new(8);
        let tall = decode(png_bytes(10, 600)).expect("test png should decode");
        let short = decode(png_bytes(10, 150)).expect("test png should decode");
        cache.insert(images.analogy_image(id), tall);
        cache.insert(images.actual_chart_image(id), short);
        cache
    }

    #[test]
    fn viewers_fit_independently() {
        let images = ImageSource::new("/content");
        let id = ChartId::new("Waterfall").expect("valid id");
        let mut cache = seeded_cache(&images, &id);

        let (state, _task) =
            State::open(id, &images, 300.0, ViewerTuning::default(), &mut cache);
        assert_abs_diff_eq!(state.analogy().viewer().scale(), 0.5);
        assert_abs_diff_eq!(state.actual().viewer().scale(), 2.0);
    }

    #[test]
    fn input_only_moves_its_own_viewer() {
        let images = ImageSource::new("/content");
        let id = ChartId::new("Sankey").expect("valid id");
        let mut cache = seeded_cache(&images, &id);
        let (mut state, _task) =
            State::open(id, &images, 300.0, ViewerTuning::default(), &mut cache);

        let event = state.update(
            Message::Actual(zoomable::Message::Input(ViewerInput::ZoomOut)),
            &mut cache,
        );
        assert_eq!(event, Event::None);
        assert_abs_diff_eq!(state.analogy().viewer().scale(), 0.5);
        assert_abs_diff_eq!(state.actual().viewer().scale(), 1.9, epsilon = 1e-5);
    }

    #[test]
    fn resize_refits_both_viewers() {
        let images = ImageSource::new("/content");
        let id = ChartId::new("Heatmap").expect("valid id");
        let mut cache = seeded_cache(&images, &id);
        let (mut state, _task) =
            State::open(id, &images, 300.0, ViewerTuning::default(), &mut cache);

        state.set_container_height(150.0);
        assert_abs_diff_eq!(state.analogy().viewer().scale(), 0.25);
        assert_abs_diff_eq!(state.actual().viewer().scale(), 1.0);
    }

    #[test]
    fn back_button_emits_event() {
        let images = ImageSource::new("/content");
        let id = ChartId::new("Treemap").expect("valid id");
        let mut cache = seeded_cache(&images, &id);
        let (mut state, _task) =
            State::open(id, &images, 300.0, ViewerTuning::default(), &mut cache);

        assert_eq!(
            state.update(Message::BackToGallery, &mut cache),
            Event::BackToGallery
        );
    }
}
