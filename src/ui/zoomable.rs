// SPDX-License-Identifier: MPL-2.0
//! Pannable, zoomable image inside a fixed-height container.
//!
//! The canvas draws the image with the viewer transform and reports mouse
//! input as [`ViewerInput`] values. Wheel and press events over the image are
//! captured so the surrounding page does not scroll.

use crate::config::WHEEL_LINE_PIXELS;
use crate::error::Error;
use crate::media::{self, ImageCache, LoadedImage};
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::viewer::{LoadTicket, Offset, PanZoomViewer, ViewerInput, ViewerTuning};
use iced::alignment::Horizontal;
use iced::widget::canvas::{self, Action, Canvas};
use iced::widget::{button, container, row, stack, text};
use iced::{mouse, task, Border, Element, Length, Point, Rectangle, Renderer, Size, Task, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    Input(ViewerInput),
    Loaded {
        ticket: LoadTicket,
        result: Result<LoadedImage, Error>,
    },
}

/// One image viewer and its in-flight load.
pub struct State {
    viewer: PanZoomViewer,
    image: Option<LoadedImage>,
    /// Aborts the pending fetch when replaced or dropped.
    load: Option<task::Handle>,
}

impl State {
    /// Creates a viewer for `source`, served from `cache` when possible.
    pub fn open(
        source: String,
        container_height: f32,
        tuning: ViewerTuning,
        cache: &mut ImageCache,
    ) -> (Self, Task<Message>) {
        let mut viewer = PanZoomViewer::new(tuning);
        viewer.set_container_height(container_height);

        let mut state = Self {
            viewer,
            image: None,
            load: None,
        };
        let task = state.set_source(source, cache);
        (state, task)
    }

    /// Switches to another image. The previous fetch, if any, is aborted.
    pub fn set_source(&mut self, source: String, cache: &mut ImageCache) -> Task<Message> {
        let ticket = self.viewer.on_source_changed(&source);
        self.load = None;
        self.image = None;

        if let Some(image) = cache.get(&source) {
            self.viewer.apply_loaded(&ticket, image.height);
            self.image = Some(image);
            return Task::none();
        }

        let (task, handle) = Task::perform(media::fetch_image(source), move |result| {
            Message::Loaded { ticket, result }
        })
        .abortable();
        self.load = Some(handle.abort_on_drop());
        task
    }

    pub fn set_container_height(&mut self, height: f32) {
        self.viewer.set_container_height(height);
    }

    #[must_use]
    pub fn viewer(&self) -> &PanZoomViewer {
        &self.viewer
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load.is_some()
    }

    pub fn update(&mut self, message: Message, cache: &mut ImageCache) {
        match message {
            Message::Input(input) => self.viewer.handle(input),
            Message::Loaded { ticket, result } => {
                if self.viewer.is_current(&ticket) {
                    self.load = None;
                }
                match result {
                    Ok(image) => {
                        cache.insert(ticket.source().to_string(), image.clone());
                        if self.viewer.apply_loaded(&ticket, image.height) {
                            self.image = Some(image);
                        }
                    }
                    Err(e) => self.viewer.apply_load_failed(&ticket, &e.to_string()),
                }
            }
        }
    }

    pub fn view<'a>(&'a self, title: &'a str, container_height: f32) -> Element<'a, Message> {
        let surface = Canvas::new(Surface {
            viewer: &self.viewer,
            image: self.image.as_ref(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let placeholder: Element<'a, Message> = if self.image.is_none() && self.is_loading() {
            container(text("Loading…").size(typography::CAPTION))
                .center(Length::Fill)
                .into()
        } else {
            container(text("")).into()
        };

        let controls = row![
            control_button("⟲", ViewerInput::Reset),
            control_button("+", ViewerInput::ZoomIn),
            control_button("−", ViewerInput::ZoomOut),
        ]
        .spacing(spacing::XXS);

        let frame = container(stack![
            surface,
            placeholder,
            container(controls)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(spacing::XS),
        ])
        .width(Length::Fill)
        .height(Length::Fixed(container_height.max(sizing::MIN_VIEWER_HEIGHT)))
        .clip(true)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        });

        iced::widget::column![text(title).size(typography::TITLE_SM), frame]
            .spacing(spacing::XS)
            .into()
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("source", &self.viewer.current_source())
            .field("scale", &self.viewer.scale())
            .field("has_image", &self.image.is_some())
            .field("loading", &self.load.is_some())
            .finish()
    }
}

fn control_button(label: &str, input: ViewerInput) -> Element<'_, Message> {
    button(text(label).size(typography::BODY_LG).center())
        .width(Length::Fixed(sizing::ZOOM_BUTTON))
        .height(Length::Fixed(sizing::ZOOM_BUTTON))
        .padding(0)
        .style(button::secondary)
        .on_press(Message::Input(input))
        .into()
}

/// Converts a wheel delta to pixels, positive when scrolling towards the user.
#[must_use]
pub fn wheel_delta_y(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_PIXELS,
        mouse::ScrollDelta::Pixels { y, .. } => -y,
    }
}

fn offset(point: Point) -> Offset {
    Offset::new(point.x, point.y)
}

/// Maps a native mouse event to viewer input.
///
/// Presses and wheel turns count only over `bounds`. Moves and the release
/// are followed anywhere while a drag is active, so a drag ends even when the
/// button comes up outside the image.
fn pointer_input(
    dragging: bool,
    event: &iced::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> Option<ViewerInput> {
    let iced::Event::Mouse(event) = event else {
        return None;
    };

    match event {
        mouse::Event::ButtonPressed(mouse::Button::Left) => {
            Some(ViewerInput::PointerDown(offset(cursor.position_over(bounds)?)))
        }
        mouse::Event::CursorMoved { position } if dragging => {
            Some(ViewerInput::PointerMoved(offset(*position)))
        }
        mouse::Event::ButtonReleased(mouse::Button::Left) if dragging => {
            Some(ViewerInput::PointerUp)
        }
        mouse::Event::WheelScrolled { delta } => {
            cursor.position_over(bounds)?;
            Some(ViewerInput::Scrolled(wheel_delta_y(*delta)))
        }
        _ => None,
    }
}

/// Canvas program drawing one image with its transform.
struct Surface<'a> {
    viewer: &'a PanZoomViewer,
    image: Option<&'a LoadedImage>,
}

impl canvas::Program<Message> for Surface<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let input = pointer_input(self.viewer.is_dragging(), event, bounds, cursor)?;
        Some(Action::publish(Message::Input(input)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if let Some(image) = self.image {
            let rect = self
                .viewer
                .transform()
                .image_rect(image.width, image.height);
            frame.draw_image(
                Rectangle::new(Point::new(rect.x, rect.y), Size::new(rect.width, rect.height)),
                &image.handle,
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.viewer.is_dragging() {
            mouse::Interaction::Grabbing
        } else if self.image.is_some() && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
