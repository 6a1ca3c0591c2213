// SPDX-License-Identifier: MPL-2.0
//! Pan/zoom state for a single image.
//!
//! [`PanZoomViewer`] owns the transform of one image, turns pointer and wheel
//! input into transform updates, and recomputes a fit-to-height scale whenever
//! the image source or the container height changes. It has no knowledge of
//! any UI toolkit; see `ui::zoomable` for the iced adapter.

pub mod drag;
pub mod fit;
pub mod input;
pub mod load;
pub mod transform;

pub use drag::DragState;
pub use fit::{fit_scale, ContainerLayout};
pub use input::{PointerInput, ViewerInput};
pub use load::{LoadTicket, LoadTracker};
pub use transform::{ImageRect, Offset, Transform, DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};

use crate::config::{DEFAULT_WHEEL_SENSITIVITY, DEFAULT_ZOOM_STEP};

/// Input sensitivities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerTuning {
    /// Scale change per wheel pixel.
    pub wheel_sensitivity: f32,
    /// Scale change per zoom button press.
    pub zoom_step: f32,
}

impl Default for ViewerTuning {
    fn default() -> Self {
        Self {
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

/// Transform state of one viewer plus the inputs its fit scale derives from.
#[derive(Debug, Default)]
pub struct PanZoomViewer {
    transform: Transform,
    fit_scale: Option<f32>,
    natural_height: Option<u32>,
    container_height: Option<f32>,
    drag: DragState,
    loads: LoadTracker,
    tuning: ViewerTuning,
}

impl PanZoomViewer {
    #[must_use]
    pub fn new(tuning: ViewerTuning) -> Self {
        Self {
            tuning,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.transform.scale()
    }

    #[must_use]
    pub fn translate(&self) -> Offset {
        self.transform.translate
    }

    /// Last computed fit scale, or [`DEFAULT_SCALE`] before any image loaded.
    #[must_use]
    pub fn fit_scale(&self) -> f32 {
        self.fit_scale.unwrap_or(DEFAULT_SCALE)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn tuning(&self) -> ViewerTuning {
        self.tuning
    }

    #[must_use]
    pub fn current_source(&self) -> Option<&str> {
        self.loads.current_source()
    }

    #[must_use]
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.loads.is_current(ticket)
    }

    /// Switches to a new image source.
    ///
    /// Any outstanding load becomes stale. The current scale and translation
    /// stay in effect until the new image reports its natural height.
    pub fn on_source_changed(&mut self, source: &str) -> LoadTicket {
        self.natural_height = None;
        let ticket = self.loads.issue(source);
        log::debug!("viewer source changed: {ticket}");
        ticket
    }

    /// Applies a completed load. Returns `false` if the ticket is stale.
    pub fn apply_loaded(&mut self, ticket: &LoadTicket, natural_height: u32) -> bool {
        if !self.loads.is_current(ticket) {
            log::debug!("discarding stale image load {ticket}");
            return false;
        }
        self.natural_height = Some(natural_height);
        self.refit();
        true
    }

    /// A failed load leaves the viewer as it was.
    pub fn apply_load_failed(&mut self, ticket: &LoadTicket, reason: &str) {
        if self.loads.is_current(ticket) {
            log::warn!("failed to load image {}: {reason}", ticket.source());
        }
    }

    /// Updates the available height and refits once the image is known.
    pub fn set_container_height(&mut self, height: f32) {
        self.container_height = Some(height);
        self.refit();
    }

    fn refit(&mut self) {
        let (Some(container), Some(natural)) = (self.container_height, self.natural_height) else {
            return;
        };
        match fit_scale(container, natural) {
            Some(fit) => {
                self.fit_scale = Some(fit);
                self.transform.set_scale(fit);
            }
            None => log::debug!(
                "no usable fit for container height {container} and image height {natural}"
            ),
        }
    }

    pub fn zoom_in(&mut self) {
        self.transform.zoom_in(self.tuning.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.transform.zoom_out(self.tuning.zoom_step);
    }

    /// Restores the fit scale. Translation is kept.
    pub fn reset(&mut self) {
        self.transform.set_scale(self.fit_scale());
    }

    pub fn handle(&mut self, input: ViewerInput) {
        match input {
            ViewerInput::PointerDown(position) => self.on_pointer_down(position),
            ViewerInput::PointerMoved(position) => self.on_pointer_move(position),
            ViewerInput::PointerUp => self.on_pointer_up(),
            ViewerInput::Scrolled(delta_y) => self.on_scroll(delta_y),
            ViewerInput::ZoomIn => self.zoom_in(),
            ViewerInput::ZoomOut => self.zoom_out(),
            ViewerInput::Reset => self.reset(),
        }
    }
}

impl PointerInput for PanZoomViewer {
    fn on_pointer_down(&mut self, position: Offset) {
        if position.is_finite() {
            self.drag.start(position);
        }
    }

    fn on_pointer_move(&mut self, position: Offset) {
        if let Some(delta) = self.drag.advance(position) {
            self.transform.pan_by(delta);
        }
    }

    fn on_pointer_up(&mut self) {
        self.drag.stop();
    }

    fn on_scroll(&mut self, delta_y: f32) {
        self.transform
            .apply_wheel(delta_y, self.tuning.wheel_sensitivity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, SCALE_EPSILON};

    fn loaded_viewer(container: f32, natural: u32) -> PanZoomViewer {
        let mut viewer = PanZoomViewer::default();
        viewer.set_container_height(container);
        let ticket = viewer.on_source_changed("chart.png");
        assert!(viewer.apply_loaded(&ticket, natural));
        viewer
    }

    #[test]
    fn new_viewer_starts_at_unit_scale() {
        let viewer = PanZoomViewer::default();
        assert_abs_diff_eq!(viewer.scale(), 1.0);
        assert_abs_diff_eq!(viewer.fit_scale(), 1.0);
        assert_eq!(viewer.translate(), Offset::ZERO);
        assert!(!viewer.is_dragging());
    }

    #[test]
    fn load_sets_scale_to_fit() {
        let viewer = loaded_viewer(300.0, 600);
        assert_abs_diff_eq!(viewer.fit_scale(), 0.5);
        assert_abs_diff_eq!(viewer.scale(), 0.5);
    }

    #[test]
    fn wheel_zoom_out_then_reset_scenario() {
        let mut viewer = loaded_viewer(300.0, 600);

        viewer.on_scroll(-100.0);
        assert_abs_diff_eq!(viewer.scale(), 0.6, epsilon = SCALE_EPSILON);

        viewer.zoom_out();
        viewer.zoom_out();
        viewer.zoom_out();
        assert_abs_diff_eq!(viewer.scale(), 0.3, epsilon = SCALE_EPSILON);

        viewer.reset();
        assert_abs_diff_eq!(viewer.scale(), 0.5, epsilon = SCALE_EPSILON);
    }

    #[test]
    fn drag_scenario() {
        let mut viewer = PanZoomViewer::default();

        viewer.on_pointer_down(Offset::new(100.0, 100.0));
        viewer.on_pointer_move(Offset::new(140.0, 130.0));
        assert_eq!(viewer.translate(), Offset::new(40.0, 30.0));

        viewer.on_pointer_up();
        viewer.on_pointer_move(Offset::new(200.0, 200.0));
        assert_eq!(viewer.translate(), Offset::new(40.0, 30.0));
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut viewer = PanZoomViewer::default();
        viewer.on_pointer_move(Offset::new(50.0, 50.0));
        viewer.on_pointer_up();
        assert_eq!(viewer.translate(), Offset::ZERO);
    }

    #[test]
    fn reset_keeps_translation() {
        let mut viewer = loaded_viewer(300.0, 600);
        viewer.handle(ViewerInput::PointerDown(Offset::new(0.0, 0.0)));
        viewer.handle(ViewerInput::PointerMoved(Offset::new(-15.0, 25.0)));
        viewer.handle(ViewerInput::PointerUp);
        viewer.handle(ViewerInput::ZoomIn);

        viewer.handle(ViewerInput::Reset);
        assert_abs_diff_eq!(viewer.scale(), 0.5);
        assert_eq!(viewer.translate(), Offset::new(-15.0, 25.0));
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut viewer = PanZoomViewer::default();
        viewer.set_container_height(300.0);

        let first = viewer.on_source_changed("a.png");
        let second = viewer.on_source_changed("b.png");

        assert!(!viewer.apply_loaded(&first, 100));
        assert_abs_diff_eq!(viewer.scale(), 1.0);

        assert!(viewer.apply_loaded(&second, 1200));
        assert_abs_diff_eq!(viewer.scale(), 0.25);
    }

    #[test]
    fn source_change_keeps_scale_until_loaded() {
        let mut viewer = loaded_viewer(300.0, 600);
        viewer.on_scroll(-200.0);
        let before = viewer.scale();

        let ticket = viewer.on_source_changed("next.png");
        assert_abs_diff_eq!(viewer.scale(), before);

        viewer.apply_load_failed(&ticket, "404");
        assert_abs_diff_eq!(viewer.scale(), before);
    }

    #[test]
    fn resize_refits_known_image() {
        let mut viewer = loaded_viewer(300.0, 600);
        viewer.zoom_in();

        viewer.set_container_height(450.0);
        assert_abs_diff_eq!(viewer.fit_scale(), 0.75);
        assert_abs_diff_eq!(viewer.scale(), 0.75);
    }

    #[test]
    fn unusable_container_keeps_previous_fit() {
        let mut viewer = loaded_viewer(300.0, 600);
        viewer.set_container_height(-20.0);
        assert_abs_diff_eq!(viewer.fit_scale(), 0.5);
        assert_abs_diff_eq!(viewer.scale(), 0.5);
    }

    #[test]
    fn refit_is_idempotent() {
        let mut viewer = loaded_viewer(300.0, 600);
        let ticket = viewer.on_source_changed("chart.png");
        assert!(viewer.apply_loaded(&ticket, 600));
        assert_abs_diff_eq!(viewer.fit_scale(), 0.5);
    }

    #[test]
    fn tiny_fit_is_floored_when_applied() {
        let viewer = loaded_viewer(10.0, 1000);
        assert_abs_diff_eq!(viewer.fit_scale(), 0.01);
        assert_abs_diff_eq!(viewer.scale(), MIN_SCALE);
    }

    #[test]
    fn zoom_buttons_stay_in_range() {
        let mut viewer = PanZoomViewer::default();
        for _ in 0..100 {
            viewer.handle(ViewerInput::ZoomIn);
        }
        assert_abs_diff_eq!(viewer.scale(), MAX_SCALE);
        for _ in 0..100 {
            viewer.handle(ViewerInput::ZoomOut);
        }
        assert_abs_diff_eq!(viewer.scale(), MIN_SCALE);
    }

    #[test]
    fn custom_tuning_is_used() {
        let mut viewer = PanZoomViewer::new(ViewerTuning {
            wheel_sensitivity: 0.002,
            zoom_step: 0.25,
        });
        viewer.on_scroll(-100.0);
        assert_abs_diff_eq!(viewer.scale(), 1.2, epsilon = SCALE_EPSILON);
        viewer.zoom_in();
        assert_abs_diff_eq!(viewer.scale(), 1.45, epsilon = SCALE_EPSILON);
    }
}
