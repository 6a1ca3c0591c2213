// SPDX-License-Identifier: MPL-2.0
//! Pan/zoom viewer behavior driven through its public input surface.

use analogy_gallery::viewer::{
    Offset, PanZoomViewer, PointerInput, ViewerInput, ViewerTuning, MAX_SCALE, MIN_SCALE,
};
use approx::assert_abs_diff_eq;

const EPSILON: f32 = 1e-5;

fn fitted_viewer(container_height: f32, natural_height: u32) -> PanZoomViewer {
    let mut viewer = PanZoomViewer::new(ViewerTuning::default());
    viewer.set_container_height(container_height);
    let ticket = viewer.on_source_changed("https://example.org/Waterfall/WaterfallA.png");
    assert!(viewer.apply_loaded(&ticket, natural_height));
    viewer
}

#[test]
fn wheel_zoom_out_and_reset_scenario() {
    let mut viewer = fitted_viewer(300.0, 600);
    assert_abs_diff_eq!(viewer.fit_scale(), 0.5, epsilon = EPSILON);
    assert_abs_diff_eq!(viewer.scale(), 0.5, epsilon = EPSILON);

    viewer.on_scroll(-100.0);
    assert_abs_diff_eq!(viewer.scale(), 0.6, epsilon = EPSILON);

    for _ in 0..3 {
        viewer.zoom_out();
    }
    assert_abs_diff_eq!(viewer.scale(), 0.3, epsilon = EPSILON);

    viewer.reset();
    assert_abs_diff_eq!(viewer.scale(), 0.5, epsilon = EPSILON);
}

#[test]
fn drag_scenario_stops_on_release() {
    let mut viewer = PanZoomViewer::default();
    viewer.on_pointer_down(Offset::new(100.0, 100.0));
    viewer.on_pointer_move(Offset::new(140.0, 130.0));
    assert_eq!(viewer.translate(), Offset::new(40.0, 30.0));

    viewer.on_pointer_up();
    viewer.on_pointer_move(Offset::new(200.0, 200.0));
    assert_eq!(viewer.translate(), Offset::new(40.0, 30.0));
}

#[test]
fn wheel_never_drops_below_minimum() {
    let mut viewer = fitted_viewer(300.0, 600);
    for delta in [500.0, 10_000.0, 1e9, 250.0, f32::MAX] {
        viewer.on_scroll(delta);
        assert!(viewer.scale() >= MIN_SCALE);
    }
}

#[test]
fn button_zoom_stays_within_bounds() {
    let mut viewer = PanZoomViewer::default();
    let sequence = [true, true, false, true, false, false, false, false, false, false, false, false]
        .into_iter()
        .chain(std::iter::repeat(true).take(60))
        .chain(std::iter::repeat(false).take(80));

    for zoom_in in sequence {
        if zoom_in {
            viewer.handle(ViewerInput::ZoomIn);
        } else {
            viewer.handle(ViewerInput::ZoomOut);
        }
        assert!((MIN_SCALE..=MAX_SCALE).contains(&viewer.scale()));
    }
}

#[test]
fn reset_keeps_translation() {
    let mut viewer = fitted_viewer(300.0, 150);
    viewer.handle(ViewerInput::PointerDown(Offset::new(0.0, 0.0)));
    viewer.handle(ViewerInput::PointerMoved(Offset::new(-25.0, 12.5)));
    viewer.handle(ViewerInput::PointerUp);
    viewer.handle(ViewerInput::Scrolled(-400.0));

    viewer.handle(ViewerInput::Reset);
    assert_abs_diff_eq!(viewer.scale(), 2.0, epsilon = EPSILON);
    assert_eq!(viewer.translate(), Offset::new(-25.0, 12.5));
}

#[test]
fn pan_delta_is_applied_once() {
    let mut viewer = PanZoomViewer::default();
    viewer.on_pointer_down(Offset::new(10.0, 10.0));
    viewer.on_pointer_move(Offset::new(15.0, 20.0));
    viewer.on_pointer_move(Offset::new(15.0, 20.0));
    assert_eq!(viewer.translate(), Offset::new(5.0, 10.0));
}

#[test]
fn move_without_press_is_ignored() {
    let mut viewer = PanZoomViewer::default();
    viewer.on_pointer_move(Offset::new(80.0, 80.0));
    assert_eq!(viewer.translate(), Offset::ZERO);
    assert!(!viewer.is_dragging());
}

#[test]
fn superseded_load_does_not_refit() {
    let mut viewer = PanZoomViewer::default();
    viewer.set_container_height(300.0);
    let first = viewer.on_source_changed("first.png");
    let second = viewer.on_source_changed("second.png");

    assert!(!viewer.apply_loaded(&first, 100));
    assert!(viewer.apply_loaded(&second, 600));
    assert_abs_diff_eq!(viewer.scale(), 0.5, epsilon = EPSILON);
}

#[test]
fn reloading_same_image_reproduces_fit() {
    let mut viewer = fitted_viewer(340.8, 600);
    let first = viewer.fit_scale();
    let ticket = viewer.on_source_changed("https://example.org/Waterfall/WaterfallA.png");
    viewer.apply_loaded(&ticket, 600);
    assert_abs_diff_eq!(viewer.fit_scale(), first, epsilon = EPSILON);
    assert_abs_diff_eq!(first, 340.8 / 600.0, epsilon = EPSILON);
}
