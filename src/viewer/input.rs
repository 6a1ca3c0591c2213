// SPDX-License-Identifier: MPL-2.0
//! Toolkit-neutral pointer input.
//!
//! Host widgets translate their native mouse events into these calls; the
//! viewer core never sees a toolkit event type.

use super::transform::Offset;

/// Callbacks a host toolkit wires to its native pointer events.
///
/// Positions are in any coordinate space that stays fixed for the duration of
/// a gesture. Only differences between positions are used.
pub trait PointerInput {
    fn on_pointer_down(&mut self, position: Offset);
    fn on_pointer_move(&mut self, position: Offset);
    fn on_pointer_up(&mut self);
    /// `delta_y` in pixels, positive when the wheel moves towards the user.
    fn on_scroll(&mut self, delta_y: f32);
}

/// One discrete viewer input, as carried through application messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerInput {
    PointerDown(Offset),
    PointerMoved(Offset),
    PointerUp,
    Scrolled(f32),
    ZoomIn,
    ZoomOut,
    Reset,
}
