// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks one pointer-down to pointer-up gesture and turns pointer moves into
//! incremental pan deltas.

use super::transform::Offset;

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position at the previous drag event
    pub last_position: Option<Offset>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Offset) {
        self.is_dragging = true;
        self.last_position = Some(position);
    }

    /// Stops the drag operation. Safe to call when no drag is active.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.last_position = None;
    }

    /// Returns the movement since the previous drag event and remembers
    /// `position` as the new reference point.
    ///
    /// Returns `None` when no drag is active.
    pub fn advance(&mut self, position: Offset) -> Option<Offset> {
        if !self.is_dragging {
            return None;
        }

        let last = self.last_position?;
        self.last_position = Some(position);
        Some(position - last)
    }
}
