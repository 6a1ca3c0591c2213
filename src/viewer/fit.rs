// SPDX-License-Identifier: MPL-2.0
//! Fit-to-height computation.
//!
//! A viewer's container takes a fixed share of the window height minus the
//! room its heading and controls need. The fit scale makes the image's
//! natural height fill that container exactly.

pub use crate::config::{DEFAULT_REM_OFFSET, DEFAULT_ROOT_FONT_SIZE, DEFAULT_VIEWPORT_FRACTION};

/// Derives a container height from the window height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerLayout {
    pub viewport_fraction: f32,
    pub rem_offset: f32,
    pub root_font_size: f32,
}

impl Default for ContainerLayout {
    fn default() -> Self {
        Self {
            viewport_fraction: DEFAULT_VIEWPORT_FRACTION,
            rem_offset: DEFAULT_REM_OFFSET,
            root_font_size: DEFAULT_ROOT_FONT_SIZE,
        }
    }
}

impl ContainerLayout {
    /// `viewport_fraction * viewport_height - rem_offset * root_font_size`.
    ///
    /// May be zero or negative for very short windows; [`fit_scale`] rejects
    /// such heights.
    #[must_use]
    pub fn container_height(&self, viewport_height: f32) -> f32 {
        self.viewport_fraction * viewport_height - self.rem_offset * self.root_font_size
    }
}

/// Scale at which `natural_height` pixels fill `container_height` exactly.
///
/// Returns `None` for an empty image or a container without usable height.
#[must_use]
pub fn fit_scale(container_height: f32, natural_height: u32) -> Option<f32> {
    if natural_height == 0 || !container_height.is_finite() || container_height <= 0.0 {
        return None;
    }
    let scale = container_height / natural_height as f32;
    scale.is_finite().then_some(scale)
}
