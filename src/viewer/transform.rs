// SPDX-License-Identifier: MPL-2.0
//! Scale and translation applied to a viewer's image.
//!
//! The transform is anchored at the image's top-left corner: a point `p` of
//! the unscaled image lands at `translate + scale * p` in container space.

pub use crate::config::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A 2D position or displacement in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Placement of the scaled image inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Uniform scale followed by a translation, origin at the image's top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Never below [`MIN_SCALE`].
    scale: f32,
    pub translate: Offset,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            translate: Offset::ZERO,
        }
    }
}

impl Transform {
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Sets the scale, raising it to [`MIN_SCALE`] if needed.
    ///
    /// Non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.scale = scale.max(MIN_SCALE);
        }
    }

    /// Wheel zoom: a negative delta (wheel away from the user) zooms in.
    ///
    /// Unbounded above.
    pub fn apply_wheel(&mut self, delta_y: f32, sensitivity: f32) {
        let amount = -delta_y * sensitivity;
        if amount.is_finite() {
            self.scale = (self.scale + amount).max(MIN_SCALE);
        }
    }

    /// Zooms in by `step`, never past [`MAX_SCALE`].
    pub fn zoom_in(&mut self, step: f32) {
        self.scale = (self.scale + step).min(MAX_SCALE).max(MIN_SCALE);
    }

    /// Zooms out by `step`, never below [`MIN_SCALE`].
    pub fn zoom_out(&mut self, step: f32) {
        self.scale = (self.scale - step).max(MIN_SCALE);
    }

    pub fn pan_by(&mut self, delta: Offset) {
        if delta.is_finite() {
            self.translate += delta;
        }
    }

    /// Maps a point of the unscaled image into container space.
    #[must_use]
    pub fn map_point(&self, point: Offset) -> Offset {
        Offset::new(
            self.translate.x + self.scale * point.x,
            self.translate.y + self.scale * point.y,
        )
    }

    /// Where an image of the given natural size is drawn.
    #[must_use]
    pub fn image_rect(&self, natural_width: u32, natural_height: u32) -> ImageRect {
        ImageRect {
            x: self.translate.x,
            y: self.translate.y,
            width: natural_width as f32 * self.scale,
            height: natural_height as f32 * self.scale,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}
