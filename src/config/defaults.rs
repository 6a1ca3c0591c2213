// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Viewer zoom bounds and step sizes
//! - **Layout**: Container height derivation from the window height
//! - **Content**: Content root and remote image store
//! - **Cache**: Decoded image cache capacity

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale a viewer starts with before its first fit computation completes.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Lowest scale any viewer operation may produce.
pub const MIN_SCALE: f32 = 0.1;

/// Highest scale reachable through the zoom-in control.
///
/// Wheel zoom is not bounded above.
pub const MAX_SCALE: f32 = 5.0;

/// Scale change applied by the zoom-in and zoom-out controls.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Smallest configurable zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.01;

/// Largest configurable zoom step.
pub const MAX_ZOOM_STEP: f32 = 1.0;

/// Scale change per wheel pixel (a 100px notch moves the scale by 0.1).
pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 0.001;

/// Smallest configurable wheel sensitivity.
pub const MIN_WHEEL_SENSITIVITY: f32 = 0.0001;

/// Largest configurable wheel sensitivity.
pub const MAX_WHEEL_SENSITIVITY: f32 = 0.01;

/// Pixels reported per wheel line, matching what browsers report for one notch.
pub const WHEEL_LINE_PIXELS: f32 = 100.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Share of the window height given to one image container.
pub const DEFAULT_VIEWPORT_FRACTION: f32 = 0.4;

/// Height taken by a container's heading and controls, in root font units.
pub const DEFAULT_REM_OFFSET: f32 = 3.7;

/// Root font size in logical pixels.
pub const DEFAULT_ROOT_FONT_SIZE: f32 = 16.0;

/// Smallest configurable root font size.
pub const MIN_ROOT_FONT_SIZE: f32 = 8.0;

/// Largest configurable root font size.
pub const MAX_ROOT_FONT_SIZE: f32 = 48.0;

/// Initial window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;

/// Initial window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: f32 = 800.0;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Directory holding `finalQuestionare/`, `data/` and `description/`.
pub const DEFAULT_CONTENT_ROOT: &str = "public";

/// Remote store the chart images are served from.
pub const DEFAULT_IMAGE_BASE: &str =
    "https://raw.githubusercontent.com/VisAnalogy/visualization-analogies/refs/heads/main/public";

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_CACHE_MAX_IMAGES: usize = 32;

/// Minimum image cache capacity.
pub const MIN_CACHE_MAX_IMAGES: usize = 4;

/// Maximum image cache capacity.
pub const MAX_CACHE_MAX_IMAGES: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MAX_SCALE > DEFAULT_SCALE);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);
    assert!(MIN_WHEEL_SENSITIVITY > 0.0);
    assert!(DEFAULT_WHEEL_SENSITIVITY >= MIN_WHEEL_SENSITIVITY);
    assert!(DEFAULT_WHEEL_SENSITIVITY <= MAX_WHEEL_SENSITIVITY);

    // Layout validation
    assert!(DEFAULT_VIEWPORT_FRACTION > 0.0);
    assert!(DEFAULT_VIEWPORT_FRACTION <= 1.0);
    assert!(DEFAULT_ROOT_FONT_SIZE >= MIN_ROOT_FONT_SIZE);
    assert!(DEFAULT_ROOT_FONT_SIZE <= MAX_ROOT_FONT_SIZE);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);

    // Cache validation
    assert!(MIN_CACHE_MAX_IMAGES > 0);
    assert!(MAX_CACHE_MAX_IMAGES >= MIN_CACHE_MAX_IMAGES);
    assert!(DEFAULT_CACHE_MAX_IMAGES >= MIN_CACHE_MAX_IMAGES);
    assert!(DEFAULT_CACHE_MAX_IMAGES <= MAX_CACHE_MAX_IMAGES);
};
