// SPDX-License-Identifier: MPL-2.0
//! User interface screens and components.
//!
//! Screens follow the Elm-style "state down, messages up" pattern:
//!
//! - [`gallery`] - Paper header, tag sidebar, and chart cards
//! - [`chart`] - Chart detail page with description, data, and two viewers
//! - [`zoomable`] - Canvas-backed pan/zoom image component
//! - [`design_tokens`] - Shared spacing, sizing, and colors

pub mod chart;
pub mod design_tokens;
pub mod gallery;
pub mod zoomable;
