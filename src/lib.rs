// SPDX-License-Identifier: MPL-2.0
//! `analogy_gallery` is a desktop gallery of visualization analogies built
//! with the Iced GUI framework.
//!
//! Chart pages are generated from a content directory at startup. The home
//! screen filters chart cards by tag, and each chart page shows the analogy
//! and the actual chart in independent pan/zoom viewers.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod media;
pub mod ui;
pub mod viewer;

pub use error::{Error, Result};

#[cfg(test)]
mod test_utils;
