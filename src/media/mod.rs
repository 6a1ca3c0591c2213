// SPDX-License-Identifier: MPL-2.0
//! Image retrieval for cards and chart viewers.

pub mod cache;
pub mod fetch;

pub use cache::ImageCache;
pub use fetch::{decode, fetch_image, is_remote};

use iced::widget::image;

/// A fetched image ready for display, with its intrinsic size.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}
