// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::config::Config;
use crate::content::{ChartId, Site};
use crate::error::Error;
use crate::media::LoadedImage;
use crate::ui::{chart, gallery};
use iced::Size;

#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Chart(chart::Message),
    ThumbnailLoaded {
        id: ChartId,
        result: Result<LoadedImage, Error>,
    },
    TagIconLoaded {
        tag: &'static str,
        result: Result<LoadedImage, Error>,
    },
    WindowResized(Size),
}

/// Runtime flags passed from `main.rs` into the application.
#[derive(Debug)]
pub struct Flags {
    /// Pages generated before the window opens.
    pub site: Site,
    pub config: Config,
    /// Chart detail page to show first instead of the gallery.
    pub initial_chart: Option<ChartId>,
}
