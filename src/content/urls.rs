// SPDX-License-Identifier: MPL-2.0
//! Image locations for charts and tag icons.

use super::catalog::QUESTIONNAIRE_DIR;
use super::ChartId;
use crate::config::DEFAULT_IMAGE_BASE;
use crate::media;

/// Base location images are resolved against: an HTTP(S) URL or a local
/// directory holding the same layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    base: String,
}

impl Default for ImageSource {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE)
    }
}

impl ImageSource {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.len() > 1 && (base.ends_with('/') || base.ends_with('\\')) {
            base.pop();
        }
        Self { base }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        media::is_remote(&self.base)
    }

    /// `<base>/finalQuestionare/<id>/<id>A.png`
    #[must_use]
    pub fn analogy_image(&self, id: &ChartId) -> String {
        self.chart_image(id, 'A')
    }

    /// `<base>/finalQuestionare/<id>/<id>C.png`
    #[must_use]
    pub fn actual_chart_image(&self, id: &ChartId) -> String {
        self.chart_image(id, 'C')
    }

    /// `<base>/<folder>/<tag>.png`
    #[must_use]
    pub fn tag_icon(&self, folder: &str, tag: &str) -> String {
        format!("{}/{folder}/{tag}.png", self.base)
    }

    fn chart_image(&self, id: &ChartId, variant: char) -> String {
        format!("{}/{QUESTIONNAIRE_DIR}/{id}/{id}{variant}.png", self.base)
    }
}
