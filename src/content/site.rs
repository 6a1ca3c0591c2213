// SPDX-License-Identifier: MPL-2.0
//! Page generation over a content directory.
//!
//! All pages are built once, up front. A chart id is routable only if it had
//! a data file at generation time.

use super::catalog::{scan_chart_ids, scan_data_ids};
use super::loader::{load_chart, ChartPage};
use super::urls::ImageSource;
use super::ChartId;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// A generated page address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Listing,
    Chart(ChartId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Listing => f.write_str("/"),
            Route::Chart(id) => write!(f, "/{id}"),
        }
    }
}

/// The listing plus every detail page.
#[derive(Debug, Clone)]
pub struct Site {
    listing: Vec<ChartId>,
    pages: BTreeMap<ChartId, ChartPage>,
    images: ImageSource,
}

impl Site {
    /// Scans `root` and loads every chart page.
    ///
    /// Fails if either content folder cannot be read or any chart's JSON is
    /// missing or invalid.
    pub fn generate(root: &Path, images: ImageSource) -> Result<Self> {
        let listing = scan_chart_ids(root)?;

        let mut pages = BTreeMap::new();
        for id in scan_data_ids(root)? {
            let page = load_chart(root, &id)?;
            pages.insert(id, page);
        }

        log::info!(
            "generated {} listed charts and {} detail pages from {}",
            listing.len(),
            pages.len(),
            root.display()
        );

        Ok(Self {
            listing,
            pages,
            images,
        })
    }

    /// Chart ids in display order.
    #[must_use]
    pub fn listing(&self) -> &[ChartId] {
        &self.listing
    }

    #[must_use]
    pub fn images(&self) -> &ImageSource {
        &self.images
    }

    /// Detail page for `id`, if one was generated.
    #[must_use]
    pub fn route(&self, id: &ChartId) -> Option<&ChartPage> {
        self.pages.get(id)
    }

    #[must_use]
    pub fn has_page(&self, id: &ChartId) -> bool {
        self.pages.contains_key(id)
    }

    /// Every generated route: the listing first, then detail pages by id.
    #[must_use]
    pub fn route_table(&self) -> Vec<Route> {
        std::iter::once(Route::Listing)
            .chain(self.pages.keys().cloned().map(Route::Chart))
            .collect()
    }
}
