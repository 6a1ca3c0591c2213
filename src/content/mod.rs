// SPDX-License-Identifier: MPL-2.0
//! Chart content: discovery, per-chart data, descriptions, and image URLs.
//!
//! A content directory has this layout:
//!
//! ```text
//! <root>/
//!   finalQuestionare/<id>/<id>A.png, <id>C.png
//!   data/<id>.json
//!   description/<id>.html        (optional)
//! ```

pub mod catalog;
mod chart_id;
pub mod description;
pub mod loader;
pub mod site;
pub mod urls;

pub use chart_id::ChartId;
pub use loader::{load_chart, ChartPage, MISSING_DESCRIPTION_HTML};
pub use site::{Route, Site};
pub use urls::ImageSource;
