// SPDX-License-Identifier: MPL-2.0
//! Loads the data and description behind one chart page.

use super::catalog::{DATA_DIR, DESCRIPTION_DIR};
use super::description;
use super::ChartId;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Shown when a chart has no description file.
pub const MISSING_DESCRIPTION_HTML: &str = "<p>No description available.</p>";

/// Everything a detail page displays apart from its images.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPage {
    pub id: ChartId,
    pub data: serde_json::Value,
    /// `data` pretty-printed with two-space indentation, keys in file order.
    pub data_pretty: String,
    pub description_html: String,
    pub description_text: String,
}

/// Reads `data/<id>.json` and `description/<id>.html` under `root`.
///
/// A missing or malformed JSON file is an error. A description that cannot be
/// read is replaced by [`MISSING_DESCRIPTION_HTML`].
pub fn load_chart(root: &Path, id: &ChartId) -> Result<ChartPage> {
    let json_path = root.join(DATA_DIR).join(format!("{id}.json"));
    let raw = fs::read_to_string(&json_path)
        .map_err(|e| Error::Content(format!("{}: {e}", json_path.display())))?;
    let data: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| Error::Json(format!("{}: {e}", json_path.display())))?;
    let data_pretty = serde_json::to_string_pretty(&data)?;

    let html_path = root.join(DESCRIPTION_DIR).join(format!("{id}.html"));
    let description_html = match fs::read_to_string(&html_path) {
        Ok(html) => html,
        Err(e) => {
            log::debug!("no description for {id} ({e})");
            MISSING_DESCRIPTION_HTML.to_string()
        }
    };
    let description_text = description::to_plain_text(&description_html);

    Ok(ChartPage {
        id: id.clone(),
        data,
        data_pretty,
        description_html,
        description_text,
    })
}
