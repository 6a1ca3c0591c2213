// SPDX-License-Identifier: MPL-2.0
//! Discovery of chart ids in a content directory.
//!
//! The listing comes from the subdirectories of the questionnaire folder;
//! detail pages come from the JSON files in the data folder. The two sets are
//! not required to match.

use super::ChartId;
use crate::error::Result;
use std::cmp::Ordering;
use std::path::Path;

/// Folder holding one subdirectory of images per chart.
pub const QUESTIONNAIRE_DIR: &str = "finalQuestionare";
/// Folder holding `<id>.json` chart data.
pub const DATA_DIR: &str = "data";
/// Folder holding optional `<id>.html` descriptions.
pub const DESCRIPTION_DIR: &str = "description";

/// Charts listed first, in this order.
pub const PREFERRED_ORDER: [&str; 6] = [
    "Waterfall",
    "BarChart",
    "Histogram",
    "StackedArea",
    "Sunburst",
    "Treemap",
];

/// Lists chart ids from the subdirectories of `root/finalQuestionare`.
///
/// Entries that are not directories, or whose names are not valid ids, are
/// skipped. Symlinks are not followed.
pub fn scan_chart_ids(root: &Path) -> Result<Vec<ChartId>> {
    let dir = root.join(QUESTIONNAIRE_DIR);
    let mut ids = Vec::new();

    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            log::debug!("skipping non UTF-8 name {}", entry.path().display());
            continue;
        };
        match ChartId::new(name) {
            Ok(id) => ids.push(id),
            Err(e) => log::debug!("skipping {}: {e}", entry.path().display()),
        }
    }

    sort_chart_ids(&mut ids);
    Ok(ids)
}

/// Lists chart ids that have a `root/data/<id>.json` file, sorted by name.
pub fn scan_data_ids(root: &Path) -> Result<Vec<ChartId>> {
    let dir = root.join(DATA_DIR);
    let mut ids = Vec::new();

    for entry in std::fs::read_dir(&dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            log::debug!("skipping non UTF-8 name {}", path.display());
            continue;
        };
        match ChartId::new(stem) {
            Ok(id) => ids.push(id),
            Err(e) => log::debug!("skipping {}: {e}", path.display()),
        }
    }

    ids.sort();
    Ok(ids)
}

/// Preferred charts first in their fixed order, then the rest alphabetically.
pub fn sort_chart_ids(ids: &mut [ChartId]) {
    ids.sort_by(|a, b| compare_chart_ids(a.as_str(), b.as_str()));
}

fn preferred_rank(id: &str) -> Option<usize> {
    PREFERRED_ORDER.iter().position(|p| *p == id)
}

fn compare_chart_ids(a: &str, b: &str) -> Ordering {
    match (preferred_rank(a), preferred_rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_chart_dirs, write_chart_data};
    use tempfile::tempdir;

    fn ids(names: &[&str]) -> Vec<ChartId> {
        names
            .iter()
            .map(|n| ChartId::new(*n).expect("valid id"))
            .collect()
    }

    fn names(ids: &[ChartId]) -> Vec<&str> {
        ids.iter().map(ChartId::as_str).collect()
    }

    #[test]
    fn preferred_charts_come_first() {
        let mut list = ids(&["Sankey", "Treemap", "BubbleChart", "Waterfall", "BarChart"]);
        sort_chart_ids(&mut list);
        assert_eq!(
            names(&list),
            ["Waterfall", "BarChart", "Treemap", "BubbleChart", "Sankey"]
        );
    }

    #[test]
    fn remaining_charts_sort_case_insensitively() {
        let mut list = ids(&["heatmap", "Sankey", "ButterflyChart", "Heatmap"]);
        sort_chart_ids(&mut list);
        assert_eq!(
            names(&list),
            ["ButterflyChart", "Heatmap", "heatmap", "Sankey"]
        );
    }

    #[test]
    fn scan_lists_only_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        make_chart_dirs(dir.path(), &["Heatmap", "Histogram", "Waterfall"]);
        std::fs::write(dir.path().join(QUESTIONNAIRE_DIR).join("notes.txt"), "x")
            .expect("failed to write file");

        let found = scan_chart_ids(dir.path()).expect("scan should succeed");
        assert_eq!(names(&found), ["Waterfall", "Histogram", "Heatmap"]);
    }

    #[test]
    fn scan_missing_folder_is_error() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(scan_chart_ids(dir.path()).is_err());
    }

    #[test]
    fn data_ids_are_json_stems() {
        let dir = tempdir().expect("failed to create temp dir");
        write_chart_data(dir.path(), "Sankey", "{}");
        write_chart_data(dir.path(), "BarChart", "[]");
        std::fs::write(dir.path().join(DATA_DIR).join("README.md"), "# data")
            .expect("failed to write file");

        let found = scan_data_ids(dir.path()).expect("scan should succeed");
        assert_eq!(names(&found), ["BarChart", "Sankey"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_directory_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().expect("failed to create temp dir");
        make_chart_dirs(dir.path(), &["Waterfall"]);
        let bad = dir
            .path()
            .join(QUESTIONNAIRE_DIR)
            .join(OsStr::from_bytes(b"Bar\xffChart"));
        std::fs::create_dir(&bad).expect("failed to create dir");

        let found = scan_chart_ids(dir.path()).expect("scan should succeed");
        assert_eq!(names(&found), ["Waterfall"]);
    }
}
