// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and shared content fixtures.

pub use approx::assert_abs_diff_eq;

use std::fs;
use std::path::Path;

/// Epsilon for scale comparisons after a few additions of 0.1.
pub const SCALE_EPSILON: f32 = 1e-5;

/// Creates `finalQuestionare/<id>/` for each id under `root`.
pub fn make_chart_dirs(root: &Path, ids: &[&str]) {
    for id in ids {
        fs::create_dir_all(root.join("finalQuestionare").join(id))
            .expect("failed to create chart dir");
    }
}

/// Writes `data/<id>.json` with the given body.
pub fn write_chart_data(root: &Path, id: &str, json: &str) {
    let dir = root.join("data");
    fs::create_dir_all(&dir).expect("failed to create data dir");
    fs::write(dir.join(format!("{id}.json")), json).expect("failed to write chart data");
}

/// Writes `description/<id>.html` with the given body.
pub fn write_description(root: &Path, id: &str, html: &str) {
    let dir = root.join("description");
    fs::create_dir_all(&dir).expect("failed to create description dir");
    fs::write(dir.join(format!("{id}.html")), html).expect("failed to write description");
}

/// Encodes a blank RGBA PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image_rs::RgbaImage::new(width, height);
    let mut bytes = Vec::new();
    image_rs::DynamicImage::ImageRgba8(image)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .expect("failed to encode png");
    bytes
}
