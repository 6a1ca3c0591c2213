// SPDX-License-Identifier: MPL-2.0
//! Fetches image bytes from a URL or a local path and probes their size.
//!
//! Only the header is decoded here. Pixel decoding is left to the renderer,
//! which receives the encoded bytes through the image handle.

use super::LoadedImage;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::ImageReader;
use std::io::Cursor;

const USER_AGENT: &str = concat!("AnalogyGallery/", env!("CARGO_PKG_VERSION"));

/// Whether `source` must be fetched over HTTP.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    source.starts_with("https://") || source.starts_with("http://")
}

/// Loads the image at `source`.
///
/// Takes the source by value so the future is `'static` for `Task::perform`.
pub async fn fetch_image(source: String) -> Result<LoadedImage> {
    let bytes = if is_remote(&source) {
        download(&source).await?
    } else {
        tokio::fs::read(&source)
            .await
            .map_err(|e| Error::Io(format!("{source}: {e}")))?
    };

    let image = decode(bytes)?;
    log::debug!("loaded {source} ({}x{})", image.width, image.height);
    Ok(image)
}

async fn download(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "{url}: HTTP status {}",
            response.status()
        )));
    }

    Ok(response.bytes().await?.to_vec())
}

/// Reads the dimensions of encoded image bytes and wraps them in a handle.
pub fn decode(bytes: Vec<u8>) -> Result<LoadedImage> {
    let (width, height) = ImageReader::new(Cursor::new(bytes.as_slice()))
        .with_guessed_format()
        .map_err(|e| Error::Decode(e.to_string()))?
        .into_dimensions()?;

    if width == 0 || height == 0 {
        return Err(Error::Decode(format!("empty image ({width}x{height})")));
    }

    Ok(LoadedImage {
        handle: image::Handle::from_bytes(bytes),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::png_bytes;
    use tempfile::tempdir;

    #[test]
    fn remote_sources_are_detected() {
        assert!(is_remote("https://example.org/a.png"));
        assert!(is_remote("http://localhost:8000/a.png"));
        assert!(!is_remote("/srv/public/finalQuestionare/Sankey/SankeyA.png"));
        assert!(!is_remote("httpdocs/a.png"));
    }

    #[test]
    fn decode_reads_dimensions() {
        let image = decode(png_bytes(40, 30)).expect("png should decode");
        assert_eq!((image.width, image.height), (40, 30));
    }

    #[test]
    fn decode_rejects_garbage() {
        let result = decode(b"definitely not an image".to_vec());
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn fetch_reads_local_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("BarChartA.png");
        std::fs::write(&path, png_bytes(12, 600)).expect("failed to write png");

        let image = fetch_image(path.to_string_lossy().into_owned())
            .await
            .expect("local image should load");
        assert_eq!(image.height, 600);
    }

    #[tokio::test]
    async fn fetch_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing.png");

        let result = fetch_image(path.to_string_lossy().into_owned()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
