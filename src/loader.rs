/// Background thumbnail decoding
///
/// Decoding and downscaling picture files is CPU-bound, so it runs on the
/// blocking pool and comes back to the update loop as a message. The main
/// display hands full-size paths straight to the image widget; only the
/// strip needs pre-decoded, downscaled pixels.
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::imageops::FilterType;

use crate::gallery::GalleryConfig;

/// Bounding box of generated thumbnails (square)
const THUMBNAIL_SIZE: u32 = 256;

/// One decoded thumbnail, tagged with the entry index it belongs to.
#[derive(Debug, Clone)]
pub struct DecodedThumbnail {
    pub index: usize,
    pub handle: Handle,
}

/// Every thumbnail decoded for one gallery, tagged with the gallery root
/// so results that outlive a gallery swap can be recognized and dropped.
#[derive(Debug, Clone)]
pub struct DecodedBatch {
    pub root: PathBuf,
    pub thumbnails: Vec<DecodedThumbnail>,
}

/// Decode thumbnails for every entry of `config` off the UI thread.
pub async fn decode_thumbnails(config: GalleryConfig) -> Result<DecodedBatch, String> {
    tokio::task::spawn_blocking(move || {
        let thumbnails = decode_thumbnails_blocking(&config);
        DecodedBatch {
            root: config.root().to_path_buf(),
            thumbnails,
        }
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))
}

/// Blocking implementation of thumbnail decoding.
///
/// A file that fails to decode costs its own slot and nothing else; the
/// strip shows alt text for that entry instead.
fn decode_thumbnails_blocking(config: &GalleryConfig) -> Vec<DecodedThumbnail> {
    let mut decoded = Vec::with_capacity(config.len());

    for index in 0..config.len() {
        let Some(path) = config.source_path(index) else {
            continue;
        };

        match decode_one(&path) {
            Ok(handle) => decoded.push(DecodedThumbnail { index, handle }),
            Err(e) => {
                tracing::warn!(picture = %path.display(), error = %e, "skipping thumbnail");
            }
        }
    }

    tracing::info!(
        decoded = decoded.len(),
        total = config.len(),
        "thumbnail decode finished"
    );

    decoded
}

/// Decode a single picture file and downscale it to the thumbnail box.
fn decode_one(path: &Path) -> Result<Handle, String> {
    let img = image::open(path).map_err(|e| format!("failed to decode: {}", e))?;

    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);
    let rgba = thumbnail.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
