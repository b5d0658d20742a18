use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building a gallery configuration.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The two parallel name lists of the legacy constructor do not pair up.
    #[error("picture list and alt-text list differ in length ({files} files, {alts} alt texts)")]
    MismatchedLists { files: usize, alts: usize },

    /// A gallery manifest exists but does not parse.
    #[error("invalid gallery manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Reading the gallery directory or manifest failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory contains nothing displayable.
    #[error("no pictures found in {}", .0.display())]
    EmptyGallery(PathBuf),
}
