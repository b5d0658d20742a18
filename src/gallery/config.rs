use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::GalleryError;
use super::scan;

/// Directory pictures are loaded from when the user has not chosen one.
pub const DEFAULT_ROOT: &str = "images";

/// Filename of the optional JSON manifest inside a gallery directory.
pub const MANIFEST_NAME: &str = "gallery.json";

/// A single picture in the gallery: a filename relative to the gallery
/// root plus the alternative text describing it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Filename relative to the gallery root (e.g. "pic1.jpg")
    pub file: String,
    /// Alternative text describing the picture
    pub alt: String,
}

impl ImageEntry {
    pub fn new(file: impl Into<String>, alt: impl Into<String>) -> Self {
        ImageEntry {
            file: file.into(),
            alt: alt.into(),
        }
    }
}

/// The immutable configuration a gallery is built from: the directory the
/// picture files live in plus an ordered list of entries.
///
/// Entries never change after construction; selecting and lighting state
/// live on the application, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    root: PathBuf,
    entries: Vec<ImageEntry>,
}

impl GalleryConfig {
    pub fn new(root: impl Into<PathBuf>, entries: Vec<ImageEntry>) -> Self {
        GalleryConfig {
            root: root.into(),
            entries,
        }
    }

    /// Build a gallery from two positionally-correlated lists, one of
    /// filenames and one of alt texts. Lists that do not pair up are
    /// rejected instead of being silently truncated.
    pub fn from_parallel(
        root: impl Into<PathBuf>,
        files: Vec<String>,
        alts: Vec<String>,
    ) -> Result<Self, GalleryError> {
        if files.len() != alts.len() {
            return Err(GalleryError::MismatchedLists {
                files: files.len(),
                alts: alts.len(),
            });
        }

        let entries = files
            .into_iter()
            .zip(alts)
            .map(|(file, alt)| ImageEntry { file, alt })
            .collect();

        Ok(Self::new(root, entries))
    }

    /// The built-in five-picture gallery, used when no usable directory is
    /// available at startup.
    pub fn default_pictures() -> Self {
        let entries = vec![
            ImageEntry::new("pic1.jpg", "Closeup of a human eye"),
            ImageEntry::new("pic2.jpg", "Rock that looks like a wall"),
            ImageEntry::new("pic3.jpg", "Purple and white pansies"),
            ImageEntry::new("pic4.jpg", "Section of wall from a pharaoh's tomb"),
            ImageEntry::new("pic5.jpg", "Large moth on a leaf"),
        ];

        Self::new(DEFAULT_ROOT, entries)
    }

    /// Load a gallery from a directory.
    ///
    /// A `gallery.json` manifest wins if present and valid; otherwise the
    /// directory is scanned for picture files. A directory that yields no
    /// entries either way is an error.
    pub fn load(root: &Path) -> Result<Self, GalleryError> {
        match Self::from_manifest(root) {
            Ok(Some(config)) => return Ok(config),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, root = %root.display(), "ignoring unusable gallery manifest");
            }
        }

        let entries = scan::scan_directory(root);
        if entries.is_empty() {
            return Err(GalleryError::EmptyGallery(root.to_path_buf()));
        }

        Ok(Self::new(root, entries))
    }

    /// Read and parse the manifest, if there is one.
    fn from_manifest(root: &Path) -> Result<Option<Self>, GalleryError> {
        let path = root.join(MANIFEST_NAME);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path).map_err(|source| GalleryError::Io {
            path: path.clone(),
            source,
        })?;

        let entries: Vec<ImageEntry> = serde_json::from_str(&raw)?;
        if entries.is_empty() {
            return Err(GalleryError::EmptyGallery(root.to_path_buf()));
        }

        tracing::info!(pictures = entries.len(), manifest = %path.display(), "loaded gallery manifest");
        Ok(Some(Self::new(root, entries)))
    }

    /// Directory the picture files live in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The ordered picture list.
    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Full path of entry `index`'s picture file: the gallery root joined
    /// with the entry's filename.
    pub fn source_path(&self, index: usize) -> Option<PathBuf> {
        self.entries.get(index).map(|entry| self.root.join(&entry.file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parallel_preserves_pairing() {
        let files = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        let alts = vec!["first".to_string(), "second".to_string()];

        let config = GalleryConfig::from_parallel("pics", files, alts).unwrap();

        assert_eq!(config.len(), 2);
        assert_eq!(config.entry(0).unwrap().file, "a.jpg");
        assert_eq!(config.entry(0).unwrap().alt, "first");
        assert_eq!(config.entry(1).unwrap().file, "b.jpg");
        assert_eq!(config.entry(1).unwrap().alt, "second");
    }

    #[test]
    fn test_from_parallel_rejects_mismatched_lists() {
        let files = vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()];
        let alts = vec!["first".to_string(), "second".to_string()];

        let err = GalleryConfig::from_parallel("pics", files, alts).unwrap_err();

        assert!(matches!(
            err,
            GalleryError::MismatchedLists { files: 3, alts: 2 }
        ));
    }

    #[test]
    fn test_source_path_joins_root_and_filename() {
        let config = GalleryConfig::default_pictures();

        assert_eq!(
            config.source_path(2),
            Some(PathBuf::from(DEFAULT_ROOT).join("pic3.jpg"))
        );
        assert_eq!(config.source_path(99), None);
    }

    #[test]
    fn test_default_pictures_has_five_entries() {
        let config = GalleryConfig::default_pictures();

        assert_eq!(config.len(), 5);
        assert_eq!(config.root(), Path::new(DEFAULT_ROOT));
    }

    #[test]
    fn test_entry_round_trips_through_json() {
        let entry = ImageEntry::new("pic1.jpg", "Closeup of a human eye");

        let json = serde_json::to_string(&entry).unwrap();
        let restored: ImageEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, restored);
    }

    #[test]
    fn test_load_prefers_manifest_over_scan() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_NAME),
            r#"[{"file": "chosen.jpg", "alt": "the one the manifest names"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("ignored.jpg"), b"").unwrap();

        let config = GalleryConfig::load(dir.path()).unwrap();

        assert_eq!(config.len(), 1);
        assert_eq!(config.entry(0).unwrap().file, "chosen.jpg");
    }

    #[test]
    fn test_load_falls_back_to_scan_on_bad_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_NAME), b"this is not json").unwrap();
        fs::write(dir.path().join("found.png"), b"").unwrap();

        let config = GalleryConfig::load(dir.path()).unwrap();

        assert_eq!(config.len(), 1);
        assert_eq!(config.entry(0).unwrap().file, "found.png");
    }

    #[test]
    fn test_load_errors_on_directory_without_pictures() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"not a picture").unwrap();

        let err = GalleryConfig::load(dir.path()).unwrap_err();

        assert!(matches!(err, GalleryError::EmptyGallery(_)));
    }
}
