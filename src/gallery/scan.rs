use std::path::Path;
use walkdir::WalkDir;

use super::config::ImageEntry;

/// File extensions accepted as gallery pictures.
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Collect every picture file under `root`, sorted by filename for a
/// stable thumbnail order. Alt text is derived from the file stem since a
/// bare directory carries no descriptions.
///
/// Unreadable directory entries are skipped rather than aborting the scan.
pub fn scan_directory(root: &Path) -> Vec<ImageEntry> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(extension) = path.extension() else {
            continue;
        };
        let ext = extension.to_string_lossy().to_lowercase();
        if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        // Keep the path relative to the gallery root so entries stay
        // portable if the directory moves.
        let file = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        let alt = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| file.clone());

        entries.push(ImageEntry::new(file, alt));
    }

    entries.sort_by(|a, b| a.file.cmp(&b.file));
    entries
}
