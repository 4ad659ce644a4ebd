// SPDX-License-Identifier: MPL-2.0
//! Directory scanner building the gallery listing.
//!
//! The scan runs once at startup: every entry of the gallery directory is
//! listed (directories and unrecognized files included, as non-previewable
//! rows), sorted by the configured column and direction.

use crate::config::{SortBy, SortDirection};
use crate::error::Result;
use crate::gallery::Entry;
use crate::media;
use std::path::Path;
use std::time::SystemTime;

/// Scan options, derived from the configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub sort_by: SortBy,
    pub sort_direction: SortDirection,
    pub exclude_dotfiles: bool,
}

/// Scans `directory` and returns the sorted gallery listing.
///
/// # Errors
///
/// Returns an error if the directory cannot be read. Entries whose metadata
/// cannot be read are skipped rather than failing the whole scan.
pub fn scan_gallery(directory: &Path, options: ScanOptions) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for dir_entry in std::fs::read_dir(directory)? {
        let dir_entry = dir_entry?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();

        if options.exclude_dotfiles && name.starts_with('.') {
            continue;
        }

        let Ok(metadata) = dir_entry.metadata() else {
            continue;
        };

        let path = dir_entry.path();
        let is_dir = metadata.is_dir();
        let kind = if is_dir {
            None
        } else {
            media::detect_media_kind(&path)
        };

        entries.push(Entry {
            name,
            path,
            kind,
            size: if is_dir { 0 } else { metadata.len() },
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            is_dir,
        });
    }

    sort_entries(&mut entries, options.sort_by, options.sort_direction);
    Ok(entries)
}

fn sort_entries(entries: &mut [Entry], sort_by: SortBy, direction: SortDirection) {
    entries.sort_by(|a, b| {
        let ordering = match sort_by {
            SortBy::Name => a.name.cmp(&b.name),
            SortBy::Size => a.size.cmp(&b.size).then_with(|| a.name.cmp(&b.name)),
            SortBy::Modified => a
                .modified
                .cmp(&b.modified)
                .then_with(|| a.name.cmp(&b.name)),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_file(dir: &Path, name: &str, bytes: usize) {
        let mut file = fs::File::create(dir.join(name)).expect("failed to create test file");
        file.write_all(&vec![0u8; bytes])
            .expect("failed to write test file");
    }

    #[test]
    fn scan_lists_every_entry_and_tags_kinds() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "a.jpg", 10);
        create_file(temp_dir.path(), "b.mp4", 10);
        create_file(temp_dir.path(), "c.txt", 10);
        fs::create_dir(temp_dir.path().join("subdir")).expect("failed to create subdir");

        let entries =
            scan_gallery(temp_dir.path(), ScanOptions::default()).expect("scan failed");

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].kind, Some(MediaKind::Image));
        assert_eq!(entries[1].kind, Some(MediaKind::Video));
        assert_eq!(entries[2].kind, None);
        assert!(entries[3].is_dir);
        assert_eq!(entries[3].kind, None);
    }

    #[test]
    fn scan_sorts_by_name_ascending_by_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "c.png", 1);
        create_file(temp_dir.path(), "a.png", 1);
        create_file(temp_dir.path(), "b.png", 1);

        let entries =
            scan_gallery(temp_dir.path(), ScanOptions::default()).expect("scan failed");

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn scan_sorts_by_size_descending() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "small.png", 1);
        create_file(temp_dir.path(), "large.png", 100);
        create_file(temp_dir.path(), "medium.png", 50);

        let options = ScanOptions {
            sort_by: SortBy::Size,
            sort_direction: SortDirection::Descending,
            exclude_dotfiles: false,
        };
        let entries = scan_gallery(temp_dir.path(), options).expect("scan failed");

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["large.png", "medium.png", "small.png"]);
    }

    #[test]
    fn scan_excludes_dotfiles_when_configured() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), ".hidden.png", 1);
        create_file(temp_dir.path(), "visible.png", 1);

        let options = ScanOptions {
            exclude_dotfiles: true,
            ..ScanOptions::default()
        };
        let entries = scan_gallery(temp_dir.path(), options).expect("scan failed");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "visible.png");

        let all = scan_gallery(temp_dir.path(), ScanOptions::default()).expect("scan failed");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn scan_missing_directory_errors() {
        let result = scan_gallery(Path::new("/nonexistent/gallery"), ScanOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn scan_empty_directory_returns_empty_list() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let entries =
            scan_gallery(temp_dir.path(), ScanOptions::default()).expect("scan failed");
        assert!(entries.is_empty());
    }
}
