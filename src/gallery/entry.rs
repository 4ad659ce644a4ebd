// SPDX-License-Identifier: MPL-2.0
//! A single item of the gallery listing.

use crate::media::MediaKind;
use std::path::PathBuf;
use std::time::SystemTime;

/// One entry of the gallery listing.
///
/// Every file and directory found in the gallery directory becomes an entry;
/// only entries with a [`MediaKind`] can be opened in the preview. The list
/// is built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Display name (the file name component).
    pub name: String,
    /// Resolved path of the entry on disk.
    pub path: PathBuf,
    /// Displayable kind, or `None` for non-previewable entries
    /// (directories, unrecognized file types).
    pub kind: Option<MediaKind>,
    /// File size in bytes (0 for directories).
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl Entry {
    /// Whether this entry can be opened in the preview.
    #[must_use]
    pub fn is_previewable(&self) -> bool {
        self.kind.is_some()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::path::Path;

    /// Builds an in-memory entry without touching the filesystem.
    pub fn entry(name: &str, kind: Option<MediaKind>) -> Entry {
        Entry {
            name: name.to_string(),
            path: Path::new("/gallery").join(name),
            kind,
            size: 1024,
            modified: SystemTime::UNIX_EPOCH,
            is_dir: false,
        }
    }
}
