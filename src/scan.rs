// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Media library discovery.
//!
//! This module finds the audio files on the local filesystem that make up the
//! [`Catalog`]. It uses `WalkDir` for directory traversal, visiting entries in
//! file name order so the catalog order is stable between runs.

use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::model::{Catalog, Track};

/// Recursively scans a directory for audio files.
///
/// Any entry that is not a directory is included if its name ends with a dot
/// and one of `extensions`, ignoring case. Symbolic links are listed as found
/// and not followed.
///
/// # Arguments
///
/// * `root` - The directory containing the music library.
/// * `extensions` - Accepted file extensions, without the leading dot.
///
/// # Errors
///
/// Returns an error if any part of the directory tree is inaccessible, or if
/// no matching files were found.
pub(crate) fn scan(root: &Path, extensions: &[String]) -> Result<Catalog> {
    let mut tracks = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if has_extension(path, extensions) {
            tracks.push(Track::new(path));
        }
    }

    let catalog = Catalog::new(tracks)
        .with_context(|| format!("Nothing to play in {}", root.display()))?;

    Ok(catalog)
}

// Matches on the name rather than `Path::extension`, which ignores a name
// such as `.mp3`.
fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();

    extensions
        .iter()
        .any(|wanted| name.ends_with(&format!(".{}", wanted.to_lowercase())))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::model::CatalogError;

    fn mp3() -> Vec<String> {
        vec!["mp3".to_string()]
    }

    fn touch(dir: &Path, name: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn finds_matching_files_recursively_in_name_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.mp3");
        touch(dir.path(), "a.mp3");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "sub/c.MP3");

        let catalog = scan(dir.path(), &mp3()).unwrap();
        let labels: Vec<String> = catalog.tracks().iter().map(Track::label).collect();

        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn directories_named_like_tracks_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("album.mp3")).unwrap();
        touch(dir.path(), "album.mp3/song.mp3");

        let catalog = scan(dir.path(), &mp3()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tracks()[0].label(), "song");
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_tracks_are_listed() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "store/target.bin");
        touch(dir.path(), "plain.mp3");
        std::os::unix::fs::symlink(
            dir.path().join("store/target.bin"),
            dir.path().join("linked.mp3"),
        )
        .unwrap();

        let catalog = scan(dir.path(), &mp3()).unwrap();
        let labels: Vec<String> = catalog.tracks().iter().map(Track::label).collect();

        assert_eq!(labels, vec!["linked", "plain"]);
        assert_eq!(catalog.tracks()[0].path(), dir.path().join("linked.mp3"));
    }

    #[test]
    fn bare_extension_name_is_listed_with_empty_label() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".mp3");
        touch(dir.path(), "mp3");

        let catalog = scan(dir.path(), &mp3()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tracks()[0].path(), dir.path().join(".mp3"));
        assert_eq!(catalog.tracks()[0].label(), "");
    }

    #[test]
    fn honours_configured_extensions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.mp3");
        touch(dir.path(), "b.flac");

        let extensions = vec!["flac".to_string(), "ogg".to_string()];
        let catalog = scan(dir.path(), &extensions).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tracks()[0].label(), "b");
    }

    #[test]
    fn empty_directory_fails() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "cover.jpg");

        let err = scan(dir.path(), &mp3()).unwrap_err();

        assert_eq!(err.downcast_ref::<CatalogError>(), Some(&CatalogError::Empty));
    }

    #[test]
    fn missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        assert!(scan(&missing, &mp3()).is_err());
    }
}
