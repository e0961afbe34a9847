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

//! Library data model.
//!
//! A [`Catalog`] is the fixed, ordered list of playable [`Track`]s discovered
//! at startup. It is never modified once built.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum CatalogError {
    #[error("no playable tracks found")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    path: PathBuf,
}

impl Track {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// The display name of the track, the file name without any directory or
    /// extension. A name that is only an extension, such as `.mp3`, gives an
    /// empty label.
    ///
    /// Control characters are replaced so a label always occupies exactly one
    /// terminal line.
    pub(crate) fn label(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let stem = name.rsplit_once('.').map_or(&*name, |(stem, _)| stem);

        stem.chars()
            .map(|c| if c.is_control() { '?' } else { c })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Builds a catalog, preserving the order of `tracks`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if there are no tracks, since an empty
    /// catalog can never have a selection.
    pub(crate) fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { tracks })
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn last_index(&self) -> usize {
        self.tracks.len() - 1
    }
}
