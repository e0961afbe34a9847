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

//! Audio playback.
//!
//! This module provides the [`Playback`] seam used by the event loop, the
//! MPV-backed [`AudioPlayer`] that implements it, and [`spawn_playback`],
//! which issues a fire-and-forget request for a single track.
//!
//! Playback requests are deliberately never awaited: a slow or broken audio
//! engine must not stall navigation. Failures are logged and otherwise
//! dropped.

mod engine;

use std::{
    path::Path,
    sync::{Arc, mpsc},
    thread,
};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{model::Track, player::engine::AudioPlayerCommand};

/// Something that can start playing an audio file.
pub(crate) trait Playback: Send + Sync {
    fn play(&self, path: &Path) -> Result<()>;
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    pub(crate) fn new() -> Self {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        engine::spawn_player_worker(command_rx);

        Self { command_tx }
    }
}

impl Playback for AudioPlayer {
    /// Instructs the worker to load and play a specific audio file, replacing
    /// whatever is currently playing.
    fn play(&self, path: &Path) -> Result<()> {
        let filename = path.to_str().context("Path contains invalid UTF-8")?;
        self.command_tx
            .send(AudioPlayerCommand::PlayFile(filename.to_string()))
            .context("Audio worker is not running")?;
        Ok(())
    }
}

/// Requests playback of `track` on a detached thread.
///
/// The returned handle is dropped straight away: the request is never joined,
/// cancelled or checked, and a second request may be issued before the first
/// completes.
pub(crate) fn spawn_playback(player: Arc<dyn Playback>, track: Track) {
    info!(track = %track.path().display(), "Playback requested");

    let spawned = thread::Builder::new()
        .name("playback-request".to_string())
        .spawn(move || {
            if let Err(e) = player.play(track.path()) {
                warn!(track = %track.path().display(), "Playback failed: {:#}", e);
            }
        });

    match spawned {
        Ok(handle) => drop(handle),
        Err(e) => warn!("Failed to spawn playback request: {}", e),
    }
}
