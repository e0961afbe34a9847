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

//! MPV-backed audio playback engine.
//!
//! A background worker thread owns the `libmpv` context. It receives
//! [`AudioPlayerCommand`]s over a channel and otherwise drains MPV's event
//! queue. Nothing is reported back to the UI, problems are only logged.

use std::{
    sync::mpsc::{Receiver, TryRecvError},
    thread,
};

use anyhow::{Context, Result};
use tracing::{debug, error, warn};

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    PlayFile(String),
}

/// Spawns the audio worker thread to process playback commands.
///
/// The worker exits when every sender of `command_rx` has been dropped. If it
/// fails the error is logged and later play requests are silently lost.
pub(crate) fn spawn_player_worker(command_rx: Receiver<AudioPlayerCommand>) {
    let spawned = thread::Builder::new()
        .name("audio-player".to_string())
        .spawn(move || {
            if let Err(e) = audio_player_worker(command_rx) {
                error!("MPV worker failure: {:#}", e);
            }
        });

    if let Err(e) = spawned {
        error!("Failed to spawn MPV worker: {}", e);
    }
}

fn audio_player_worker(command_rx: Receiver<AudioPlayerCommand>) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    loop {
        if !process_commands(&mut handler, &command_rx) {
            debug!("Audio worker shutting down");
            return Ok(());
        }
        process_mpv_events(&mut handler);
    }
}

/// Drains and executes all pending commands.
///
/// Returns `false` once the command channel is closed.
fn process_commands(handler: &mut mpv::MpvHandler, command_rx: &Receiver<AudioPlayerCommand>) -> bool {
    loop {
        match command_rx.try_recv() {
            Ok(AudioPlayerCommand::PlayFile(filename)) => {
                if let Err(e) = play_file(handler, &filename) {
                    warn!("{:#}", e);
                }
            }
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => return false,
        }
    }
}

fn play_file(handler: &mut mpv::MpvHandler, filename: &str) -> Result<()> {
    handler
        .command(&["loadfile", filename, "replace"])
        .with_context(|| format!("Failed to load file: {}", filename))?;
    handler
        .set_property("pause", false)
        .context("Failed to unpause")?;
    Ok(())
}

/// Waits up to 50ms for an MPV event, logging the end of each file.
fn process_mpv_events(handler: &mut mpv::MpvHandler) {
    if let Some(mpv::Event::EndFile(result)) = handler.wait_event(0.05) {
        match result {
            Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => debug!("Track finished"),
            Ok(_) => debug!("Track stopped"),
            Err(e) => warn!("Track ended with error: {}", e),
        }
    }
}
