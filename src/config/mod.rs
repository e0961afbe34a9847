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

//! Application configuration.
//!
//! This module reads the optional application configuration file. The file
//! is never created or written by the application, without one the defaults
//! apply.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "trackpick";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub extensions: Vec<String>,
    pub title: String,
    pub help: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            extensions: vec!["mp3".to_string()],
            title: "Select Song To Play!".to_string(),
            help: "Press q to exit".to_string(),
            log_file: None,
        }
    }
}

/// Loads the configuration file, if there is one.
///
/// # Errors
///
/// Returns an error if the configuration path cannot be determined or the
/// file exists but cannot be parsed.
pub fn load_config() -> Result<AppConfig> {
    let path = confy::get_configuration_file_path(CONFIG_NAME, None)
        .context("Failed to locate configuration file")?;
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    confy::load_path(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))
}
