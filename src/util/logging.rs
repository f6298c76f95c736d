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

//! Log output setup.
//!
//! The terminal belongs to the UI while the application runs, so log records
//! go to a file beside the configuration file instead of stderr.

use std::fs::{self, File};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::config;

const LOG_FILE: &str = "flixview.log";

/// Initialises the global logger.
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
pub(crate) fn setup_logging() -> Result<()> {
    let dir = config::config_dir().context("Failed to resolve configuration directory")?;
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialise logger")?;

    Ok(())
}
