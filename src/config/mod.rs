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
//! This module manages the application configuration file. Missing or
//! unreadable configuration falls back to the defaults.

use std::{path::PathBuf, time::Duration};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    model::{grid::DEFAULT_REVEAL_STAGGER, scroll::DEFAULT_SCROLL_THRESHOLD},
    search::DEFAULT_API_BASE_URL,
};

pub(crate) const CONFIG_NAME: &str = "flixview";

const DEFAULT_POSTER: &str = "https://via.placeholder.com/210x295.png?text=No+Image";

const DEFAULT_CATEGORIES: [&str; 8] = [
    "Girl", "Love", "Action", "Comedy", "Drama", "Crime", "Horror", "Science",
];

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_base_url: String,
    pub placeholder_poster: String,
    pub categories: Vec<String>,
    pub reveal_stagger_ms: u64,
    pub scroll_threshold: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            placeholder_poster: DEFAULT_POSTER.to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            reveal_stagger_ms: DEFAULT_REVEAL_STAGGER.as_millis() as u64,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

impl AppConfig {
    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    /// The category searched when the movies page opens.
    pub fn initial_category(&self) -> &str {
        self.categories
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_CATEGORIES[0])
    }
}

pub fn load_config() -> AppConfig {
    let mut config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_default();
    config.categories.retain(|c| !c.trim().is_empty());
    if config.categories.is_empty() {
        warn!("No categories configured, using defaults");
        config.categories = AppConfig::default().categories;
    }
    config
}

/// Directory holding the configuration file, also used for the log file.
pub fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_public_service() {
        let config = AppConfig::default();

        assert_eq!(config.api_base_url, "https://api.tvmaze.com");
        assert_eq!(config.initial_category(), "Girl");
        assert_eq!(config.reveal_stagger(), Duration::from_millis(50));
        assert_eq!(config.scroll_threshold, 100);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"categories": ["Anime"]}"#).unwrap();

        assert_eq!(config.initial_category(), "Anime");
        assert_eq!(config.placeholder_poster, DEFAULT_POSTER);
    }

    #[test]
    fn empty_category_list_falls_back() {
        let config = AppConfig {
            categories: vec![],
            ..AppConfig::default()
        };

        assert_eq!(config.initial_category(), "Girl");
    }
}
