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

//! Domain models and core data structures.
//!
//! This module defines the records returned by the show search service and
//! the transient view state built from them. Nothing here is persisted; all
//! of it is recomputed per interaction.

pub(crate) mod flags;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod movies;
pub(crate) mod scroll;
pub(crate) mod validation;

use serde::Deserialize;

/// Poster image links attached to a show, any of which may be missing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PosterImage {
    #[serde(default)]
    pub medium: Option<String>,
}

/// A single television show as reported by the search service.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ShowRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<PosterImage>,
}

impl ShowRecord {
    /// The medium-size poster link, if the record carries one.
    pub fn poster_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|image| image.medium.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// One entry of a search response, wrapping the show record.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    #[serde(default)]
    pub show: ShowRecord,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn search_hits_tolerate_missing_posters() {
        let body = r#"[
            {"score": 0.9, "show": {"name": "Gilmore Girls", "image": {"medium": "https://img/1.jpg", "original": "https://img/1o.jpg"}}},
            {"show": {"name": "Girls", "image": null}},
            {"show": {"name": "Gossip Girl", "image": {"original": "https://img/3o.jpg"}}},
            {"show": {}}
        ]"#;

        let hits: Vec<SearchHit> = serde_json::from_str(body).unwrap();

        assert_eq!(hits.len(), 4);
        assert_eq!(hits[0].show.poster_url(), Some("https://img/1.jpg"));
        assert_eq!(hits[1].show.poster_url(), None);
        assert_eq!(hits[2].show.poster_url(), None);
        assert_eq!(hits[3].show.display_name(), "");
        assert_eq!(hits[2].show.display_name(), "Gossip Girl");
    }

    #[test]
    fn empty_poster_link_counts_as_missing() {
        let show = ShowRecord {
            name: Some("Blank".into()),
            image: Some(PosterImage {
                medium: Some(String::new()),
            }),
        };

        assert_eq!(show.poster_url(), None);
    }
}
