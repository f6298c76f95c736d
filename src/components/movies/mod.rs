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

//! Movies page: a category selector above a grid of show posters.

mod event;
mod render;

use log::info;

use crate::{config::AppConfig, model::movies::Movies};

pub(crate) struct MoviesView {
    pub(crate) movies: Movies,
    pub(crate) categories: Vec<String>,
    pub(crate) selected: usize,
}

impl MoviesView {
    /// Creates the view; without configured categories the selector offers
    /// only [`AppConfig::initial_category`].
    pub(crate) fn new(config: &AppConfig) -> Self {
        let categories = if config.categories.is_empty() {
            vec![config.initial_category().to_string()]
        } else {
            config.categories.clone()
        };

        Self {
            movies: Movies::new(config.placeholder_poster.clone(), config.reveal_stagger()),
            categories,
            selected: 0,
        }
    }

    pub(crate) fn selected_category(&self) -> Option<&str> {
        self.categories.get(self.selected).map(String::as_str)
    }

    /// Selects the first category, returning it for the initial load.
    pub(crate) fn select_initial_category(&mut self) -> String {
        self.selected = 0;
        self.selected_category().unwrap_or_default().to_string()
    }

    /// Opens the selected card, if any, returning its show name.
    pub(crate) fn open_selected_show(&self) -> Option<&str> {
        let card = self.movies.grid.selected_card()?;
        info!("Show selected: {}", card.name);
        Some(card.name.as_str())
    }

    pub(crate) fn select_next(&mut self) -> Option<String> {
        if self.categories.is_empty() {
            return None;
        }
        self.selected = (self.selected + 1) % self.categories.len();
        self.selected_category().map(str::to_string)
    }

    pub(crate) fn select_previous(&mut self) -> Option<String> {
        if self.categories.is_empty() {
            return None;
        }
        self.selected = self.selected.checked_sub(1).unwrap_or(self.categories.len() - 1);
        self.selected_category().map(str::to_string)
    }
}
