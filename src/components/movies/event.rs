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

//! Event routing for the movies page.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::MoviesView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for MoviesView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };

        let category = match key.code {
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => self.select_next(),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => self.select_previous(),
            KeyCode::Char('r') => self.selected_category().map(str::to_string),
            KeyCode::Char('n') => {
                self.movies.grid.select_next();
                None
            }
            KeyCode::Char('p') => {
                self.movies.grid.select_previous();
                None
            }
            KeyCode::Enter => {
                self.open_selected_show();
                None
            }
            KeyCode::Char('q') => {
                event_tx.send(AppEvent::ExitApplication)?;
                None
            }
            _ => None,
        };

        if let Some(category) = category {
            event_tx.send(AppEvent::SelectCategory(category))?;
        }

        Ok(())
    }
}
