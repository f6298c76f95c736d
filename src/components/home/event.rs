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

//! Event routing for the home page.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::HomeView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for HomeView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key) if key.code == KeyCode::Enter => match self.submit() {
                Ok(location) => event_tx.send(AppEvent::Navigate(location))?,
                Err(message) => event_tx.send(AppEvent::ShowAlert(message.to_string()))?,
            },
            _ => {
                self.email.handle_event(&event);
            }
        }

        Ok(())
    }
}
