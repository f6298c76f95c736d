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

//! Event routing for the registration page.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use log::info;
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{RegisterView, register::{REGISTERED_MESSAGE, RegisterField}},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for RegisterView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),

            KeyCode::Enter => match self.submit() {
                Ok(registration) => {
                    info!("Registered {}", registration.email);
                    event_tx.send(AppEvent::ShowAlert(REGISTERED_MESSAGE.to_string()))?;
                }
                Err(message) => event_tx.send(AppEvent::ShowAlert(message))?,
            },

            _ => {
                let changed = self.focused_input().handle_event(&event).is_some_and(|c| c.value);
                if changed && self.focus != RegisterField::Email {
                    self.on_password_input();
                }
            }
        }

        Ok(())
    }
}
