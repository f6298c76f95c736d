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

//! Modal alert box.
//!
//! Blocks all other input until dismissed with Enter, Esc or Space.

mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::events::{AppEvent, AppEventProcessor};

#[derive(Debug, Default)]
pub(crate) struct Alert {
    message: Option<String>,
}

impl Alert {
    pub(crate) fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub(crate) fn dismiss(&mut self) {
        self.message = None;
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl AppEventProcessor for Alert {
    fn process_event(&mut self, event: Event, _event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key) = event {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss();
            }
        }

        Ok(())
    }
}
