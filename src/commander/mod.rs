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

//! Command-line input logic and state management.
//!
//! This module implements a small command-line component: `:` opens it, text
//! is edited with a managed input, and Enter dispatches the matching
//! application event.
//!
//! | Command              | Effect                               |
//! |----------------------|--------------------------------------|
//! | `open <location>`    | navigate to any location             |
//! | `home`, `register`, `movies` | navigate to that page        |
//! | `category <name>`    | search the movies page for `name`    |
//! | `q`                  | quit                                 |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use log::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::AppEvent,
    model::location::{Location, Page},
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a key event, returning whether it was consumed.
    ///
    /// While a text field has focus the command line cannot be opened, so
    /// `:` still reaches the field.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        text_entry: bool,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') && !text_entry {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if let Some(event) = parse_command(&buffer) {
                    event_tx.send(event)?;
                } else if !buffer.is_empty() {
                    event_tx.send(AppEvent::ShowAlert(format!("Unknown command: {}", buffer)))?;
                }
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

fn parse_command(buffer: &str) -> Option<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();
    debug!("Command: {:?}", parts);

    let event = match parts.as_slice() {
        ["q"] | ["quit"] => AppEvent::ExitApplication,

        ["open", location] => AppEvent::Navigate(Location::parse(location)),

        ["home"] => AppEvent::Navigate(Page::Home.location()),
        ["register"] => AppEvent::Navigate(Page::Register.location()),
        ["movies"] => AppEvent::Navigate(Page::Movies.location()),

        ["category", name_parts @ ..] if !name_parts.is_empty() => {
            AppEvent::SelectCategory(name_parts.join(" "))
        }

        _ => return None,
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_navigation_commands() {
        let Some(AppEvent::Navigate(location)) = parse_command("open register.html?email=a%40b.co") else {
            panic!("expected navigation");
        };
        assert_eq!(location.page(), Page::Register);
        assert_eq!(location.email().as_deref(), Some("a@b.co"));

        assert!(matches!(parse_command("movies"), Some(AppEvent::Navigate(l)) if l.page() == Page::Movies));
        assert!(matches!(parse_command("q"), Some(AppEvent::ExitApplication)));
    }

    #[test]
    fn joins_multi_word_categories() {
        assert!(matches!(
            parse_command("category science fiction"),
            Some(AppEvent::SelectCategory(name)) if name == "science fiction"
        ));
        assert!(parse_command("category").is_none());
        assert!(parse_command("launch").is_none());
    }

    #[test]
    fn colon_is_ignored_during_text_entry() {
        let (tx, _rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char(':')), true, &tx).unwrap());
        assert!(!commander.active());

        assert!(commander.handle_event(&key(KeyCode::Char(':')), false, &tx).unwrap());
        assert!(commander.active());
    }

    #[test]
    fn enter_dispatches_and_closes() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), false, &tx).unwrap();
        for c in "q".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), false, &tx).unwrap();
        }
        commander.handle_event(&key(KeyCode::Enter), false, &tx).unwrap();

        assert!(!commander.active());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }
}
