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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), background worker results (searches,
//! poster loads) and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and hands blocking work to the task workers.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! All state is owned by the thread running [`process_events`], so no locking
//! is needed.

mod handlers;
mod key_handlers;
use handlers::*;
use key_handlers::*;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyEvent};
use log::error;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{SearchHit, location::Location},
    render::draw,
    search::SearchError,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Navigate(Location),

    SelectCategory(String),
    SearchCompleted {
        generation: u64,
        result: Result<Vec<SearchHit>, SearchError>,
    },
    PosterFailed {
        batch: u64,
        index: usize,
    },

    ShowAlert(String),

    Tick,
    Resize,

    ExitApplication,

    Error(String),
    FatalError(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        let needs_draw = !matches!(event, AppEvent::Tick) || app.is_animating();

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Navigate(location) => handle_navigate(app, location)?,
            AppEvent::SelectCategory(category) => handle_select_category(app, category)?,
            AppEvent::SearchCompleted { generation, result } => {
                handle_search_completed(app, generation, result)
            }
            AppEvent::PosterFailed { batch, index } => handle_poster_failed(app, batch, index),
            AppEvent::ShowAlert(message) => handle_show_alert(app, message),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => {
                error!("Fatal: {}", message);
                return Err(anyhow!(message));
            }
            AppEvent::Tick => handle_tick(app),
            AppEvent::Resize => {}
            AppEvent::ExitApplication => {}
        }

        if needs_draw {
            terminal.draw(|f| draw(f, app))?;
        }
    }

    Ok(())
}
