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

//! Keyboard routing.
//!
//! Keys go to the first interested party: an open alert swallows everything,
//! then the command line, then global shortcuts, then the current page.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App,
    events::{AppEvent, AppEventProcessor},
    model::location::Page,
};

const PAGE_SCROLL_ROWS: i32 = 10;

/// Maps keyboard input to application actions.
///
/// # Errors
///
/// Returns an error if an event or task cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    if app.alert.is_visible() {
        return app.alert.process_event(event, &app.event_tx);
    }

    let text_entry = app.page != Page::Movies;
    if app.commander.handle_event(&event, text_entry, &app.event_tx)? {
        return Ok(());
    }

    if process_global_key_event(app, key)? {
        return Ok(());
    }

    match app.page {
        Page::Home => app.home_view.process_event(event, &app.event_tx)?,
        Page::Register => app.register_view.process_event(event, &app.event_tx)?,
        Page::Movies => {
            if !process_scroll_key_event(app, key) {
                app.movies_view.process_event(event, &app.event_tx)?;
            }
        }
    }

    app.back_to_top.on_scroll(app.scroll.offset());

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let target = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(true);
        }
        (KeyCode::F(1), _) => Page::Home,
        (KeyCode::F(2), _) => Page::Register,
        (KeyCode::F(3), _) => Page::Movies,
        _ => return Ok(false),
    };

    app.event_tx.send(AppEvent::Navigate(target.location()))?;
    Ok(true)
}

fn process_scroll_key_event(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll.scroll_by(-1),
        KeyCode::PageDown => app.scroll.scroll_by(PAGE_SCROLL_ROWS),
        KeyCode::PageUp => app.scroll.scroll_by(-PAGE_SCROLL_ROWS),

        // Back to top only works while the affordance is showing.
        KeyCode::Char('t') | KeyCode::Home if app.back_to_top.is_visible() => {
            app.scroll.scroll_to_top_smooth()
        }

        _ => return false,
    }

    true
}
