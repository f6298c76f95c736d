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

//! User interface rendering logic.
//!
//! This module translates the [`App`] state into widgets using the `ratatui`
//! framework. It handles the frame layout shared by all pages and delegates
//! the page body to the current view.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event.

mod commander;
mod header;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    model::location::Page,
    render::{commander::draw_commander, header::draw_header},
    theme::Theme,
};

const BACK_TO_TOP_LABEL: &str = " ↑ Top (t) ";

/// Renders the user interface to the terminal frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing views to
///   record layout-dependent state such as scroll limits.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: header, main, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    match app.page {
        Page::Home => {
            app.scroll.set_max_rows(0);
            app.home_view.draw(f, outer[1], &app.theme);
        }
        Page::Register => {
            app.scroll.set_max_rows(0);
            app.register_view.draw(f, outer[1], &app.theme);
        }
        Page::Movies => app.movies_view.draw(f, outer[1], &mut app.scroll, &app.theme),
    }

    // Drawing may clamp the scroll position, e.g. after a resize.
    app.back_to_top.on_scroll(app.scroll.offset());

    if app.back_to_top.is_visible() {
        draw_back_to_top(f, outer[1], &app.theme);
    }

    draw_commander(f, outer[2], app);

    app.alert.draw(f, area, &app.theme);
}

fn draw_back_to_top(f: &mut Frame, area: Rect, theme: &Theme) {
    let width = BACK_TO_TOP_LABEL.chars().count() as u16;
    if area.width < width || area.height == 0 {
        return;
    }

    let button = Rect::new(area.right() - width, area.bottom() - 1, width, 1);
    f.render_widget(
        Paragraph::new(BACK_TO_TOP_LABEL).style(
            Style::default()
                .fg(theme.text_colour)
                .bg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        button,
    );
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn clamped_scroll_hides_back_to_top() {
        let (search_tx, _search_rx) = mpsc::channel();
        let (poster_tx, _poster_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), search_tx, poster_tx);
        app.page = Page::Movies;

        app.scroll.set_max_rows(40);
        app.scroll.scroll_by(10);
        app.back_to_top.on_scroll(app.scroll.offset());
        assert!(app.back_to_top.is_visible());

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        assert_eq!(app.scroll.offset(), 0);
        assert!(!app.back_to_top.is_visible());
    }
}
