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

//! Render the page header: brand, page links and current location.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, model::location::Page};

const BRAND: &str = " FLIXVIEW ";

const PAGES: [(Page, &str); 3] = [(Page::Home, "F1"), (Page::Register, "F2"), (Page::Movies, "F3")];

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [links, location] = Layout::horizontal([Constraint::Min(0), Constraint::Length(40)]).areas(inner);

    let mut spans = vec![Span::styled(
        BRAND,
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
    )];
    for (page, key) in PAGES {
        let style = if page == app.page {
            Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.muted_colour)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{} {}", key, page.title()), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), links);

    f.render_widget(
        Paragraph::new(crate::util::format::truncate(&app.location.to_string(), location.width as usize))
            .style(Style::default().fg(theme.muted_colour))
            .right_aligned(),
        location,
    );
}
