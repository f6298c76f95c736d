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

//! UI rendering logic for the alert box.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{components::Alert, theme::Theme};

const ALERT_WIDTH: u16 = 50;
const ALERT_HEIGHT: u16 = 7;

impl Alert {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(message) = self.message() else {
            return;
        };

        let [row] = Layout::vertical([Constraint::Length(ALERT_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(ALERT_WIDTH)])
            .flex(Flex::Center)
            .areas(row);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(" Notice ")
            .title_bottom(Line::from(" Enter to close ").alignment(Alignment::Right))
            .padding(Padding::uniform(1))
            .style(Style::default().bg(theme.background_colour));

        let text = Paragraph::new(message)
            .style(Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        f.render_widget(Clear, popup);
        f.render_widget(text, popup);
    }
}
