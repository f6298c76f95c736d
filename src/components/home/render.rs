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

//! UI rendering logic for the home page.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{components::HomeView, theme::Theme};

const FORM_WIDTH: u16 = 60;

impl HomeView {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [headline, tagline, prompt, input, hint] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

        f.render_widget(
            Paragraph::new("Unlimited movies, TV shows, and more")
                .style(Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            headline,
        );
        f.render_widget(
            Paragraph::new("Watch anywhere. Cancel anytime.")
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center),
            tagline,
        );
        f.render_widget(
            Paragraph::new("Ready to watch? Enter your email to create or restart your membership.")
                .style(Style::default().fg(theme.text_colour))
                .alignment(Alignment::Center),
            prompt,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Email address ")
            .border_style(theme.input_border(self.email_flags, true));
        let inner = block.inner(input);

        let scroll = self.email.visual_scroll(inner.width.max(1) as usize - 1);
        f.render_widget(
            Paragraph::new(self.email.value())
                .style(Style::default().fg(theme.text_colour))
                .scroll((0, scroll as u16))
                .block(block),
            input,
        );
        let cursor = self.email.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position((inner.x + cursor, inner.y));

        f.render_widget(
            Paragraph::new(Line::from("Enter: Get started")).style(Style::default().fg(theme.muted_colour)).alignment(Alignment::Center),
            hint,
        );
    }
}
