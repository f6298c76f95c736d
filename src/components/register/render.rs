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

//! UI rendering logic for the registration page.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::Input;

use crate::{
    components::{RegisterView, register::RegisterField},
    model::flags::Flags,
    theme::Theme,
    util::format::mask,
};

const FORM_WIDTH: u16 = 50;

impl RegisterView {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [title, email, password, confirm, message, hint] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

        f.render_widget(
            Paragraph::new("Create your account")
                .style(Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD)),
            title,
        );

        self.draw_input(f, email, theme, RegisterField::Email, Flags::empty());
        self.draw_input(f, password, theme, RegisterField::Password, self.password_flags);
        self.draw_input(f, confirm, theme, RegisterField::ConfirmPassword, self.confirm_flags);

        if self.message.is_visible() {
            let colour = if self.message.flags.contains(Flags::SUCCESS) {
                theme.success_colour
            } else {
                theme.error_colour
            };
            f.render_widget(
                Paragraph::new(self.message.text.as_str()).style(Style::default().fg(colour)),
                message,
            );
        }

        f.render_widget(
            Paragraph::new("Tab: next field  Enter: sign up")
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center),
            hint,
        );
    }

    fn draw_input(&self, f: &mut Frame, area: Rect, theme: &Theme, field: RegisterField, flags: Flags) {
        let (label, input, masked): (&str, &Input, bool) = match field {
            RegisterField::Email => (" Email ", &self.email, false),
            RegisterField::Password => (" Password ", &self.password, true),
            RegisterField::ConfirmPassword => (" Confirm password ", &self.confirm_password, true),
        };
        let focused = self.focus == field;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(theme.input_border(flags, focused));
        let inner = block.inner(area);

        let text = if masked { mask(input.value()) } else { input.value().to_string() };
        let scroll = input.visual_scroll(inner.width.max(1) as usize - 1);

        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(theme.text_colour))
                .scroll((0, scroll as u16))
                .block(block),
            area,
        );

        if focused {
            let cursor = input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + cursor, inner.y));
        }
    }
}
