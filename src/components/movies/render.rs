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

//! UI rendering logic for the movies page.
//!
//! Cards are laid out left to right in as many columns as fit, and the grid
//! scrolls vertically by whole rows.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Tabs},
};

use crate::{
    components::MoviesView,
    model::{flags::Flags, grid::ShowCard, movies::LoadState, scroll::ScrollState},
    theme::Theme,
    util::format::{short_url, truncate},
};

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 5;

impl MoviesView {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, scroll: &mut ScrollState, theme: &Theme) {
        let [selector, status, grid] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        self.draw_selector(f, selector, theme);
        self.draw_status(f, status, theme);

        let cards = self.movies.grid.cards();
        if cards.is_empty() {
            scroll.set_max_rows(0);
            self.draw_placeholder_panel(f, grid, theme);
        } else {
            draw_grid(f, grid, cards, self.movies.grid.selected(), scroll, theme);
        }
    }

    fn draw_selector(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let tabs = Tabs::new(self.categories.iter().map(String::as_str))
            .select(self.selected)
            .style(Style::default().fg(theme.muted_colour))
            .highlight_style(
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.border_colour)),
            );
        f.render_widget(tabs, area);
    }

    fn draw_status(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        if self.movies.state() != LoadState::Populated {
            return;
        }

        let count = format!(" {} shows", self.movies.grid.cards().len());
        f.render_widget(
            Paragraph::new(count).style(Style::default().fg(theme.muted_colour)),
            area,
        );
    }

    /// Loading indicator and "no results" panel, shown over an empty grid.
    fn draw_placeholder_panel(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        if self.movies.loading.contains(Flags::VISIBLE) {
            f.render_widget(
                Paragraph::new("Loading…")
                    .style(Style::default().fg(theme.accent_colour))
                    .alignment(Alignment::Center),
                row,
            );
        } else if self.movies.no_results.flags.contains(Flags::VISIBLE) {
            let colour = if self.movies.state() == LoadState::Errored {
                theme.error_colour
            } else {
                theme.muted_colour
            };
            f.render_widget(
                Paragraph::new(self.movies.no_results.message.as_str())
                    .style(Style::default().fg(colour))
                    .alignment(Alignment::Center),
                row,
            );
        }
    }
}

fn draw_grid(
    f: &mut Frame,
    area: Rect,
    cards: &[ShowCard],
    selected: Option<usize>,
    scroll: &mut ScrollState,
    theme: &Theme,
) {
    let columns = (area.width / CARD_WIDTH).max(1) as usize;
    let rows = cards.len().div_ceil(columns) as u16;
    let content_height = rows.saturating_mul(CARD_HEIGHT);
    scroll.set_max_rows(content_height.saturating_sub(area.height));

    let top = scroll.rows();

    for (idx, card) in cards.iter().enumerate() {
        let card_top = (idx / columns) as u16 * CARD_HEIGHT;

        // Cards cut off at the top are skipped, cards cut off at the bottom
        // are drawn clipped.
        if card_top < top || card_top >= top + area.height {
            continue;
        }

        let y = area.y + (card_top - top);
        let height = CARD_HEIGHT.min(area.bottom() - y);
        let x = area.x + (idx % columns) as u16 * CARD_WIDTH;
        let width = CARD_WIDTH.min(area.right().saturating_sub(x));
        if width == 0 {
            continue;
        }

        draw_card(f, Rect::new(x, y, width, height), card, selected == Some(idx), theme);
    }
}

fn draw_card(f: &mut Frame, area: Rect, card: &ShowCard, selected: bool, theme: &Theme) {
    let border_colour = if selected {
        theme.text_colour
    } else if card.flags.contains(Flags::FADE_IN) {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    let width = area.width.saturating_sub(4) as usize;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected { BorderType::Thick } else { BorderType::Plain })
        .border_style(Style::default().fg(border_colour))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" {} ", truncate(&card.name, width.saturating_sub(2))),
            Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD),
        ));

    let poster = if card.poster.is_placeholder() {
        Line::from(Span::styled("No Image", Style::default().fg(theme.muted_colour)))
    } else {
        Line::from(Span::styled(
            truncate(short_url(&card.poster.src), width),
            Style::default().fg(theme.text_colour),
        ))
    };

    let text = vec![
        Line::from(Span::styled("▣ poster", Style::default().fg(theme.muted_colour))),
        poster,
    ];

    f.render_widget(Paragraph::new(text).block(block), area);
}
