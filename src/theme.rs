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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the application's colour palette and converts colours
//! between Ratatui's representation and the hexadecimal strings used for
//! terminal emulator styling.

use ratatui::style::{Color, Style};

use crate::model::flags::Flags;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) success_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(20, 20, 20),
            accent_colour: Color::Rgb(229, 9, 20),
            border_colour: Color::Rgb(102, 102, 102),
            text_colour: Color::Rgb(255, 255, 255),
            muted_colour: Color::Rgb(140, 140, 140),
            error_colour: Color::Rgb(232, 124, 3),
            success_colour: Color::Rgb(46, 184, 92),
            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg: Color::Rgb(45, 45, 45),
        }
    }

    /// Border style of a form input for its validation flags.
    pub(crate) fn input_border(&self, flags: Flags, focused: bool) -> Style {
        let colour = if flags.contains(Flags::ERROR_STATE) {
            self.error_colour
        } else if flags.contains(Flags::SUCCESS_STATE) {
            self.success_colour
        } else if focused {
            self.text_colour
        } else {
            self.border_colour
        };
        Style::default().fg(colour)
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Returns `None` for anything but an `Rgb` colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
