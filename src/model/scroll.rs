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

//! Scroll position and the "back to top" affordance.
//!
//! Offsets are measured in pixel-equivalent units so that the affordance
//! threshold does not depend on the terminal size. One terminal row counts as
//! [`UNITS_PER_ROW`] units.

use crate::model::flags::Flags;

pub(crate) const UNITS_PER_ROW: u32 = 20;

pub(crate) const DEFAULT_SCROLL_THRESHOLD: u32 = 100;

/// Shows the back-to-top affordance once the view has scrolled past a
/// threshold.
#[derive(Debug, Clone)]
pub(crate) struct ScrollAffordance {
    threshold: u32,
    pub(crate) flags: Flags,
}

impl ScrollAffordance {
    pub(crate) fn new(threshold: u32) -> Self {
        Self {
            threshold,
            flags: Flags::empty(),
        }
    }

    /// Updates visibility for a new offset, returning whether it changed.
    pub(crate) fn on_scroll(&mut self, offset: u32) -> bool {
        self.flags.assign(Flags::VISIBLE, offset > self.threshold)
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.flags.contains(Flags::VISIBLE)
    }
}

impl Default for ScrollAffordance {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

/// Vertical scroll state of a view, in rows, with optional smooth scrolling
/// back to the top.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScrollState {
    rows: u16,
    max_rows: u16,
    animating: bool,
}

impl ScrollState {
    pub(crate) fn rows(&self) -> u16 {
        self.rows
    }

    pub(crate) fn offset(&self) -> u32 {
        u32::from(self.rows) * UNITS_PER_ROW
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animating
    }

    /// Records how far the content can scroll, clamping the current position.
    pub(crate) fn set_max_rows(&mut self, max_rows: u16) {
        self.max_rows = max_rows;
        self.rows = self.rows.min(max_rows);
    }

    pub(crate) fn scroll_by(&mut self, delta: i32) {
        self.animating = false;
        let rows = (i32::from(self.rows) + delta).clamp(0, i32::from(self.max_rows));
        self.rows = rows as u16;
    }

    pub(crate) fn reset(&mut self) {
        self.rows = 0;
        self.animating = false;
    }

    pub(crate) fn scroll_to_top_smooth(&mut self) {
        self.animating = self.rows > 0;
    }

    /// Advances a smooth scroll by one step, halving the remaining distance.
    ///
    /// Returns whether the position moved.
    pub(crate) fn step(&mut self) -> bool {
        if !self.animating {
            return false;
        }

        let distance = self.rows / 2;
        self.rows = distance.min(self.rows.saturating_sub(1));
        if self.rows == 0 {
            self.animating = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn affordance_toggles_on_threshold() {
        let mut affordance = ScrollAffordance::default();

        assert!(!affordance.on_scroll(100));
        assert!(!affordance.is_visible());

        assert!(affordance.on_scroll(101));
        assert!(affordance.is_visible());

        assert!(affordance.on_scroll(0));
        assert!(!affordance.is_visible());
    }

    #[test]
    fn affordance_is_idempotent() {
        let mut affordance = ScrollAffordance::default();

        assert!(affordance.on_scroll(240));
        assert!(!affordance.on_scroll(240));
        assert!(!affordance.on_scroll(500));
        assert!(affordance.is_visible());
    }

    #[test]
    fn smooth_scroll_reaches_top() {
        let mut scroll = ScrollState::default();
        scroll.set_max_rows(40);
        scroll.scroll_by(30);
        assert_eq!(scroll.offset(), 600);

        scroll.scroll_to_top_smooth();
        let mut positions = vec![];
        while scroll.step() {
            positions.push(scroll.rows());
        }

        assert_eq!(positions, vec![15, 7, 3, 1, 0]);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut scroll = ScrollState::default();
        scroll.set_max_rows(3);

        scroll.scroll_by(-2);
        assert_eq!(scroll.rows(), 0);

        scroll.scroll_by(10);
        assert_eq!(scroll.rows(), 3);

        scroll.set_max_rows(1);
        assert_eq!(scroll.rows(), 1);
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let mut scroll = ScrollState::default();
        scroll.set_max_rows(10);
        scroll.scroll_by(8);

        scroll.scroll_to_top_smooth();
        assert!(scroll.step());
        scroll.scroll_by(1);

        assert!(!scroll.is_animating());
        assert!(!scroll.step());
    }
}
