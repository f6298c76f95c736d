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

//! Presentation state flags.
//!
//! Flags are the only channel between page logic and styling: the logic sets
//! and clears them, the renderer reads them. Every mutation reports whether it
//! actually changed anything, so repeated identical updates are observable as
//! no-ops.

use bitflags::bitflags;

use crate::model::validation::{Severity, ValidationResult};

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub(crate) struct Flags: u8 {
        const VISIBLE       = 1 << 0;
        const ERROR_STATE   = 1 << 1;
        const SUCCESS_STATE = 1 << 2;
        const FADE_IN       = 1 << 3;
        const ERROR         = 1 << 4;
        const SUCCESS       = 1 << 5;
    }
}

impl Flags {
    pub(crate) fn add(&mut self, flag: Flags) -> bool {
        let before = *self;
        self.insert(flag);
        before != *self
    }

    pub(crate) fn discard(&mut self, flag: Flags) -> bool {
        let before = *self;
        self.remove(flag);
        before != *self
    }

    pub(crate) fn assign(&mut self, flag: Flags, on: bool) -> bool {
        if on { self.add(flag) } else { self.discard(flag) }
    }
}

/// Marks an input field as valid or invalid.
///
/// An empty field carries neither state.
pub(crate) fn apply_input_state(flags: &mut Flags, is_valid: bool, value: &str) -> bool {
    if value.is_empty() {
        return flags.discard(Flags::ERROR_STATE | Flags::SUCCESS_STATE);
    }

    let (on, off) = if is_valid {
        (Flags::SUCCESS_STATE, Flags::ERROR_STATE)
    } else {
        (Flags::ERROR_STATE, Flags::SUCCESS_STATE)
    };

    let removed = flags.discard(off);
    let added = flags.add(on);
    removed || added
}

/// An inline validation message shown under a form field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct MessageBox {
    pub(crate) text: String,
    pub(crate) flags: Flags,
}

impl MessageBox {
    pub(crate) fn show(&mut self, result: &ValidationResult) {
        if result.message.is_empty() {
            self.flags.discard(Flags::VISIBLE);
            return;
        }

        self.text.clone_from(&result.message);
        self.flags.discard(Flags::ERROR | Flags::SUCCESS);
        self.flags.add(match result.severity {
            Severity::Error => Flags::ERROR,
            Severity::Success => Flags::SUCCESS,
        });
        self.flags.add(Flags::VISIBLE);
    }

    pub(crate) fn hide(&mut self) {
        self.flags = Flags::empty();
        self.text.clear();
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.flags.contains(Flags::VISIBLE)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::validation::validate_passwords;

    #[test]
    fn repeated_add_changes_once() {
        let mut flags = Flags::empty();

        assert!(flags.add(Flags::VISIBLE));
        assert!(!flags.add(Flags::VISIBLE));
        assert!(flags.discard(Flags::VISIBLE));
        assert!(!flags.discard(Flags::VISIBLE));
    }

    #[test]
    fn input_state_is_exclusive() {
        let mut flags = Flags::empty();

        assert!(apply_input_state(&mut flags, false, "abc"));
        assert_eq!(flags, Flags::ERROR_STATE);

        assert!(apply_input_state(&mut flags, true, "abc123"));
        assert_eq!(flags, Flags::SUCCESS_STATE);
        assert!(!apply_input_state(&mut flags, true, "abc123"));
    }

    #[test]
    fn empty_input_clears_state() {
        let mut flags = Flags::ERROR_STATE | Flags::VISIBLE;

        assert!(apply_input_state(&mut flags, false, ""));
        assert_eq!(flags, Flags::VISIBLE);
    }

    #[test]
    fn message_box_swaps_severity() {
        let mut message = MessageBox::default();

        message.show(&validate_passwords("abc", "abc"));
        assert!(message.is_visible());
        assert!(message.flags.contains(Flags::ERROR));

        message.show(&validate_passwords("abc123", "abc123"));
        assert!(message.flags.contains(Flags::SUCCESS));
        assert!(!message.flags.contains(Flags::ERROR));
        assert_eq!(message.text, "Passwords match and meet the requirements");

        message.hide();
        assert!(!message.is_visible());
    }
}
