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

//! Landing page: collects an email and hands it to the registration page.

mod event;
mod render;

use tui_input::Input;

use crate::model::{flags::Flags, location::Location, validation::is_valid_email};

pub(crate) const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

pub(crate) struct HomeView {
    pub(crate) email: Input,
    pub(crate) email_flags: Flags,
}

impl HomeView {
    pub(crate) fn new() -> Self {
        Self {
            email: Input::default(),
            email_flags: Flags::empty(),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.email.reset();
        self.email_flags = Flags::empty();
    }

    /// Validates the entered email.
    ///
    /// On success the error state is cleared and the registration location
    /// carrying the email is returned.
    pub(crate) fn submit(&mut self) -> Result<Location, &'static str> {
        let email = self.email.value().trim();

        if !is_valid_email(email) {
            self.email_flags.add(Flags::ERROR_STATE);
            return Err(INVALID_EMAIL_MESSAGE);
        }

        self.email_flags.discard(Flags::ERROR_STATE);
        Ok(Location::register_with_email(email))
    }
}
