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

//! Registration form with live password validation.
//!
//! Registration is simulated: a valid submission is logged without the
//! password and the form is cleared.

mod event;
mod render;

use tui_input::Input;

use crate::model::{
    flags::{Flags, MessageBox, apply_input_state},
    validation::validate_passwords,
};

pub(crate) const REGISTERED_MESSAGE: &str = "Registration successful!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RegisterField {
    Email,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub(crate) fn next(self) -> Self {
        match self {
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::ConfirmPassword,
            RegisterField::ConfirmPassword => RegisterField::Email,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            RegisterField::Email => RegisterField::ConfirmPassword,
            RegisterField::Password => RegisterField::Email,
            RegisterField::ConfirmPassword => RegisterField::Password,
        }
    }
}

/// Data captured by a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Registration {
    pub(crate) email: String,
}

pub(crate) struct RegisterView {
    pub(crate) email: Input,
    pub(crate) password: Input,
    pub(crate) confirm_password: Input,
    pub(crate) focus: RegisterField,
    pub(crate) password_flags: Flags,
    pub(crate) confirm_flags: Flags,
    pub(crate) message: MessageBox,
}

impl RegisterView {
    pub(crate) fn new() -> Self {
        Self {
            email: Input::default(),
            password: Input::default(),
            confirm_password: Input::default(),
            focus: RegisterField::Email,
            password_flags: Flags::empty(),
            confirm_flags: Flags::empty(),
            message: MessageBox::default(),
        }
    }

    /// Resets the form, pre-filling the email handed over by the home page.
    pub(crate) fn open(&mut self, email: Option<String>) {
        *self = Self::new();
        if let Some(email) = email {
            self.email = Input::new(email);
            self.focus = RegisterField::Password;
        }
    }

    pub(crate) fn focused_input(&mut self) -> &mut Input {
        match self.focus {
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Re-validates the password pair after either field changed.
    pub(crate) fn on_password_input(&mut self) {
        let password = self.password.value();
        let confirm_password = self.confirm_password.value();
        let result = validate_passwords(password, confirm_password);

        apply_input_state(&mut self.password_flags, result.is_valid, password);
        apply_input_state(&mut self.confirm_flags, result.is_valid, confirm_password);
        self.message.show(&result);
    }

    /// Submits the form.
    ///
    /// A failing password pair returns its message and leaves the form as
    /// is; a valid one clears the form and returns what was registered.
    pub(crate) fn submit(&mut self) -> Result<Registration, String> {
        let result = validate_passwords(self.password.value(), self.confirm_password.value());
        if !result.is_valid {
            return Err(result.message);
        }

        let registration = Registration {
            email: self.email.value().trim().to_string(),
        };
        *self = Self::new();

        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::validation::PasswordIssue;

    fn view_with(password: &str, confirm: &str) -> RegisterView {
        let mut view = RegisterView::new();
        view.password = Input::new(password.into());
        view.confirm_password = Input::new(confirm.into());
        view
    }

    #[test]
    fn open_prefills_email_and_focuses_password() {
        let mut view = view_with("abc123", "abc123");

        view.open(Some("a@b.co".into()));

        assert_eq!(view.email.value(), "a@b.co");
        assert_eq!(view.password.value(), "");
        assert_eq!(view.focus, RegisterField::Password);

        view.open(None);
        assert_eq!(view.email.value(), "");
        assert_eq!(view.focus, RegisterField::Email);
    }

    #[test]
    fn live_validation_marks_both_fields() {
        let mut view = view_with("abc123", "xyz123");

        view.on_password_input();

        assert_eq!(view.password_flags, Flags::ERROR_STATE);
        assert_eq!(view.confirm_flags, Flags::ERROR_STATE);
        assert_eq!(view.message.text, PasswordIssue::Mismatch.message());
        assert!(view.message.flags.contains(Flags::VISIBLE | Flags::ERROR));
    }

    #[test]
    fn live_validation_leaves_empty_field_unmarked() {
        let mut view = view_with("abc123", "");

        view.on_password_input();

        assert_eq!(view.password_flags, Flags::ERROR_STATE);
        assert_eq!(view.confirm_flags, Flags::empty());
        assert_eq!(view.message.text, PasswordIssue::BothRequired.message());
    }

    #[test]
    fn matching_passwords_show_success() {
        let mut view = view_with("abc123", "abc123");

        view.on_password_input();

        assert_eq!(view.password_flags, Flags::SUCCESS_STATE);
        assert_eq!(view.confirm_flags, Flags::SUCCESS_STATE);
        assert!(view.message.flags.contains(Flags::SUCCESS));
    }

    #[test]
    fn invalid_submit_keeps_form() {
        let mut view = view_with("abcdef", "abcdef");

        let err = view.submit().unwrap_err();

        assert_eq!(err, PasswordIssue::MissingLettersOrDigits.message());
        assert_eq!(view.password.value(), "abcdef");
    }

    #[test]
    fn valid_submit_discards_form() {
        let mut view = view_with("abc123", "abc123");
        view.email = Input::new(" jo@example.com".into());

        let registration = view.submit().unwrap();

        assert_eq!(registration, Registration { email: "jo@example.com".into() });
        assert_eq!(view.password.value(), "");
        assert_eq!(view.confirm_password.value(), "");
    }

    #[test]
    fn focus_cycles() {
        assert_eq!(RegisterField::Email.next().next().next(), RegisterField::Email);
        assert_eq!(RegisterField::Email.previous(), RegisterField::ConfirmPassword);
    }
}
