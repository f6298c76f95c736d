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

//! Form validation rules.
//!
//! Pure functions for the email field on the home page and the password pair
//! on the registration page. Each call produces a fresh [`ValidationResult`].

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Error,
    Success,
}

/// The rule a password pair failed, in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PasswordIssue {
    BothRequired,
    TooShort,
    MissingLettersOrDigits,
    Mismatch,
}

impl PasswordIssue {
    pub(crate) fn message(self) -> &'static str {
        match self {
            PasswordIssue::BothRequired => "Both passwords are required",
            PasswordIssue::TooShort => "Password must be at least 6 characters long",
            PasswordIssue::MissingLettersOrDigits => "Password must contain both letters and digits",
            PasswordIssue::Mismatch => "Passwords do not match",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidationResult {
    pub(crate) is_valid: bool,
    pub(crate) message: String,
    pub(crate) severity: Severity,
    pub(crate) issue: Option<PasswordIssue>,
}

impl ValidationResult {
    fn failed(issue: PasswordIssue) -> Self {
        Self {
            is_valid: false,
            message: issue.message().to_string(),
            severity: Severity::Error,
            issue: Some(issue),
        }
    }

    fn passed() -> Self {
        Self {
            is_valid: true,
            message: "Passwords match and meet the requirements".to_string(),
            severity: Severity::Success,
            issue: None,
        }
    }
}

/// Checks for a `local@domain.tld` shape.
///
/// Neither part may contain whitespace or `@`, and the domain must contain a
/// dot with at least one character on each side of it.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let clean = |part: &str| !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }

    // Some split of the domain must leave text on both sides of a dot.
    domain
        .match_indices('.')
        .any(|(idx, _)| idx > 0 && idx + 1 < domain.len())
}

pub(crate) fn has_letters_and_digits(password: &str) -> bool {
    let has_letters = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digits = password.chars().any(|c| c.is_ascii_digit());
    has_letters && has_digits
}

/// Validates a password and its confirmation.
///
/// Rules are checked in a fixed order and the first failure wins: both
/// present, minimum length, letters and digits, then equality.
pub(crate) fn validate_passwords(password: &str, confirm_password: &str) -> ValidationResult {
    if password.is_empty() || confirm_password.is_empty() {
        return ValidationResult::failed(PasswordIssue::BothRequired);
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::failed(PasswordIssue::TooShort);
    }

    if !has_letters_and_digits(password) {
        return ValidationResult::failed(PasswordIssue::MissingLettersOrDigits);
    }

    if password != confirm_password {
        return ValidationResult::failed(PasswordIssue::Mismatch);
    }

    ValidationResult::passed()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plain",
            "a@b",
            "@b.co",
            "a@.co",
            "a@b.",
            "a@@b.co",
            "a@b@c.co",
            "a b@c.co",
            "a@b c.co",
            "a@b.co ",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn rules_apply_in_order() {
        let issue = |p: &str, c: &str| validate_passwords(p, c).issue;

        assert_eq!(issue("", ""), Some(PasswordIssue::BothRequired));
        assert_eq!(issue("abc123", ""), Some(PasswordIssue::BothRequired));
        assert_eq!(issue("abc12", "abc12"), Some(PasswordIssue::TooShort));
        assert_eq!(issue("abc12", "zzz"), Some(PasswordIssue::TooShort));
        assert_eq!(issue("abcdef", "abcdef"), Some(PasswordIssue::MissingLettersOrDigits));
        assert_eq!(issue("123456", "654321"), Some(PasswordIssue::MissingLettersOrDigits));
        assert_eq!(issue("abc123", "xyz123"), Some(PasswordIssue::Mismatch));
        assert_eq!(issue("abc123", "abc123"), None);
    }

    #[test]
    fn success_carries_positive_message() {
        let result = validate_passwords("abc123", "abc123");

        assert!(result.is_valid);
        assert_eq!(result.severity, Severity::Success);
        assert_eq!(result.message, "Passwords match and meet the requirements");
    }

    #[test]
    fn failure_carries_rule_message() {
        let result = validate_passwords("abc123", "xyz123");

        assert!(!result.is_valid);
        assert_eq!(result.severity, Severity::Error);
        assert_eq!(result.message, PasswordIssue::Mismatch.message());
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(validate_passwords("ábč12", "ábč12").issue, Some(PasswordIssue::TooShort));
    }
}
