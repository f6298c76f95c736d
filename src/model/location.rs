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

//! Page detection and navigation targets.
//!
//! A [`Location`] is the textual address of a page, such as
//! `register.html?email=a%40b.co`. The path decides which [`Page`] is shown
//! and the query carries parameters handed from one page to the next.

use std::borrow::Cow;

const REGISTER_PATH: &str = "register.html";
const MOVIES_PATH: &str = "movies.html";
const HOME_PATH: &str = "index.html";

const EMAIL_PARAM: &str = "email";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Home,
    Register,
    Movies,
}

impl Page {
    /// Decides which page a path belongs to.
    ///
    /// Matching is by substring, registration first, and anything that is
    /// not recognised is the home page.
    pub(crate) fn detect(path: &str) -> Self {
        if path.contains(REGISTER_PATH) {
            Page::Register
        } else if path.contains(MOVIES_PATH) {
            Page::Movies
        } else {
            Page::Home
        }
    }

    pub(crate) fn location(self) -> Location {
        match self {
            Page::Home => Location::parse(HOME_PATH),
            Page::Register => Location::parse(REGISTER_PATH),
            Page::Movies => Location::parse(MOVIES_PATH),
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Register => "Register",
            Page::Movies => "Movies",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Location {
    path: String,
    query: Option<String>,
}

impl Location {
    pub(crate) fn parse(text: &str) -> Self {
        let text = text.trim();
        let text = text.split_once('#').map_or(text, |(before, _)| before);

        match text.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                query: Some(query.to_string()).filter(|q| !q.is_empty()),
            },
            None => Self {
                path: text.to_string(),
                query: None,
            },
        }
    }

    /// The registration page with the email handed over from the home page.
    pub(crate) fn register_with_email(email: &str) -> Self {
        Self {
            path: REGISTER_PATH.to_string(),
            query: Some(format!("{}={}", EMAIL_PARAM, urlencoding::encode(email))),
        }
    }

    pub(crate) fn page(&self) -> Page {
        Page::detect(&self.path)
    }

    /// Returns the decoded value of the first query parameter called `name`.
    ///
    /// Values that are not valid percent-encoded UTF-8 are treated as absent.
    pub(crate) fn query_param(&self, name: &str) -> Option<String> {
        let query = self.query.as_deref()?;

        query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key != name {
                return None;
            }

            let value = value.replace('+', " ");
            urlencoding::decode(&value).ok().map(Cow::into_owned)
        })
    }

    pub(crate) fn email(&self) -> Option<String> {
        self.query_param(EMAIL_PARAM).filter(|email| !email.is_empty())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.query {
            Some(query) => write!(f, "{}?{}", self.path, query),
            None => f.write_str(&self.path),
        }
    }
}
