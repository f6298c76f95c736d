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

//! Movies page state machine.
//!
//! Every category change starts a new load, tagged with a request
//! generation. Only the completion carrying the latest generation is applied;
//! anything older is a stale response and is dropped.
//!
//! ```text
//! Idle ──begin_load──▶ Loading ──finish_load──▶ Populated | Empty | Errored
//!                        ▲                                   │
//!                        └──────────── begin_load ───────────┘
//! ```

use std::time::{Duration, Instant};

use log::{debug, error, warn};

use crate::{
    model::{
        SearchHit,
        flags::Flags,
        grid::{AppendedCard, ShowGrid},
    },
    search::SearchError,
};

pub(crate) const NO_RESULTS_MESSAGE: &str = "No shows found.";
pub(crate) const LOAD_FAILED_MESSAGE: &str = "Failed to load shows. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadState {
    Idle,
    Loading,
    Populated,
    Empty,
    Errored,
}

/// A search the caller has to run on behalf of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchTicket {
    pub(crate) generation: u64,
    pub(crate) query: String,
}

/// The "no results" panel, which also shows load failures.
#[derive(Debug, Clone)]
pub(crate) struct NoResults {
    pub(crate) message: String,
    pub(crate) flags: Flags,
}

impl Default for NoResults {
    fn default() -> Self {
        Self {
            message: NO_RESULTS_MESSAGE.to_string(),
            flags: Flags::empty(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Movies {
    state: LoadState,
    generation: u64,
    placeholder: String,
    stagger: Duration,
    pub(crate) grid: ShowGrid,
    pub(crate) loading: Flags,
    pub(crate) no_results: NoResults,
}

impl Movies {
    pub(crate) fn new(placeholder: impl Into<String>, stagger: Duration) -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
            placeholder: placeholder.into(),
            stagger,
            grid: ShowGrid::new(),
            loading: Flags::empty(),
            no_results: NoResults::default(),
        }
    }

    pub(crate) fn state(&self) -> LoadState {
        self.state
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading.contains(Flags::VISIBLE)
    }

    /// Enters the loading state for `category`.
    ///
    /// The grid is cleared, which also cancels any reveal still running for
    /// the previous results.
    pub(crate) fn begin_load(&mut self, category: &str) -> SearchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;

        self.grid.clear();
        self.loading.add(Flags::VISIBLE);
        self.no_results = NoResults::default();

        SearchTicket {
            generation: self.generation,
            query: category.to_string(),
        }
    }

    /// Applies the outcome of a search.
    ///
    /// Returns `false` when the completion belongs to an earlier request and
    /// was discarded.
    pub(crate) fn finish_load(
        &mut self,
        generation: u64,
        result: Result<Vec<SearchHit>, SearchError>,
        now: Instant,
    ) -> bool {
        if generation != self.generation {
            debug!(
                "Discarding stale search result (generation {} < {})",
                generation, self.generation
            );
            return false;
        }

        self.loading.discard(Flags::VISIBLE);

        match result {
            Ok(hits) if hits.is_empty() => {
                self.state = LoadState::Empty;
                self.no_results.flags.add(Flags::VISIBLE);
            }
            Ok(hits) => {
                self.state = LoadState::Populated;
                self.grid.render(&hits, &self.placeholder, now, self.stagger);
            }
            Err(e) => {
                match &e {
                    SearchError::Parse(_) => error!("Malformed search response: {}", e),
                    _ => warn!("Error loading shows: {}", e),
                }
                self.state = LoadState::Errored;
                self.no_results.message = LOAD_FAILED_MESSAGE.to_string();
                self.no_results.flags.add(Flags::VISIBLE);
            }
        }

        true
    }

    pub(crate) fn tick(&mut self, now: Instant) -> Vec<AppendedCard> {
        self.grid.tick(now)
    }

    pub(crate) fn poster_failed(&mut self, batch: u64, index: usize) -> bool {
        self.grid.poster_failed(batch, index, &self.placeholder)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ShowRecord;

    const PLACEHOLDER: &str = "https://placeholder/none.png";

    fn movies() -> Movies {
        Movies::new(PLACEHOLDER, Duration::from_millis(50))
    }

    fn hits(names: &[&str]) -> Vec<SearchHit> {
        names
            .iter()
            .map(|name| SearchHit {
                show: ShowRecord {
                    name: Some(name.to_string()),
                    image: None,
                },
            })
            .collect()
    }

    #[test]
    fn begin_load_enters_loading() {
        let mut movies = movies();
        assert_eq!(movies.state(), LoadState::Idle);

        let ticket = movies.begin_load("Girl");

        assert_eq!(ticket, SearchTicket { generation: 1, query: "Girl".into() });
        assert_eq!(movies.state(), LoadState::Loading);
        assert!(movies.is_loading());
        assert!(!movies.no_results.flags.contains(Flags::VISIBLE));
    }

    #[test]
    fn results_populate_grid() {
        let now = Instant::now();
        let mut movies = movies();
        let ticket = movies.begin_load("Girl");

        assert!(movies.finish_load(ticket.generation, Ok(hits(&["A", "B"])), now));
        movies.tick(now + Duration::from_millis(50));

        assert_eq!(movies.state(), LoadState::Populated);
        assert!(!movies.is_loading());
        assert_eq!(movies.grid.cards().len(), 2);
    }

    #[test]
    fn empty_results_show_empty_state() {
        let mut movies = movies();
        let ticket = movies.begin_load("zzzz");

        movies.finish_load(ticket.generation, Ok(vec![]), Instant::now());

        assert_eq!(movies.state(), LoadState::Empty);
        assert!(!movies.is_loading());
        assert!(movies.no_results.flags.contains(Flags::VISIBLE));
        assert_eq!(movies.no_results.message, NO_RESULTS_MESSAGE);
    }

    #[test]
    fn failure_shows_error_message() {
        let mut movies = movies();
        let ticket = movies.begin_load("Girl");

        movies.finish_load(ticket.generation, Err(SearchError::Http { status: 503 }), Instant::now());

        assert_eq!(movies.state(), LoadState::Errored);
        assert!(!movies.is_loading());
        assert!(movies.no_results.flags.contains(Flags::VISIBLE));
        assert_eq!(movies.no_results.message, LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn parse_failure_also_restores_non_loading_state() {
        let mut movies = movies();
        let ticket = movies.begin_load("Girl");
        let parse_error = serde_json::from_str::<Vec<SearchHit>>("{").unwrap_err();

        movies.finish_load(ticket.generation, Err(SearchError::Parse(parse_error)), Instant::now());

        assert_eq!(movies.state(), LoadState::Errored);
        assert!(!movies.is_loading());
    }

    #[test]
    fn new_load_restores_default_empty_text() {
        let mut movies = movies();
        let first = movies.begin_load("Girl");
        movies.finish_load(first.generation, Err(SearchError::Transport("offline".into())), Instant::now());

        let second = movies.begin_load("Girl");
        movies.finish_load(second.generation, Ok(vec![]), Instant::now());

        assert_eq!(movies.no_results.message, NO_RESULTS_MESSAGE);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let now = Instant::now();
        let mut movies = movies();
        let slow = movies.begin_load("Drama");
        let fast = movies.begin_load("Comedy");

        assert!(movies.finish_load(fast.generation, Ok(hits(&["Fast"])), now));
        assert!(!movies.finish_load(slow.generation, Ok(hits(&["Slow", "Slower"])), now));
        movies.tick(now + Duration::from_secs(1));

        let names: Vec<_> = movies.grid.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Fast"]);
        assert_eq!(movies.state(), LoadState::Populated);
    }

    #[test]
    fn stale_completion_keeps_loading_indicator() {
        let mut movies = movies();
        let slow = movies.begin_load("Drama");
        movies.begin_load("Comedy");

        movies.finish_load(slow.generation, Ok(vec![]), Instant::now());

        assert_eq!(movies.state(), LoadState::Loading);
        assert!(movies.is_loading());
    }

    #[test]
    fn category_change_cancels_running_reveal() {
        let now = Instant::now();
        let mut movies = movies();
        let first = movies.begin_load("Drama");
        movies.finish_load(first.generation, Ok(hits(&["A", "B", "C"])), now);
        movies.tick(now);
        assert_eq!(movies.grid.cards().len(), 1);

        movies.begin_load("Comedy");
        movies.tick(now + Duration::from_secs(1));

        assert!(movies.grid.cards().is_empty());
    }
}
