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

//! Show grid and the staggered reveal of its cards.
//!
//! Search hits are turned into [`ShowCard`]s in one go and scheduled together:
//! card `i` becomes due `i * stagger` after the batch starts, so the whole
//! batch is revealed after `(n - 1) * stagger`. Each batch carries a token;
//! clearing the grid retires the token and with it every card still waiting
//! to appear.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use log::debug;

use crate::model::{SearchHit, flags::Flags};

pub(crate) const DEFAULT_REVEAL_STAGGER: Duration = Duration::from_millis(50);

/// Poster source of a card, falling back to a placeholder at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Poster {
    pub(crate) src: String,
    fell_back: bool,
}

impl Poster {
    pub(crate) fn new(url: Option<&str>, placeholder: &str) -> Self {
        match url {
            Some(url) => Self {
                src: url.to_string(),
                fell_back: false,
            },
            None => Self {
                src: placeholder.to_string(),
                fell_back: true,
            },
        }
    }

    pub(crate) fn is_placeholder(&self) -> bool {
        self.fell_back
    }

    /// Swaps to the placeholder after a failed load.
    ///
    /// Only the first failure has an effect, so a placeholder that itself
    /// fails to load never triggers another swap.
    pub(crate) fn on_load_error(&mut self, placeholder: &str) -> bool {
        if self.fell_back {
            return false;
        }

        self.fell_back = true;
        self.src = placeholder.to_string();
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShowCard {
    pub(crate) name: String,
    pub(crate) poster: Poster,
    pub(crate) flags: Flags,
}

impl ShowCard {
    pub(crate) fn from_hit(hit: &SearchHit, placeholder: &str) -> Self {
        Self {
            name: hit.show.display_name().to_string(),
            poster: Poster::new(hit.show.poster_url(), placeholder),
            flags: Flags::empty(),
        }
    }
}

/// A set of cards scheduled for reveal at the same moment.
#[derive(Debug)]
pub(crate) struct RevealBatch {
    token: u64,
    started: Instant,
    stagger: Duration,
    cards: Vec<ShowCard>,
    next: usize,
}

impl RevealBatch {
    pub(crate) fn new(token: u64, cards: Vec<ShowCard>, started: Instant, stagger: Duration) -> Self {
        Self {
            token,
            started,
            stagger,
            cards,
            next: 0,
        }
    }

    pub(crate) fn due_at(&self, index: usize) -> Instant {
        self.started + self.stagger * index as u32
    }

    /// Time from the start of the batch until its last card is due.
    pub(crate) fn total_reveal_time(&self) -> Duration {
        self.stagger * self.cards.len().saturating_sub(1) as u32
    }

    fn is_finished(&self) -> bool {
        self.next >= self.cards.len()
    }

    /// Takes every card that is due at `now`, in order.
    fn take_due(&mut self, now: Instant) -> Vec<ShowCard> {
        let mut due = vec![];
        while self.next < self.cards.len() && self.due_at(self.next) <= now {
            due.push(self.cards[self.next].clone());
            self.next += 1;
        }
        due
    }
}

/// A card that has just been appended, for loading its poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppendedCard {
    pub(crate) batch: u64,
    pub(crate) index: usize,
    pub(crate) poster_url: String,
}

/// The batch currently on screen, shared with the poster worker.
#[derive(Debug, Clone, Default)]
pub(crate) struct BatchToken(Arc<AtomicU64>);

impl BatchToken {
    pub(crate) fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    pub(crate) fn is_current(&self, batch: u64) -> bool {
        self.current() == batch
    }

    fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[derive(Debug, Default)]
pub(crate) struct ShowGrid {
    cards: Vec<ShowCard>,
    pending: Option<RevealBatch>,
    token: BatchToken,
    selected: Option<usize>,
}

impl ShowGrid {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn cards(&self) -> &[ShowCard] {
        &self.cards
    }

    pub(crate) fn batch(&self) -> u64 {
        self.token.current()
    }

    /// A handle that follows the current batch across clears.
    pub(crate) fn batch_token(&self) -> BatchToken {
        self.token.clone()
    }

    pub(crate) fn is_revealing(&self) -> bool {
        self.pending.is_some()
    }

    /// Removes all cards and cancels the reveal in progress, if any.
    pub(crate) fn clear(&mut self) {
        self.cards.clear();
        self.pending = None;
        self.selected = None;
        self.token.advance();
    }

    /// Schedules one card per hit, preserving the order of the hits.
    pub(crate) fn render(&mut self, hits: &[SearchHit], placeholder: &str, now: Instant, stagger: Duration) {
        self.clear();

        let cards = hits
            .iter()
            .map(|hit| ShowCard::from_hit(hit, placeholder))
            .collect();

        let batch = RevealBatch::new(self.batch(), cards, now, stagger);
        debug!(
            "Revealing {} cards over {:?}",
            batch.cards.len(),
            batch.total_reveal_time()
        );
        self.pending = Some(batch);
    }

    /// Appends every card that has become due.
    ///
    /// Returns the newly appended cards that still need their poster loaded.
    pub(crate) fn tick(&mut self, now: Instant) -> Vec<AppendedCard> {
        let Some(batch) = self.pending.as_mut() else {
            return vec![];
        };

        let current = self.token.current();
        if batch.token != current {
            self.pending = None;
            return vec![];
        }

        let mut appended = vec![];
        for mut card in batch.take_due(now) {
            card.flags.add(Flags::FADE_IN);
            if !card.poster.is_placeholder() {
                appended.push(AppendedCard {
                    batch: current,
                    index: self.cards.len(),
                    poster_url: card.poster.src.clone(),
                });
            }
            self.cards.push(card);
        }

        if batch.is_finished() {
            self.pending = None;
        }

        appended
    }

    /// Applies a failed poster load to a card of the current batch.
    ///
    /// Failures reported for an earlier batch are ignored.
    pub(crate) fn poster_failed(&mut self, batch: u64, index: usize, placeholder: &str) -> bool {
        if !self.token.is_current(batch) {
            return false;
        }

        self.cards
            .get_mut(index)
            .is_some_and(|card| card.poster.on_load_error(placeholder))
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn selected_card(&self) -> Option<&ShowCard> {
        self.selected.and_then(|idx| self.cards.get(idx))
    }

    /// Moves the selection forward over the cards revealed so far, wrapping
    /// at the end.
    pub(crate) fn select_next(&mut self) -> Option<&ShowCard> {
        if self.cards.is_empty() {
            return None;
        }
        self.selected = Some(self.selected.map_or(0, |idx| (idx + 1) % self.cards.len()));
        self.selected_card()
    }

    pub(crate) fn select_previous(&mut self) -> Option<&ShowCard> {
        if self.cards.is_empty() {
            return None;
        }
        let last = self.cards.len() - 1;
        self.selected = Some(match self.selected {
            Some(idx) if idx > 0 => idx - 1,
            _ => last,
        });
        self.selected_card()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{PosterImage, ShowRecord};

    const PLACEHOLDER: &str = "https://placeholder/none.png";

    fn hit(name: &str, poster: Option<&str>) -> SearchHit {
        SearchHit {
            show: ShowRecord {
                name: Some(name.to_string()),
                image: poster.map(|url| PosterImage {
                    medium: Some(url.to_string()),
                }),
            },
        }
    }

    fn names(grid: &ShowGrid) -> Vec<&str> {
        grid.cards().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn reveals_cards_concurrently_staggered() {
        let start = Instant::now();
        let hits = vec![hit("A", Some("a.jpg")), hit("B", Some("b.jpg")), hit("C", None)];
        let mut grid = ShowGrid::new();

        grid.render(&hits, PLACEHOLDER, start, DEFAULT_REVEAL_STAGGER);
        assert!(grid.cards().is_empty());

        grid.tick(start);
        assert_eq!(names(&grid), vec!["A"]);

        grid.tick(start + Duration::from_millis(49));
        assert_eq!(names(&grid), vec!["A"]);

        grid.tick(start + Duration::from_millis(50));
        assert_eq!(names(&grid), vec!["A", "B"]);
        assert!(grid.is_revealing());

        grid.tick(start + Duration::from_millis(100));
        assert_eq!(names(&grid), vec!["A", "B", "C"]);
        assert!(!grid.is_revealing());
        assert!(grid.cards().iter().all(|c| c.flags.contains(Flags::FADE_IN)));
    }

    #[test]
    fn total_reveal_time_is_linear() {
        let start = Instant::now();
        let cards = (0..3).map(|i| ShowCard::from_hit(&hit(&i.to_string(), None), PLACEHOLDER)).collect();
        let batch = RevealBatch::new(0, cards, start, DEFAULT_REVEAL_STAGGER);

        assert_eq!(batch.due_at(0), start);
        assert_eq!(batch.due_at(1), start + Duration::from_millis(50));
        assert_eq!(batch.due_at(2), start + Duration::from_millis(100));
        assert_eq!(batch.total_reveal_time(), Duration::from_millis(100));
    }

    #[test]
    fn late_tick_appends_everything_in_order() {
        let start = Instant::now();
        let hits: Vec<_> = ["one", "two", "three", "four"].iter().map(|n| hit(n, None)).collect();
        let mut grid = ShowGrid::new();

        grid.render(&hits, PLACEHOLDER, start, DEFAULT_REVEAL_STAGGER);
        grid.tick(start + Duration::from_secs(1));

        assert_eq!(names(&grid), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn clearing_cancels_pending_reveal() {
        let start = Instant::now();
        let hits = vec![hit("A", None), hit("B", None)];
        let mut grid = ShowGrid::new();

        grid.render(&hits, PLACEHOLDER, start, DEFAULT_REVEAL_STAGGER);
        grid.tick(start);
        grid.clear();
        grid.tick(start + Duration::from_secs(1));

        assert!(grid.cards().is_empty());
        assert!(!grid.is_revealing());
    }

    #[test]
    fn missing_poster_uses_placeholder_without_loading() {
        let start = Instant::now();
        let mut grid = ShowGrid::new();

        grid.render(&[hit("A", None), hit("B", Some("b.jpg"))], PLACEHOLDER, start, DEFAULT_REVEAL_STAGGER);
        let appended = grid.tick(start + Duration::from_millis(50));

        assert_eq!(grid.cards()[0].poster.src, PLACEHOLDER);
        assert_eq!(
            appended,
            vec![AppendedCard {
                batch: grid.batch(),
                index: 1,
                poster_url: "b.jpg".to_string(),
            }]
        );
    }

    #[test]
    fn poster_failure_swaps_once() {
        let start = Instant::now();
        let mut grid = ShowGrid::new();
        grid.render(&[hit("A", Some("a.jpg"))], PLACEHOLDER, start, DEFAULT_REVEAL_STAGGER);
        grid.tick(start);
        let batch = grid.batch();

        assert!(grid.poster_failed(batch, 0, PLACEHOLDER));
        assert_eq!(grid.cards()[0].poster.src, PLACEHOLDER);
        assert!(!grid.poster_failed(batch, 0, PLACEHOLDER));
        assert!(!grid.poster_failed(batch, 7, PLACEHOLDER));
    }

    #[test]
    fn clearing_advances_shared_token() {
        let mut grid = ShowGrid::new();
        let token = grid.batch_token();
        let before = token.current();

        grid.clear();

        assert_eq!(token.current(), before + 1);
        assert!(token.is_current(grid.batch()));
        assert!(!token.is_current(before));
    }

    #[test]
    fn selection_wraps_over_revealed_cards() {
        let start = Instant::now();
        let mut grid = ShowGrid::new();
        assert!(grid.select_next().is_none());

        grid.render(&[hit("A", None), hit("B", None), hit("C", None)], PLACEHOLDER, start, DEFAULT_REVEAL_STAGGER);
        grid.tick(start + Duration::from_millis(50));

        assert_eq!(grid.select_next().map(|c| c.name.as_str()), Some("A"));
        assert_eq!(grid.select_next().map(|c| c.name.as_str()), Some("B"));
        assert_eq!(grid.select_next().map(|c| c.name.as_str()), Some("A"));
        assert_eq!(grid.select_previous().map(|c| c.name.as_str()), Some("B"));

        grid.clear();
        assert_eq!(grid.selected(), None);
    }

    #[test]
    fn poster_failure_from_old_batch_is_ignored() {
        let start = Instant::now();
        let mut grid = ShowGrid::new();
        grid.render(&[hit("A", Some("a.jpg"))], PLACEHOLDER, start, DEFAULT_REVEAL_STAGGER);
        grid.tick(start);
        let old = grid.batch();

        grid.render(&[hit("B", Some("b.jpg"))], PLACEHOLDER, start, DEFAULT_REVEAL_STAGGER);
        grid.tick(start);

        assert!(!grid.poster_failed(old, 0, PLACEHOLDER));
        assert_eq!(grid.cards()[0].poster.src, "b.jpg");
    }
}
