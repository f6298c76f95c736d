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

use std::time::Instant;

use anyhow::Result;
use log::{debug, info, warn};

use crate::{
    App,
    model::{SearchHit, location::{Location, Page}},
    search::SearchError,
    tasks::AppTask,
};

pub(super) fn handle_navigate(app: &mut App, location: Location) -> Result<()> {
    let page = location.page();
    info!("Navigating to {} ({:?})", location, page);

    app.scroll.reset();
    app.back_to_top.on_scroll(app.scroll.offset());

    match page {
        Page::Home => app.home_view.reset(),
        Page::Register => app.register_view.open(location.email()),
        Page::Movies => {}
    }

    app.location = location;
    app.page = page;

    if page == Page::Movies {
        let category = app.movies_view.select_initial_category();
        start_search(app, category)?;
    }

    Ok(())
}

pub(super) fn handle_select_category(app: &mut App, category: String) -> Result<()> {
    if app.page != Page::Movies {
        debug!("Ignoring category {:?} outside the movies page", category);
        return Ok(());
    }

    start_search(app, category)
}

fn start_search(app: &mut App, category: String) -> Result<()> {
    let ticket = app.movies_view.movies.begin_load(&category);
    info!("Loading shows for {:?} (generation {})", category, ticket.generation);

    app.scroll.reset();
    app.back_to_top.on_scroll(app.scroll.offset());
    app.search_tx.send(AppTask::SearchShows(ticket))?;

    Ok(())
}

pub(super) fn handle_search_completed(
    app: &mut App,
    generation: u64,
    result: Result<Vec<SearchHit>, SearchError>,
) {
    let now = Instant::now();
    if app.movies_view.movies.finish_load(generation, result, now) {
        reveal_due_cards(app, now);
    }
}

pub(super) fn handle_poster_failed(app: &mut App, batch: u64, index: usize) {
    if app.movies_view.movies.poster_failed(batch, index) {
        debug!("Card {} of batch {} now shows the placeholder", index, batch);
    }
}

pub(super) fn handle_show_alert(app: &mut App, message: String) {
    app.alert.show(message);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!("{}", message);
    app.alert.show(message);
}

pub(super) fn handle_tick(app: &mut App) {
    if app.page == Page::Movies {
        reveal_due_cards(app, Instant::now());
    }

    if app.scroll.step() {
        app.back_to_top.on_scroll(app.scroll.offset());
    }
}

/// Appends the cards whose reveal time has passed and starts loading their
/// posters.
fn reveal_due_cards(app: &mut App, now: Instant) {
    for card in app.movies_view.movies.tick(now) {
        if let Err(e) = app.poster_tx.send(AppTask::LoadPoster(card)) {
            warn!("Poster worker unavailable: {}", e);
            break;
        }
    }
}
