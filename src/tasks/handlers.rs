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

use anyhow::Result;
use log::{debug, info};

use crate::{
    events::AppEvent,
    model::{grid::AppendedCard, movies::SearchTicket},
    search::HttpTransport,
    tasks::TaskContext,
};

pub(super) fn search_shows<T: HttpTransport>(ctx: &mut TaskContext<T>, ticket: SearchTicket) -> Result<()> {
    let result = ctx.client.search_shows(&ticket.query);

    if let Ok(hits) = &result {
        info!("Search {:?} returned {} shows", ticket.query, hits.len());
    }

    ctx.event_tx.send(AppEvent::SearchCompleted {
        generation: ticket.generation,
        result,
    })?;

    Ok(())
}

pub(super) fn load_poster<T: HttpTransport>(ctx: &mut TaskContext<T>, card: AppendedCard) -> Result<()> {
    if !ctx.batch.is_current(card.batch) {
        debug!("Skipping poster {} from cleared batch {}", card.poster_url, card.batch);
        return Ok(());
    }

    if let Err(e) = ctx.client.fetch_poster(&card.poster_url) {
        debug!("Poster {} failed to load: {}", card.poster_url, e);
        ctx.event_tx.send(AppEvent::PosterFailed {
            batch: card.batch,
            index: card.index,
        })?;
    }

    Ok(())
}
