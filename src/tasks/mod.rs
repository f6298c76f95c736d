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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking HTTP
//! requests from the main UI thread. Each worker owns its own HTTP client and
//! loops over incoming [`AppTask`]s, broadcasting results back to the
//! application via [`AppEvent`]s.
//!
//! Results carry the generation or batch token of the request that produced
//! them; deciding whether a result is still wanted is left to the UI thread.
//! Poster loads are the exception: the worker shares the grid's
//! [`BatchToken`] and skips cards from a batch that has been cleared.

mod handlers;
use handlers::*;

use anyhow::Result;
use log::{error, info};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    config::AppConfig,
    events::AppEvent,
    model::{
        grid::{AppendedCard, BatchToken},
        movies::SearchTicket,
    },
    search::{HttpTransport, ReqwestTransport, SearchClient},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    SearchShows(SearchTicket),
    LoadPoster(AppendedCard),
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `name` - Thread name, used in logs.
/// * `config` - The application configuration.
/// * `batch` - The grid's current batch, used to drop stale poster loads.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    name: &str,
    config: &AppConfig,
    batch: BatchToken,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let base_url = config.api_base_url.clone();
    let worker = name.to_string();

    thread::Builder::new().name(worker.clone()).spawn(move || {
        let client = match ReqwestTransport::new() {
            Ok(transport) => SearchClient::new(&base_url, transport),
            Err(e) => {
                let _ = event_tx.send(AppEvent::FatalError(format!("{}: {}", worker, e)));
                return;
            }
        };

        info!("{} worker started", worker);

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                event_tx: &event_tx,
                client: &client,
                batch: &batch,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                error!("{} task failed: {:#}", worker, e);
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }

        info!("{} worker stopped", worker);
    })?;

    Ok(())
}

/// Bundles shared resources required by task handlers.
struct TaskContext<'a, T: HttpTransport> {
    event_tx: &'a Sender<AppEvent>,
    client: &'a SearchClient<T>,
    batch: &'a BatchToken,
}

/// Orchestrates the execution of a single task.
fn handle_task<T: HttpTransport>(task: AppTask, ctx: &mut TaskContext<T>) -> Result<()> {
    match task {
        AppTask::SearchShows(ticket) => search_shows(ctx, ticket),
        AppTask::LoadPoster(card) => load_poster(ctx, card),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        sync::mpsc::{self, TryRecvError},
        time::{Duration, Instant},
    };

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{PosterImage, SearchHit, ShowRecord, grid::ShowGrid},
        search::{HttpResponse, SearchError},
    };

    const PLACEHOLDER: &str = "https://placeholder/none.png";

    struct MissingPosters {
        requested: RefCell<Vec<String>>,
    }

    impl HttpTransport for &MissingPosters {
        fn get(&self, url: &str) -> Result<HttpResponse, SearchError> {
            self.requested.borrow_mut().push(url.to_string());
            Ok(HttpResponse {
                status: 404,
                body: String::new(),
            })
        }
    }

    fn hit(name: &str, poster: &str) -> SearchHit {
        SearchHit {
            show: ShowRecord {
                name: Some(name.to_string()),
                image: Some(PosterImage {
                    medium: Some(poster.to_string()),
                }),
            },
        }
    }

    fn reveal(grid: &mut ShowGrid, posters: &[&str]) -> Vec<AppendedCard> {
        let start = Instant::now();
        let hits: Vec<_> = posters.iter().map(|p| hit(p, p)).collect();
        grid.render(&hits, PLACEHOLDER, start, Duration::ZERO);
        grid.tick(start)
    }

    #[test]
    fn poster_loads_for_cleared_batch_are_skipped() {
        let mut grid = ShowGrid::new();
        let stale = reveal(&mut grid, &["a.jpg", "b.jpg", "c.jpg"]);
        grid.clear();
        let fresh = reveal(&mut grid, &["d.jpg"]);

        let transport = MissingPosters {
            requested: RefCell::new(vec![]),
        };
        let client = SearchClient::new("https://api.example.com", &transport);
        let token = grid.batch_token();
        let (event_tx, event_rx) = mpsc::channel();
        let mut ctx = TaskContext {
            event_tx: &event_tx,
            client: &client,
            batch: &token,
        };

        for card in stale.into_iter().chain(fresh) {
            handle_task(AppTask::LoadPoster(card), &mut ctx).unwrap();
        }

        assert_eq!(*transport.requested.borrow(), vec!["d.jpg".to_string()]);
        assert!(matches!(
            event_rx.try_recv(),
            Ok(AppEvent::PosterFailed { batch, index: 0 }) if batch == grid.batch()
        ));
        assert!(matches!(event_rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn failed_poster_of_current_batch_is_reported() {
        let mut grid = ShowGrid::new();
        let cards = reveal(&mut grid, &["a.jpg", "b.jpg"]);

        let transport = MissingPosters {
            requested: RefCell::new(vec![]),
        };
        let client = SearchClient::new("https://api.example.com", &transport);
        let token = grid.batch_token();
        let (event_tx, event_rx) = mpsc::channel();
        let mut ctx = TaskContext {
            event_tx: &event_tx,
            client: &client,
            batch: &token,
        };

        for card in cards {
            handle_task(AppTask::LoadPoster(card), &mut ctx).unwrap();
        }

        let failed: Vec<_> = event_rx
            .try_iter()
            .map(|event| match event {
                AppEvent::PosterFailed { index, .. } => index,
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        assert_eq!(failed, vec![0, 1]);
    }
}
