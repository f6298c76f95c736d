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

//! # Show Browser TUI.
//!
//! A terminal front end for a small streaming-service demo: a landing page
//! that collects an email, a registration form with live password validation,
//! and a movies page that searches a public show catalogue and lays out the
//! results as poster cards.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all page state and renders the UI.
//! * **Background Workers** perform blocking HTTP requests (show searches and
//!   poster loads) and report back through events.
//! * **Input and Tick Threads** capture key presses and drive timers such as
//!   the staggered reveal of result cards.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod commander;
mod components;
mod config;
mod events;
mod model;
mod render;
mod search;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    commander::Commander,
    components::{Alert, HomeView, MoviesView, RegisterView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{
        location::{Location, Page},
        scroll::{ScrollAffordance, ScrollState},
    },
    tasks::AppTask,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Parser, Debug)]
#[command(version, about = "Browse TV shows from the terminal")]
struct Args {
    /// Location to open, such as `movies.html` or `register.html?email=a%40b.co`
    #[arg(default_value = "index.html")]
    location: String,

    /// Base URL of the show search service
    #[arg(long)]
    api_base_url: Option<String>,
}

/// Application state.
struct App {
    pub config: AppConfig,
    pub theme: Theme,

    pub location: Location,
    pub page: Page,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub search_tx: Sender<AppTask>,
    pub poster_tx: Sender<AppTask>,

    pub home_view: HomeView,
    pub register_view: RegisterView,
    pub movies_view: MoviesView,

    pub scroll: ScrollState,
    pub back_to_top: ScrollAffordance,

    pub alert: Alert,
    pub commander: Commander,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, search_tx: Sender<AppTask>, poster_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            theme: Theme::default(),
            location: Page::Home.location(),
            page: Page::Home,
            event_tx,
            event_rx,
            search_tx,
            poster_tx,
            home_view: HomeView::new(),
            register_view: RegisterView::new(),
            movies_view: MoviesView::new(&config),
            scroll: ScrollState::default(),
            back_to_top: ScrollAffordance::new(config.scroll_threshold),
            alert: Alert::default(),
            commander: Commander::new(),
            config,
        }
    }

    /// Whether something on screen changes without user input.
    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating() || self.movies_view.movies.grid.is_revealing()
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = util::logging::setup_logging() {
        eprintln!("Logging disabled: {:#}", e);
    }

    let mut config = config::load_config();
    if let Some(base_url) = args.api_base_url {
        config.api_base_url = base_url;
    }
    info!("Starting with API base {}", config.api_base_url);

    let (search_tx, search_rx) = mpsc::channel();
    let (poster_tx, poster_rx) = mpsc::channel();

    let mut app = App::new(config, search_tx, poster_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, Location::parse(&args.location), search_rx, poster_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background colour based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        if let Err(e) = util::term::set_terminal_bg(&hex) {
            warn!("Failed to set terminal background: {}", e);
        }
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A search worker and a poster worker to process [`AppTask`]s.
/// * An input thread to poll for terminal key events.
/// * A tick thread to drive timers and animations.
///
/// It then navigates to the start location and hands control to
/// [`process_events`].
///
/// # Errors
///
/// Returns an error if a worker cannot be started or the event processing
/// loop encounters an unrecoverable error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    start: Location,
    search_rx: Receiver<AppTask>,
    poster_rx: Receiver<AppTask>,
) -> Result<()> {
    let batch = app.movies_view.movies.grid.batch_token();
    tasks::spawn_task_worker("search", &app.config, batch.clone(), search_rx, app.event_tx.clone())
        .context("Failed to start search worker")?;
    tasks::spawn_task_worker("poster", &app.config, batch, poster_rx, app.event_tx.clone())
        .context("Failed to start poster worker")?;

    // Translate raw terminal events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(event::Event::Resize(_, _)) => {
                    if tx_keys.send(AppEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::FatalError(format!("Input error: {}", e)));
                    break;
                }
            }
        }
    });

    // The tick is the resolution of every timer in the application, including
    // the staggered card reveal.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    app.event_tx
        .send(AppEvent::Navigate(start))
        .context("Failed to open start location")?;

    process_events(terminal, app)
}
