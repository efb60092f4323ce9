//! jobdeck - browse job listings in the terminal
//!
//! A terminal UI application that shows job listings fetched from the
//! Adzuna API, cached locally so repeated launches stay within the
//! provider's monthly call budget.

mod app;
mod cache;
mod cli;
mod data;
mod feed;
mod ui;

use std::io;
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use app::{App, AppState};
use cache::FileStore;
use cli::{Cli, StartupConfig};
use data::AdzunaClient;
use feed::{cancel_pair, FeedManager, FeedOutcome};

/// Sets up a panic hook that restores the terminal before printing the panic
/// message, so the terminal stays usable after a crash.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match app.state {
        AppState::Loading => render_loading(frame),
        AppState::JobList => ui::render_job_list(frame, app),
        AppState::JobDetail => ui::render_job_detail(frame, app),
    }
}

/// Renders a loading message while the feed resolves
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(frame.area());

    let loading_text = Paragraph::new("Loading jobs...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let startup = StartupConfig::from_cli(&cli)?;

    let store = FileStore::new().ok_or("could not determine a cache directory")?;
    let provider = AdzunaClient::from_env();
    let manager = Arc::new(FeedManager::new(
        store,
        provider,
        startup.feed,
        startup.query,
    ));

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Resolve the feed in the background; quitting before it finishes
    // cancels the fetch so nothing stale gets persisted afterwards.
    let (cancel_source, cancel_token) = cancel_pair();
    let (feed_tx, mut feed_rx) = mpsc::channel(1);
    let fetcher = Arc::clone(&manager);
    tokio::spawn(async move {
        let outcome = fetcher.get_jobs(&cancel_token).await;
        let _ = feed_tx.send(outcome).await;
    });

    let mut app = App::new();

    // Main event loop
    loop {
        terminal.draw(|f| render_ui(f, &app))?;

        if let Ok(outcome) = feed_rx.try_recv() {
            if let FeedOutcome::Ready(response) = outcome {
                app.apply_feed(response);
            }
        }

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Teardown: cancel any in-flight fetch, then best-effort cache cleanup
    cancel_source.cancel();
    manager.invalidate_if_expired();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
