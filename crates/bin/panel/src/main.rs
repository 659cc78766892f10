//! lumo-panel — terminal control panel for the lumo daemon.
//!
//! Polls the daemon's status endpoint on a fixed interval, renders the
//! reported state, and issues control commands from keystrokes. A single
//! `select!` loop multiplexes the poll tick and terminal input, so no two
//! network calls from the same action run concurrently.

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use lumo_panel::app::Panel;
use lumo_panel::client::ApiClient;
use lumo_panel::ui;

/// Terminal control panel for lumod.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Base URL of the daemon API.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server: String,
    /// Seconds between status polls.
    #[arg(long, default_value_t = 5)]
    poll_interval: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().expect("failed to install color-eyre");
    let args = Args::parse();

    let mut panel = Panel::new(ApiClient::new(args.server));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut panel, args.poll_interval).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    panel: &mut Panel,
    poll_interval: u64,
) -> Result<()> {
    let mut events = EventStream::new();
    // The first tick fires immediately, giving an initial status fetch.
    let mut ticker = tokio::time::interval(Duration::from_secs(poll_interval));

    while !panel.should_exit() {
        terminal.draw(|frame| ui::render(frame, panel))?;
        tokio::select! {
            _ = ticker.tick() => panel.refresh().await,
            maybe_event = events.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    panel.handle_key(key).await;
                }
            }
        }
    }
    Ok(())
}
