//! Interactive table UI.
//!
//! Terminal setup and the input loop. One key press resolves to at most one
//! action, and each action (including its API call) runs to completion
//! before the next key is read, so mutation flows never interleave.

pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::client::EventsApi;
use app::App;

pub async fn run(client: impl EventsApi) -> Result<()> {
    let mut app = App::new(client);
    // Populate the store before taking over the terminal, so a dead server
    // fails with a readable message instead of a blank screen.
    app.load().await.context("Failed to fetch events")?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<impl EventsApi>,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(Duration::from_millis(200)).context("Failed to poll input")? {
            match event::read().context("Failed to read input")? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(action) = app.action_for(key.code) {
                        app.apply(action).await;
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
