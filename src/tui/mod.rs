//! Terminal front end.
//!
//! Terminal events (keys and clicks), the idle deadline and a redraw tick
//! for the countdown drive the game. The engine runs synchronously inside the
//! event handler, so no input is read while the computer is thinking.

mod app;
mod bell;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tictactoe_ai::GameConfig;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

const REDRAW_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the game until the player quits.
pub async fn run(config: GameConfig) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = event_loop(&mut terminal, App::new(&config, Instant::now())).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Goodbye");
    res
}

#[instrument(skip_all)]
async fn event_loop(terminal: &mut Term, mut app: App) -> Result<()> {
    let mut events = EventStream::new();
    let mut redraw = tokio::time::interval(REDRAW_INTERVAL);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app, Instant::now()))?;

        let deadline = app.idle_deadline();
        let idle = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code, Instant::now())? == Control::Quit {
                        info!("Player quit");
                        return Ok(());
                    }
                }
                Some(Ok(Event::Mouse(mouse))) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    if let Some((row, col)) = ui::cell_at(screen, mouse.column, mouse.row) {
                        app.click(row, col, Instant::now())?;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => return Ok(()),
            },
            _ = idle => app.on_idle(Instant::now())?,
            _ = redraw.tick() => {}
        }
    }
}
