//! Terminal UI for Rewind Tic-Tac-Toe

pub mod app;
pub mod input;
pub mod ui;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

use app::App;
use input::map_key;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Sends tracing output to the configured log file so it stays off the screen.
///
/// `RUST_LOG` wins over the configured filter.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter()))
        .with_context(|| format!("Invalid log filter {:?}", config.log_filter()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Run the TUI until the player quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    init_tracing(config)?;
    info!("Starting Rewind Tic-Tac-Toe TUI");

    let palette = config.theme().palette()?;
    let mut app = App::new(*config.reverse_history(), palette);

    install_panic_hook();
    let guard = enter_terminal()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    let moves = app.controller().moves_history().len();
    info!(moves, "TUI closed");
    res
}

/// Runs a cleanup closure when dropped, including while unwinding.
struct OnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        (self.0)()
    }
}

/// Switches to raw mode on the alternate screen with mouse capture.
///
/// The returned guard undoes all of it, so a failure in any later setup
/// step still leaves the shell usable.
fn enter_terminal() -> Result<OnDrop<fn()>> {
    enable_raw_mode()?;
    let guard = OnDrop(restore_terminal as fn());
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(guard)
}

fn restore_terminal() {
    debug!("Restoring terminal");
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to leave raw mode");
    }
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Restores the terminal before the default hook prints a panic message.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// Redraw, then wait briefly for one input event.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let mut hit_map = None;
        terminal.draw(|f| hit_map = Some(ui::draw(f, app)))?;
        if let Some(hit_map) = hit_map {
            app.set_hit_map(hit_map);
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug!(?key, "Key pressed");
                if let Some(action) = map_key(app.focus(), key) {
                    app.handle_action(action);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                debug!(column = mouse.column, row = mouse.row, "Mouse click");
                app.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }
    Ok(())
}
