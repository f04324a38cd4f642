//! # Bounded Life
//!
//! Terminal front end for Conway's Game of Life on a fixed, non-wrapping grid,
//! using `ratatui` for the interface and `crossterm` for terminal manipulation.
//!
//! ## Controls
//!
//! * a / Enter: Advance one generation (when paused)
//! * Space: Play/Pause automatic advancement
//! * r: Restart from the initial pattern
//! * q / Esc: Quit

use std::{
    fs::File,
    io::{self, Write},
    sync::Mutex,
    time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bounded_life::{
    app::App,
    config::{CliArgs, Config},
    ui,
};

fn main() -> Result<()> {
    let config = Config::from_args(CliArgs::parse()).context("invalid configuration")?;
    init_tracing(&config)?;
    info!(
        size = %config.initial.dimensions(),
        population = config.initial.population(),
        limit = ?config.generation_limit,
        "starting simulation"
    );

    let mut app = App::new(&config);
    if config.headless {
        run_headless(&mut app)
    } else {
        run_terminal(&mut app)
    }
}

/// Sends logs to `--log-file`, or to stderr in headless mode. The interactive
/// interface owns the screen, so without a log file nothing is installed.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if config.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run_headless(app: &mut App) -> Result<()> {
    if app.generation_limit().is_none() {
        bail!("headless mode needs a generation limit (--generations > 0)");
    }

    let mut out = io::stdout().lock();
    print_generation(&mut out, app)?;
    while app.advance()? {
        print_generation(&mut out, app)?;
    }
    Ok(())
}

fn print_generation(out: &mut impl Write, app: &App) -> Result<()> {
    writeln!(out, "{}", app.caption())?;
    for line in ui::grid_lines(app.grid(), 1) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn run_terminal(app: &mut App) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to build terminal backend")?;

    let result = event_loop(&mut terminal, app);

    // Always try to restore terminal state.
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    terminal.show_cursor().ok();

    // The alternate screen is gone, so stderr is visible again even when no
    // subscriber is installed.
    for message in restore_failures(raw, screen) {
        tracing::error!("{message}");
        eprintln!("bounded_life: {message}");
    }

    result
}

/// Describes each terminal restoration step that failed.
fn restore_failures(raw: io::Result<()>, screen: io::Result<()>) -> Vec<String> {
    [("disable raw mode", raw), ("leave alternate screen", screen)]
        .into_iter()
        .filter_map(|(step, outcome)| outcome.err().map(|err| format!("failed to {step}: {err}")))
        .collect()
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = app
            .tick()
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char(' ') => app.toggle_running(),
                        KeyCode::Char('a') | KeyCode::Enter => {
                            if !app.is_running() {
                                app.advance()?;
                            }
                        }
                        KeyCode::Char('r') => app.restart(),
                        _ => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= app.tick() {
            if app.is_running() {
                app.advance()?;
            }
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_failures_reports_each_failed_step() {
        assert!(restore_failures(Ok(()), Ok(())).is_empty());

        let broken = || io::Error::new(io::ErrorKind::Other, "tty gone");
        assert_eq!(
            restore_failures(Err(broken()), Ok(())),
            vec!["failed to disable raw mode: tty gone"]
        );
        assert_eq!(
            restore_failures(Err(broken()), Err(broken())),
            vec![
                "failed to disable raw mode: tty gone",
                "failed to leave alternate screen: tty gone",
            ]
        );
    }
}
