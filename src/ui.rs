//! Terminal rendering with `ratatui`.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use sysinfo::SystemExt;

use crate::app::App;
use crate::grid::Grid;

pub const ALIVE_GLYPH: char = '█';
pub const DEAD_GLYPH: char = '·';

const HELP: &str = "Game of Life [a/Enter: Advance | Space: Play/Pause | r: Restart | q: Quit]";

/// Renders each row of `grid` as text, `cell_width` glyphs per cell.
pub fn grid_lines(grid: &Grid, cell_width: u16) -> Vec<String> {
    let width = usize::from(cell_width.max(1));
    grid.iter_rows()
        .map(|row| {
            row.iter()
                .flat_map(|cell| {
                    let glyph = if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH };
                    std::iter::repeat(glyph).take(width)
                })
                .collect()
        })
        .collect()
}

/// Human-readable run status.
pub fn status(app: &App) -> &'static str {
    if app.is_finished() {
        "Finished"
    } else if app.is_running() {
        "Running"
    } else {
        "Paused"
    }
}

/// Draws the whole interface: caption, grid and statistics panel.
pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(f.size());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
        .split(rows[1]);

    draw_caption(f, app, rows[0]);
    draw_grid(f, app, columns[0]);
    draw_stats(f, app, columns[1]);
}

fn draw_caption(f: &mut Frame, app: &App, area: Rect) {
    let caption = Paragraph::new(app.caption())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(caption, area);
}

/// Draws the game grid to the terminal interface.
///
/// # Arguments
///
/// * `f` - The frame to draw on
/// * `app` - The application state
/// * `area` - The area of the terminal to draw in
fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(HELP);
    let cells = grid_lines(app.grid(), app.cell_width()).join("\n");
    let paragraph = Paragraph::new(cells)
        .style(Style::default().fg(Color::White))
        .block(block);
    f.render_widget(paragraph, area);
}

/// Draws the statistics panel to the terminal interface.
fn draw_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();
    let memory_used = app.system().used_memory() / 1024; // Convert to KB
    let memory_total = app.system().total_memory() / 1024;
    let (changed, births, deaths) = app
        .last_outcome()
        .map_or(("-", 0, 0), |o| (if o.changed { "yes" } else { "no" }, o.births, o.deaths));
    let limit = app
        .generation_limit()
        .map_or_else(|| "unlimited".to_owned(), |l| l.to_string());

    let stats_text = format!(
        "Statistics:\n\
        Generation: {} / {}\n\
        Distinct Shapes: {}\n\
        Population: {}\n\
        Changed: {}\n\
        Births: {}  Deaths: {}\n\
        Cells Created: {}\n\
        Cells Destroyed: {}\n\
        Memory Usage: {}KB/{:.2}MB\n\
        Status: {}\n",
        stats.generation_count,
        limit,
        stats.distinct_shape_count,
        app.grid().population(),
        changed,
        births,
        deaths,
        stats.cells_created,
        stats.cells_destroyed,
        memory_used,
        memory_total as f64 / 1024.0,
        status(app),
    );

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
        .wrap(Wrap { trim: true });
    f.render_widget(stats_widget, area);
}
