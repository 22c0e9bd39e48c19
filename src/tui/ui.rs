//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::engine::format_hhmmss;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, countdown, progress, meta, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Countdown
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Meta
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_meta(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

/// Render the header with the configured title and the session mode.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snap = app.snapshot();

    let mut mode_text = snap.kind.display_name().to_uppercase();
    if snap.paused {
        mode_text.push_str("  |  PAUSED");
    }

    let header = Paragraph::new(format!(" {} ", mode_text))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.kind_color(snap.kind))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(format!(" {} ", app.config.ui.window_title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.accent_color())),
        );

    frame.render_widget(header, area);
}

/// Render the remaining time.
fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snap = app.snapshot();

    let countdown = Paragraph::new(format!(
        "\n{}",
        format_hhmmss(i64::from(snap.remaining_seconds))
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(app.theme.kind_color(snap.kind))
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

/// Render the progress gauge for the current session.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let progress = app.progress();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(app.theme.accent_color()))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));

    frame.render_widget(gauge, area);
}

/// Render session counters.
fn render_meta(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snap = app.snapshot();

    let meta = Paragraph::new(format!(
        "Work sessions done: {}   Session #{}",
        snap.completed_work_sessions,
        snap.rotation_index + 1
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(app.theme.accent_color()));

    frame.render_widget(meta, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = if app.config.ui.hotkeys {
        "Enter:start | Space/p:pause | s:skip | r:reset | q:quit"
    } else {
        "hotkeys disabled | q:quit"
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}
