//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::features::focus::{Mode, Phase};
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Countdown
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Settings and session count
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_details(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

fn mode_color(app: &App) -> Color {
    match app.controller().mode() {
        Mode::Idle => Color::Cyan,
        Mode::Focus => Color::Red,
        Mode::Break => Color::Green,
        Mode::Paused => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let controller = app.controller();
    let title = match (controller.mode(), controller.phase()) {
        (Mode::Paused, Some(Phase::Focus)) => " Paused (focus) ".to_string(),
        (Mode::Paused, Some(Phase::Break)) => " Paused (break) ".to_string(),
        (mode, _) => format!(" {mode} "),
    };

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(mode_color(app))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(mode_color(app))),
        );

    frame.render_widget(header, area);
}

fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let remaining = app.controller().format_remaining();
    let countdown = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            remaining,
            Style::default()
                .fg(mode_color(app))
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let progress = app.controller().progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(mode_color(app)))
        .ratio(progress);

    frame.render_widget(gauge, area);
}

fn render_details(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let settings = app.controller().settings();
    let saved = app.summary.sessions.len();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Focus ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{} min", settings.focus_minutes())),
            Span::styled("   Break ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{} min", settings.break_minutes())),
        ]),
        Line::from(vec![
            Span::styled("Sessions saved ", Style::default().fg(Color::DarkGray)),
            Span::raw(saved.to_string()),
        ]),
    ];

    if let Some(started) = app.controller().open_session_start() {
        lines.push(Line::from(vec![
            Span::styled("Session started ", Style::default().fg(Color::DarkGray)),
            Span::raw(
                started
                    .with_timezone(&chrono::Local)
                    .format("%H:%M")
                    .to_string(),
            ),
        ]));
    }

    let details = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(details, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("s:start | p:pause | n:skip | x:stop | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
