//! Job list screen rendering
//!
//! Renders the main list view: an optional warning banner, a filter/sort
//! status line, the selectable job rows, and a key-hint footer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::JobListing;
use crate::ui::warning_banner;

/// Renders the job list view
pub fn render(frame: &mut Frame, app: &App) {
    let has_banner = app.warning.is_some();
    let banner_height = if has_banner { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    if let Some(warning) = &app.warning {
        frame.render_widget(Paragraph::new(warning_banner(warning)), chunks[0]);
    }

    render_status_line(frame, app, chunks[1]);
    render_jobs(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

/// Active filters, sort order and refresh time in one line
fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Jobs ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("({}) ", app.visible_jobs().len())),
        Span::styled(
            format!("sort: {} ", app.sort_order.label()),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(employment_type) = &app.type_filter {
        spans.push(Span::styled(
            format!("type: {} ", employment_type),
            Style::default().fg(Color::Magenta),
        ));
    }
    if let Some(location) = &app.location_filter {
        spans.push(Span::styled(
            format!("location: {} ", location),
            Style::default().fg(Color::Magenta),
        ));
    }
    if app.search_mode || !app.search.is_empty() {
        let cursor = if app.search_mode { "_" } else { "" };
        spans.push(Span::styled(
            format!("search: {}{} ", app.search, cursor),
            Style::default().fg(Color::Green),
        ));
    }
    if let Some(refreshed) = app.last_refresh {
        spans.push(Span::styled(
            format!("refreshed {}", refreshed.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_jobs(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_jobs();

    if visible.is_empty() {
        let message = if app.jobs.is_empty() {
            "No jobs available"
        } else {
            "No jobs match the current filters (press c to clear)"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Listings "));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible.iter().map(|job| job_row(job)).collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Listings "))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index.min(visible.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

/// One list row: title, company/location, salary and type
fn job_row(job: &JobListing) -> ListItem<'static> {
    let title_line = Line::from(vec![
        Span::styled(
            job.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(job.salary_range.clone(), salary_style(&job.salary_range)),
    ]);
    let meta_line = Line::from(vec![
        Span::styled(job.company.clone(), Style::default().fg(Color::Cyan)),
        Span::raw(" · "),
        Span::raw(job.location.clone()),
        Span::raw(" · "),
        Span::styled(
            job.employment_type.clone(),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw(" · "),
        Span::styled(
            format!("posted {}", job.posted_date),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    ListItem::new(vec![title_line, meta_line])
}

fn salary_style(salary_range: &str) -> Style {
    if salary_range == "Not specified" {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green)
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.search_mode {
        "type to search · Enter/Esc done"
    } else {
        "j/k move · Enter details · / search · t type · l location · s sort · c clear · q quit"
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
