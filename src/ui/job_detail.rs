//! Job detail screen rendering
//!
//! Shows the selected listing in full: header with title and company, a
//! metadata block, skill tags, and the scrollable description.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::JobListing;
use crate::ui::warning_banner;

/// Renders the detail view for the currently selected job
pub fn render(frame: &mut Frame, app: &App) {
    let Some(job) = app.selected_job() else {
        // Selection can vanish if filters changed underneath the view
        let fallback = Paragraph::new("No job selected (press Esc)")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(fallback, frame.area());
        return;
    };

    let has_banner = app.warning.is_some();
    let banner_height = if has_banner { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    if let Some(warning) = &app.warning {
        frame.render_widget(Paragraph::new(warning_banner(warning)), chunks[0]);
    }

    render_header(frame, job, chunks[1]);
    render_description(frame, job, app.detail_scroll, chunks[2]);

    let footer = Paragraph::new("j/k scroll · Esc back · q quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);
}

fn render_header(frame: &mut Frame, job: &JobListing, area: Rect) {
    let skills = if job.skills.is_empty() {
        "-".to_string()
    } else {
        job.skills.join(", ")
    };

    let lines = vec![
        Line::from(Span::styled(
            job.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(job.company.clone(), Style::default().fg(Color::Cyan)),
            Span::raw(" · "),
            Span::raw(job.location.clone()),
            Span::raw(" · "),
            Span::styled(
                job.employment_type.clone(),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(vec![
            Span::styled(job.salary_range.clone(), Style::default().fg(Color::Green)),
            Span::raw("  ·  "),
            Span::styled(
                format!("posted {}", job.posted_date),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("skills: ", Style::default().fg(Color::DarkGray)),
            Span::raw(skills),
        ]),
    ];

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_description(frame: &mut Frame, job: &JobListing, scroll: u16, area: Rect) {
    let description = if job.description.is_empty() {
        "No description provided."
    } else {
        job.description.as_str()
    };

    let paragraph = Paragraph::new(description)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(" Description "));
    frame.render_widget(paragraph, area);
}
