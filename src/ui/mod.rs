//! UI rendering module for jobdeck
//!
//! Rendering logic for the terminal user interface, using ratatui. The
//! warning banner is deliberately non-blocking: degraded data renders the
//! same list with a colored line above it.

pub mod job_detail;
pub mod job_list;

pub use job_detail::render as render_job_detail;
pub use job_list::render as render_job_list;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::feed::FeedWarning;

/// Renders the feed warning as a one-line banner, red for the hard no-data
/// error and yellow for soft degradation warnings, tagged with the stable
/// warning kind.
pub fn warning_banner(warning: &FeedWarning) -> Line<'static> {
    let color = if warning.is_error() {
        Color::Red
    } else {
        Color::Yellow
    };
    Line::from(vec![
        Span::styled(format!("⚠ {} ", warning), Style::default().fg(color)),
        Span::styled(
            format!("({})", warning.kind()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
