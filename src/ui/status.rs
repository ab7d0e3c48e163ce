use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{LoadState, Session};
use crate::theme::theme;

/// What: Compose the stats text for the status line.
///
/// Inputs:
/// - `session`: Session with current stats and load state
///
/// Output:
/// - Loading notice, error text, "No courses found", or
///   "Showing N of M courses · D departments".
#[must_use]
pub fn status_text(session: &Session) -> String {
    match &session.load_state {
        LoadState::Loading => format!("Loading courses from {}…", session.catalog_label),
        LoadState::Failed(msg) => format!("Error loading courses: {msg}"),
        LoadState::Ready if session.stats.matching == 0 => "No courses found".to_string(),
        LoadState::Ready => {
            let st = session.stats;
            format!(
                "Showing {} of {} courses · {} {}",
                st.matching,
                st.total,
                st.departments,
                if st.departments == 1 {
                    "department"
                } else {
                    "departments"
                }
            )
        }
    }
}

/// Render the one-line status bar with stats and key hints.
pub(super) fn render_status(f: &mut Frame, session: &Session, area: Rect) {
    let th = theme();
    let color = match session.load_state {
        LoadState::Failed(_) => th.red,
        _ => th.subtext0,
    };
    let line = Line::from(vec![
        Span::styled(status_text(session), Style::default().fg(color)),
        Span::styled(
            "   Tab focus · Ctrl+L clear · Ctrl+C quit",
            Style::default().fg(th.overlay1),
        ),
    ]);
    f.render_widget(Paragraph::new(line).style(Style::default().bg(th.base)), area);
}
