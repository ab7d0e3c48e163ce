//! Rendering for Coursea's TUI.
//!
//! The renderer only reads the session's published state (filtered view,
//! stats, surface indicators) and records hit-test rects for the mouse layer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::Session;
use crate::theme::theme;

mod dropdowns;
mod filters;
mod results;
mod status;

pub use status::status_text;

/// What: Draw one full frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `session`: Session state (rects are rewritten during rendering)
///
/// Output:
/// - Renders search, department controls, level menu, course list, details and status.
///
/// Details:
/// - The expanded dropdown is drawn last so it overlays the list.
pub fn ui(f: &mut Frame, session: &mut Session) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let buttons_h: u16 = if session.show_department_buttons { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(buttons_h),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[0]);

    filters::render_search(f, session, top[0]);
    filters::render_dropdown_control(f, session, top[1]);
    if session.show_department_buttons {
        filters::render_department_buttons(f, session, chunks[1]);
    } else {
        session.department_button_rects.clear();
    }
    filters::render_levels(f, session, chunks[2]);
    results::render_results(f, session, chunks[3]);
    status::render_status(f, session, chunks[4]);
    dropdowns::render_dropdown_menu(f, session, area);
}
