use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::catalog::Course;
use crate::state::{Focus, LoadState, Session};
use crate::theme::theme;

/// What: Render the course list and, when enabled, the details pane.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `session`: Session (records `results_rect`)
/// - `area`: Target rect
///
/// Output:
/// - One row per visible course: code, title, department badge and credits.
///
/// Details:
/// - An empty view shows the load error, the loading notice, or "No courses found
///   matching your criteria." depending on the load state.
pub(super) fn render_results(f: &mut Frame, session: &mut Session, area: Rect) {
    let th = theme();
    let (list_area, details_area) = if session.show_details_pane {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (cols[0], Some(cols[1]))
    } else {
        (area, None)
    };

    let focused = session.focus == Focus::Results;
    let block = Block::default()
        .title(Span::styled(
            format!("Courses ({})", session.stats.matching),
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }));
    session.results_rect = Some((
        list_area.x + 1,
        list_area.y + 1,
        list_area.width.saturating_sub(2),
        list_area.height.saturating_sub(2),
    ));

    if session.view.is_empty() {
        let (msg, color) = match &session.load_state {
            LoadState::Loading => ("Loading courses…".to_string(), th.overlay1),
            LoadState::Failed(_) => (
                "Error loading courses. Please try again.".to_string(),
                th.red,
            ),
            LoadState::Ready => (
                "No courses found matching your criteria.".to_string(),
                th.yellow,
            ),
        };
        let p = Paragraph::new(Line::from(Span::styled(msg, Style::default().fg(color))))
            .style(Style::default().bg(th.base))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(p, list_area);
    } else {
        let items: Vec<ListItem> = session
            .visible_courses()
            .map(|c| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<10} ", c.course_code),
                        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(c.title.clone(), Style::default().fg(th.text)),
                    Span::raw("  "),
                    Span::styled(format!("[{}]", c.department), Style::default().fg(th.green)),
                    Span::styled(format!(" {} cr", c.credits), Style::default().fg(th.overlay2)),
                ]))
            })
            .collect();
        let list = List::new(items)
            .style(Style::default().fg(th.text).bg(th.base))
            .block(block)
            .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, list_area, &mut session.list_state);
    }

    if let Some(details_area) = details_area {
        render_details(f, session, details_area);
    }
}

/// Build the details pane lines for one course.
fn details_lines(session: &Session, c: &Course) -> Vec<Line<'static>> {
    let th = theme();
    let label = |s: &str| Span::styled(format!("{s}: "), Style::default().fg(th.overlay1));
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                c.course_code.clone(),
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                c.title.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Department"),
            Span::styled(c.department.clone(), Style::default().fg(th.green)),
        ]),
        Line::from(vec![
            label("Level"),
            Span::styled(c.level.to_string(), Style::default().fg(th.text)),
            Span::raw("   "),
            label("Credits"),
            Span::styled(c.credits.to_string(), Style::default().fg(th.text)),
        ]),
    ];
    let mut terms = vec![label("Terms")];
    for t in &c.terms {
        terms.push(Span::styled(
            format!(" {t} "),
            Style::default().fg(th.crust).bg(th.mauve),
        ));
        terms.push(Span::raw(" "));
    }
    lines.push(Line::from(terms));
    if !c.prerequisites.is_empty() {
        let mut prereq = vec![label("Prerequisites")];
        for (i, code) in c.prerequisites.iter().enumerate() {
            if i > 0 {
                prereq.push(Span::raw(", "));
            }
            // Unknown codes are shown but dimmed; they are never validated.
            let known = session.catalog.course_by_code(code).is_some();
            prereq.push(Span::styled(
                code.clone(),
                Style::default().fg(if known { th.yellow } else { th.overlay1 }),
            ));
        }
        lines.push(Line::from(prereq));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        c.description.clone(),
        Style::default().fg(th.subtext0),
    )));
    lines
}

/// Render the details pane for the highlighted course.
fn render_details(f: &mut Frame, session: &Session, area: Rect) {
    let th = theme();
    let lines = session
        .selected_course()
        .map(|c| details_lines(session, c))
        .unwrap_or_default();
    let p = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled("Details", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(p, area);
}
