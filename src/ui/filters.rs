use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{Focus, Rect4, Session};
use crate::theme::{Theme, theme};
use crate::util::truncate_to_width;

/// Bordered block whose title and border follow the focus state.
fn focus_block(title: &str, focused: bool, th: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            if focused {
                format!("{title} (focused)")
            } else {
                title.to_string()
            },
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }))
}

/// What: Render the search box and place the terminal cursor in it.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `session`: Session (records `search_rect`)
/// - `area`: Target rect
///
/// Output:
/// - Draws `> text` inside a bordered block.
pub(super) fn render_search(f: &mut Frame, session: &mut Session, area: Rect) {
    let th = theme();
    let focused = session.focus == Focus::Search;
    let line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            session.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let p = Paragraph::new(line)
        .style(Style::default().bg(th.base))
        .block(focus_block("Search", focused, &th));
    f.render_widget(p, area);
    session.search_rect = Some((area.x, area.y, area.width, area.height));

    if focused {
        let input_w = u16::try_from(session.input.width()).unwrap_or(u16::MAX);
        let right = area.x + area.width.saturating_sub(2);
        let x = (area.x + 3).saturating_add(input_w).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// What: Render the collapsed department dropdown control.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `session`: Session (records `dropdown_rect`)
/// - `area`: Target rect
///
/// Output:
/// - Shows the label of the dropdown's active indicator with a `▾` marker.
pub(super) fn render_dropdown_control(f: &mut Frame, session: &mut Session, area: Rect) {
    let th = theme();
    let focused = session.focus == Focus::Dropdown;
    let active = session.dropdown.active_index().unwrap_or(0);
    let label = session.department_entry_label(active);
    let marker = if session.dropdown_open { " ▴" } else { " ▾" };
    let inner_w = usize::from(area.width.saturating_sub(2 + 2));
    let line = Line::from(vec![
        Span::styled(
            truncate_to_width(label, inner_w),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(marker, Style::default().fg(th.overlay1)),
    ]);
    let p = Paragraph::new(line)
        .style(Style::default().bg(th.base))
        .block(focus_block("Department", focused, &th));
    f.render_widget(p, area);
    session.dropdown_rect = Some((area.x, area.y, area.width, area.height));
}

/// Lay out labelled chips on one row, returning spans and per-entry rects.
///
/// Stops before the first chip that would overflow `inner`; the caller gets the
/// number of entries that did not fit.
fn chip_row(
    labels: &[(usize, &str, bool, bool)],
    inner: Rect,
    th: &Theme,
) -> (Vec<Span<'static>>, Vec<(usize, Rect4)>, usize) {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut rects: Vec<(usize, Rect4)> = Vec::new();
    let mut x = inner.x;
    let end = inner.x + inner.width;
    for (pos, (idx, label, active, cursor)) in labels.iter().enumerate() {
        let text = format!(" {label} ");
        let w = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let reserve = if pos + 1 < labels.len() { 6 } else { 0 };
        if x.saturating_add(w).saturating_add(reserve) > end {
            return (spans, rects, labels.len() - pos);
        }
        let mut style = if *active {
            Style::default()
                .fg(th.crust)
                .bg(th.lavender)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text).bg(th.surface1)
        };
        if *cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
        rects.push((*idx, (x, inner.y, w, 1)));
        x = x.saturating_add(w + 1);
    }
    (spans, rects, 0)
}

/// What: Render the department button group.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `session`: Session (records `department_button_rects`)
/// - `area`: Target rect
///
/// Output:
/// - One chip per entry ("All" first); the published active chip is highlighted.
///
/// Details:
/// - Chips that do not fit are summarized as `+N`; the dropdown still reaches them.
pub(super) fn render_department_buttons(f: &mut Frame, session: &mut Session, area: Rect) {
    let th = theme();
    let focused = session.focus == Focus::Buttons;
    let entries: Vec<(usize, &str, bool, bool)> = (0..session.department_entries())
        .map(|i| {
            (
                i,
                session.department_entry_label(i),
                session.buttons.is_active(i),
                focused && session.button_cursor == i,
            )
        })
        .collect();
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let (mut spans, rects, hidden) = chip_row(&entries, inner, &th);
    if hidden > 0 {
        spans.push(Span::styled(
            format!("+{hidden}"),
            Style::default().fg(th.overlay1),
        ));
    }
    let p = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(th.base))
        .block(focus_block("Departments", focused, &th));
    f.render_widget(p, area);
    session.department_button_rects = rects;
}

/// What: Render the level menu.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `session`: Session (records `level_rects`)
/// - `area`: Target rect
///
/// Output:
/// - One chip per level entry ("All" first); the selected level is highlighted.
///   A level filter missing from the menu highlights no chip.
pub(super) fn render_levels(f: &mut Frame, session: &mut Session, area: Rect) {
    let th = theme();
    let focused = session.focus == Focus::Levels;
    let selected = session.filter.level.as_deref().map_or(Some(0), |l| {
        session
            .level_options
            .iter()
            .position(|o| o == l)
            .map(|i| i + 1)
    });
    let entries: Vec<(usize, &str, bool, bool)> = (0..=session.level_options.len())
        .map(|i| {
            (
                i,
                session.level_entry_label(i),
                selected == Some(i),
                focused && session.level_cursor == i,
            )
        })
        .collect();
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let (mut spans, rects, hidden) = chip_row(&entries, inner, &th);
    if hidden > 0 {
        spans.push(Span::styled(
            format!("+{hidden}"),
            Style::default().fg(th.overlay1),
        ));
    }
    let p = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(th.base))
        .block(focus_block("Level", focused, &th));
    f.render_widget(p, area);
    session.level_rects = rects;
}
