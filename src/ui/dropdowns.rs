use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::Session;
use crate::theme::theme;

/// What: Render the expanded department dropdown on the overlay layer.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `session`: Session (records `dropdown_menu_rect` and `dropdown_scroll`)
/// - `screen`: Full frame area used for clamping
///
/// Output:
/// - Draws the option list below the dropdown control when expanded.
///
/// Details:
/// - The published active entry is marked `●`; the keyboard highlight is drawn inverted.
/// - The list scrolls so the highlight stays visible; the scroll offset is kept for
///   mouse hit-testing.
pub(super) fn render_dropdown_menu(f: &mut Frame, session: &mut Session, screen: Rect) {
    session.dropdown_menu_rect = None;
    if !session.dropdown_open {
        return;
    }
    let Some((cx, cy, cw, ch)) = session.dropdown_rect else {
        return;
    };
    let th = theme();
    let entries = session.department_entries();

    let widest = (0..entries)
        .map(|i| u16::try_from(session.department_entry_label(i).width()).unwrap_or(u16::MAX))
        .max()
        .unwrap_or(0);
    // marker + space + label + padding + borders
    let rect_w = widest
        .saturating_add(4)
        .saturating_add(2)
        .max(cw)
        .min(screen.width);
    let top = cy.saturating_add(ch);
    let avail_h = screen.y.saturating_add(screen.height).saturating_sub(top);
    if avail_h < 3 {
        return;
    }
    let rows = u16::try_from(entries).unwrap_or(u16::MAX).min(avail_h - 2);
    let max_x = screen.x + screen.width.saturating_sub(rect_w);
    let rect = Rect {
        x: cx.min(max_x),
        y: top,
        width: rect_w,
        height: rows + 2,
    };

    // Keep the highlight inside the visible window
    let visible = usize::from(rows);
    if session.dropdown_cursor < session.dropdown_scroll {
        session.dropdown_scroll = session.dropdown_cursor;
    } else if session.dropdown_cursor >= session.dropdown_scroll + visible {
        session.dropdown_scroll = session.dropdown_cursor + 1 - visible;
    }
    session.dropdown_scroll = session.dropdown_scroll.min(entries.saturating_sub(visible));

    let lines: Vec<Line> = (session.dropdown_scroll..entries)
        .take(visible)
        .map(|i| {
            let marker = if session.dropdown.is_active(i) { "● " } else { "  " };
            let style = if i == session.dropdown_cursor {
                Style::default()
                    .fg(th.crust)
                    .bg(th.lavender)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.text)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(th.green)),
                Span::styled(session.department_entry_label(i).to_string(), style),
            ])
        })
        .collect();

    session.dropdown_menu_rect = Some((rect.x + 1, rect.y + 1, rect.width.saturating_sub(2), rows));
    let menu = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .style(Style::default().bg(th.base))
                .title(Span::styled(" Department ", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.mauve)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(menu, rect);
}
