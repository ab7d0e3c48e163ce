//! Mouse handling: clicks on department buttons, dropdown rows, level entries
//! and course rows; wheel scrolling in the course list.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::logic::move_selection;
use crate::state::{DepartmentSurface, Focus, Rect4, Session};

use super::{department_event, emit, level_event};

/// Check if a point is within a rectangle (inclusive start, exclusive end).
const fn is_point_in_rect(mx: u16, my: u16, rect: Option<Rect4>) -> bool {
    if let Some((x, y, w, h)) = rect {
        mx >= x && mx < x + w && my >= y && my < y + h
    } else {
        false
    }
}

/// Find the entry index whose recorded rect contains the point.
fn hit_entry(mx: u16, my: u16, rects: &[(usize, Rect4)]) -> Option<usize> {
    rects
        .iter()
        .find(|(_, r)| is_point_in_rect(mx, my, Some(*r)))
        .map(|(idx, _)| *idx)
}

/// What: Handle a single mouse event.
///
/// Inputs:
/// - `m`: Mouse event with position and kind
/// - `session`: Session holding the rects recorded by the last render
///
/// Output:
/// - None; mutates focus, cursors and filter state.
///
/// Details:
/// - An expanded dropdown consumes the click: a row picks that department, anything
///   else just collapses it.
/// - Button, level and course-row clicks also move focus to the clicked control.
pub(super) fn handle_mouse_event(m: MouseEvent, session: &mut Session) {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::ScrollUp if is_point_in_rect(mx, my, session.results_rect) => {
            move_selection(session, -1);
        }
        MouseEventKind::ScrollDown if is_point_in_rect(mx, my, session.results_rect) => {
            move_selection(session, 1);
        }
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(mx, my, session),
        _ => {}
    }
}

/// Route a left click to whichever control was hit.
fn handle_left_click(mx: u16, my: u16, session: &mut Session) {
    if session.dropdown_open {
        session.dropdown_open = false;
        if let Some((_, y, _, _)) = session.dropdown_menu_rect
            && is_point_in_rect(mx, my, session.dropdown_menu_rect)
        {
            let idx = session.dropdown_scroll + usize::from(my - y);
            if idx < session.department_entries() {
                let ev = department_event(session, idx, DepartmentSurface::Dropdown);
                emit(session, ev);
            }
        }
        return;
    }
    if is_point_in_rect(mx, my, session.dropdown_rect) {
        session.focus = Focus::Dropdown;
        session.dropdown_open = true;
        session.dropdown_cursor = session.dropdown.active_index().unwrap_or(0);
        return;
    }
    if let Some(idx) = hit_entry(mx, my, &session.department_button_rects) {
        session.focus = Focus::Buttons;
        let ev = department_event(session, idx, DepartmentSurface::Buttons);
        emit(session, ev);
        return;
    }
    if let Some(idx) = hit_entry(mx, my, &session.level_rects) {
        session.focus = Focus::Levels;
        session.level_cursor = idx;
        let ev = level_event(session, idx);
        emit(session, ev);
        return;
    }
    if is_point_in_rect(mx, my, session.search_rect) {
        session.focus = Focus::Search;
        return;
    }
    if let Some((_, y, _, _)) = session.results_rect
        && is_point_in_rect(mx, my, session.results_rect)
    {
        session.focus = Focus::Results;
        let row = session.list_state.offset() + usize::from(my - y);
        if row < session.view.len() {
            session.selected = row;
            session.list_state.select(Some(row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    /// What: Clicking a department button selects it on both surfaces
    ///
    /// - Input: Button rects for All/CS/MATH/PHYS; click inside MATH
    /// - Output: Department MATH, focus on buttons, dropdown shows MATH
    fn click_department_button() {
        let mut s = super::super::tests::session();
        s.department_button_rects = vec![
            (0, (0, 2, 5, 1)),
            (1, (6, 2, 4, 1)),
            (2, (11, 2, 6, 1)),
            (3, (18, 2, 6, 1)),
        ];
        handle_mouse_event(click(12, 2), &mut s);
        assert_eq!(s.filter.department.as_deref(), Some("MATH"));
        assert_eq!(s.focus, Focus::Buttons);
        assert_eq!(s.dropdown.active_index(), Some(2));
    }

    #[test]
    /// What: Dropdown click opens, row click picks, outside click collapses
    ///
    /// - Input: Click control; click row 3 (PHYS); reopen and click elsewhere
    /// - Output: PHYS selected, then collapsed without change
    fn click_dropdown_rows() {
        let mut s = super::super::tests::session();
        s.dropdown_rect = Some((0, 0, 20, 1));
        s.dropdown_menu_rect = Some((1, 2, 18, 4));
        handle_mouse_event(click(3, 0), &mut s);
        assert!(s.dropdown_open);
        handle_mouse_event(click(5, 5), &mut s);
        assert!(!s.dropdown_open);
        assert_eq!(s.filter.department.as_deref(), Some("PHYS"));
        assert_eq!(s.buttons.active_index(), Some(3));

        handle_mouse_event(click(3, 0), &mut s);
        handle_mouse_event(click(40, 40), &mut s);
        assert!(!s.dropdown_open);
        assert_eq!(s.filter.department.as_deref(), Some("PHYS"));
    }

    #[test]
    /// What: Level click and result row click
    ///
    /// - Input: Click level entry "200"; clear; click second course row
    /// - Output: Level 200 active; then row 1 highlighted
    fn click_level_and_rows() {
        let mut s = super::super::tests::session();
        s.level_rects = vec![(0, (0, 4, 5, 1)), (2, (12, 4, 5, 1))];
        handle_mouse_event(click(13, 4), &mut s);
        assert_eq!(s.filter.level.as_deref(), Some("200"));
        assert_eq!(s.level_cursor, 2);
        handle_mouse_event(click(1, 4), &mut s);
        assert_eq!(s.filter.level, None);

        s.results_rect = Some((0, 10, 40, 10));
        handle_mouse_event(click(4, 11), &mut s);
        assert_eq!(s.selected, 1);
        assert_eq!(s.focus, Focus::Results);
    }
}
