//! Per-pane keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::move_selection;
use crate::state::{DepartmentSurface, FilterEvent, Focus, Session};

use super::{department_event, emit, level_event};

/// Rows moved by PageUp/PageDown in the course list.
const PAGE_STEP: isize = 10;

/// What: Handle keys while the search box has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `session`: Session to mutate
///
/// Output:
/// - Always `false` (typing never exits).
///
/// Details:
/// - Printable characters and Backspace edit the text and emit `TextChanged`.
/// - Esc emits `ClearRequested`; Enter/Down move focus to the results.
pub(super) fn handle_search_key(ke: KeyEvent, session: &mut Session) -> bool {
    match ke.code {
        KeyCode::Char(ch) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = session.input.clone();
            text.push(ch);
            emit(session, FilterEvent::TextChanged(text));
        }
        KeyCode::Backspace => {
            let mut text = session.input.clone();
            if text.pop().is_some() {
                emit(session, FilterEvent::TextChanged(text));
            }
        }
        KeyCode::Esc => emit(session, FilterEvent::ClearRequested),
        KeyCode::Enter | KeyCode::Down => session.focus = Focus::Results,
        _ => {}
    }
    false
}

/// Step a cursor within `0..entries` by `delta`, clamping at both ends.
fn step(cursor: usize, delta: isize, entries: usize) -> usize {
    cursor
        .saturating_add_signed(delta)
        .min(entries.saturating_sub(1))
}

/// What: Handle keys while the department dropdown has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `session`: Session to mutate
///
/// Output:
/// - `true` on `q` while collapsed (exit); `false` otherwise.
///
/// Details:
/// - Collapsed: Enter/Space expands; Up/Down pick the neighboring department directly.
/// - Expanded: Up/Down move the highlight; Enter/Space picks; Esc collapses.
pub(super) fn handle_dropdown_key(ke: KeyEvent, session: &mut Session) -> bool {
    let entries = session.department_entries();
    if session.dropdown_open {
        match ke.code {
            KeyCode::Up => session.dropdown_cursor = step(session.dropdown_cursor, -1, entries),
            KeyCode::Down => session.dropdown_cursor = step(session.dropdown_cursor, 1, entries),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let ev = department_event(session, session.dropdown_cursor, DepartmentSurface::Dropdown);
                session.dropdown_open = false;
                emit(session, ev);
            }
            KeyCode::Esc => {
                session.dropdown_open = false;
                session.dropdown_cursor = session.dropdown.active_index().unwrap_or(0);
            }
            _ => {}
        }
        return false;
    }
    match ke.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            session.dropdown_open = true;
            session.dropdown_cursor = session.dropdown.active_index().unwrap_or(0);
        }
        KeyCode::Up | KeyCode::Down => {
            let delta = if ke.code == KeyCode::Up { -1 } else { 1 };
            let current = session.dropdown.active_index().unwrap_or(0);
            let target = step(current, delta, entries);
            if target != current {
                let ev = department_event(session, target, DepartmentSurface::Dropdown);
                emit(session, ev);
            }
        }
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}

/// What: Handle keys while the department button group has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `session`: Session to mutate
///
/// Output:
/// - `true` on `q` (exit); `false` otherwise.
///
/// Details:
/// - Left/Right move the highlight; Enter/Space presses the highlighted button.
pub(super) fn handle_buttons_key(ke: KeyEvent, session: &mut Session) -> bool {
    let entries = session.department_entries();
    match ke.code {
        KeyCode::Left => session.button_cursor = step(session.button_cursor, -1, entries),
        KeyCode::Right => session.button_cursor = step(session.button_cursor, 1, entries),
        KeyCode::Home => session.button_cursor = 0,
        KeyCode::End => session.button_cursor = entries.saturating_sub(1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let ev = department_event(session, session.button_cursor, DepartmentSurface::Buttons);
            emit(session, ev);
        }
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}

/// What: Handle keys while the level menu has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `session`: Session to mutate
///
/// Output:
/// - `true` on `q` (exit); `false` otherwise.
pub(super) fn handle_levels_key(ke: KeyEvent, session: &mut Session) -> bool {
    let entries = session.level_options.len() + 1;
    match ke.code {
        KeyCode::Left => session.level_cursor = step(session.level_cursor, -1, entries),
        KeyCode::Right => session.level_cursor = step(session.level_cursor, 1, entries),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let ev = level_event(session, session.level_cursor);
            emit(session, ev);
        }
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}

/// What: Handle keys while the course list has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `session`: Session to mutate
///
/// Output:
/// - `true` on `q` (exit); `false` otherwise.
///
/// Details:
/// - Arrows, `j`/`k`, PageUp/PageDown, Home/End move the highlight.
/// - `d` toggles the details pane; `/` jumps back to the search box.
pub(super) fn handle_results_key(ke: KeyEvent, session: &mut Session) -> bool {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => move_selection(session, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(session, 1),
        KeyCode::PageUp => move_selection(session, -PAGE_STEP),
        KeyCode::PageDown => move_selection(session, PAGE_STEP),
        KeyCode::Home => move_selection(session, isize::MIN),
        KeyCode::End => move_selection(session, isize::MAX),
        KeyCode::Char('d') => session.show_details_pane = !session.show_details_pane,
        KeyCode::Char('/') => session.focus = Focus::Search,
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}
