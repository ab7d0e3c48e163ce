//! Event handling layer for Coursea's TUI.
//!
//! Terminal key and mouse events are translated into [`FilterEvent`]s and fed
//! through [`crate::logic::apply`], the single mutation path for filter state.
//! Pure navigation (focus, cursors, list highlight) is handled here directly.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::state::{DepartmentSurface, FilterEvent, Focus, Session};

mod keys;
mod mouse;

/// What: Feed one filter event through the controller.
///
/// Inputs:
/// - `session`: Session to mutate
/// - `event`: Filter event produced by a key or click
///
/// Output:
/// - None; rejected values are already logged by the controller and change nothing.
pub(crate) fn emit(session: &mut Session, event: FilterEvent) {
    if let Err(e) = crate::logic::apply(session, event) {
        tracing::debug!(error = %e, "input event ignored");
    }
}

/// What: Build the department-change event for a surface entry.
///
/// Inputs:
/// - `session`: Session holding the department options
/// - `idx`: Entry index on the surface (0 = "All")
/// - `origin`: Surface the entry belongs to
///
/// Output:
/// - `DepartmentChanged` with `""` for "All" or the option label.
pub(crate) fn department_event(
    session: &Session,
    idx: usize,
    origin: DepartmentSurface,
) -> FilterEvent {
    let value = if idx == 0 {
        String::new()
    } else {
        session.department_entry_label(idx).to_string()
    };
    FilterEvent::DepartmentChanged { value, origin }
}

/// What: Build the level-change event for a level menu entry.
///
/// Inputs:
/// - `session`: Session holding the level menu
/// - `idx`: Entry index (0 = "All")
///
/// Output:
/// - `LevelChanged` with `""` for "All" or the level label.
pub(crate) fn level_event(session: &Session, idx: usize) -> FilterEvent {
    let value = if idx == 0 {
        String::new()
    } else {
        session.level_entry_label(idx).to_string()
    };
    FilterEvent::LevelChanged(value)
}

/// Dispatch a single terminal event and mutate the [`Session`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, session: &mut Session) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            // Global shortcuts regardless of focus
            if ke.modifiers.contains(KeyModifiers::CONTROL) {
                match ke.code {
                    KeyCode::Char('c') => return true,
                    KeyCode::Char('l') => {
                        emit(session, FilterEvent::ClearRequested);
                        return false;
                    }
                    _ => {}
                }
            }
            match ke.code {
                KeyCode::Tab => {
                    session.dropdown_open = false;
                    session.focus = session.focus.next(session.show_department_buttons);
                    return false;
                }
                KeyCode::BackTab => {
                    session.dropdown_open = false;
                    session.focus = session.focus.prev(session.show_department_buttons);
                    return false;
                }
                _ => {}
            }
            match session.focus {
                Focus::Search => keys::handle_search_key(ke, session),
                Focus::Dropdown => keys::handle_dropdown_key(ke, session),
                Focus::Buttons => keys::handle_buttons_key(ke, session),
                Focus::Levels => keys::handle_levels_key(ke, session),
                Focus::Results => keys::handle_results_key(ke, session),
            }
        }
        CEvent::Mouse(m) => {
            mouse::handle_mouse_event(m, session);
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Course};
    use crate::logic::surfaces_consistent;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        })
    }

    fn ctrl(c: char) -> CEvent {
        CEvent::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        })
    }

    pub(super) fn session() -> Session {
        let mk = |code: &str, dept: &str, level: u32| Course {
            course_code: code.into(),
            title: format!("{code} title"),
            department: dept.into(),
            level: level.into(),
            ..Default::default()
        };
        let mut s = Session::default();
        crate::logic::install_catalog(
            &mut s,
            Catalog::new(vec![
                mk("CS101", "CS", 100),
                mk("MATH210", "MATH", 200),
                mk("PHYS300", "PHYS", 300),
            ]),
        );
        s
    }

    #[test]
    /// What: Rejected events leave the session as it was
    ///
    /// - Input: `emit` with department "BIOL" and level "999", neither offered
    /// - Output: No panic; filter, view and revision unchanged
    fn emit_ignores_rejected_events() {
        let mut s = session();
        let before = (s.filter.clone(), s.view.clone(), s.revision);
        emit(
            &mut s,
            FilterEvent::DepartmentChanged {
                value: "BIOL".into(),
                origin: DepartmentSurface::Buttons,
            },
        );
        emit(&mut s, FilterEvent::LevelChanged("999".into()));
        assert_eq!((s.filter.clone(), s.view.clone(), s.revision), before);
        assert!(surfaces_consistent(&s));
    }

    #[test]
    /// What: Typing in the search box filters live
    ///
    /// - Input: Type "ma", then Backspace
    /// - Output: View narrows to MATH210, then widens for "m"
    fn typing_filters_live() {
        let mut s = session();
        assert!(!handle_event(key(KeyCode::Char('M')), &mut s));
        handle_event(key(KeyCode::Char('a')), &mut s);
        assert_eq!(s.input, "Ma");
        assert_eq!(s.view, vec![1]);
        handle_event(key(KeyCode::Backspace), &mut s);
        assert_eq!(s.filter.search, "m");
    }

    #[test]
    /// What: Dropdown and buttons drive the same department value
    ///
    /// - Input: Pick MATH in the dropdown, then PHYS on the buttons
    /// - Output: Both surfaces show the latest pick each time
    fn dropdown_and_buttons_stay_in_sync() {
        let mut s = session();
        handle_event(key(KeyCode::Tab), &mut s);
        assert_eq!(s.focus, Focus::Dropdown);
        handle_event(key(KeyCode::Enter), &mut s);
        assert!(s.dropdown_open);
        handle_event(key(KeyCode::Down), &mut s);
        handle_event(key(KeyCode::Down), &mut s);
        handle_event(key(KeyCode::Enter), &mut s);
        assert!(!s.dropdown_open);
        assert_eq!(s.filter.department.as_deref(), Some("MATH"));
        assert_eq!(s.buttons.active_index(), Some(2));
        assert!(surfaces_consistent(&s));

        handle_event(key(KeyCode::Tab), &mut s);
        assert_eq!(s.focus, Focus::Buttons);
        handle_event(key(KeyCode::Right), &mut s);
        handle_event(key(KeyCode::Enter), &mut s);
        assert_eq!(s.filter.department.as_deref(), Some("PHYS"));
        assert_eq!(s.dropdown.active_index(), Some(3));
        assert!(surfaces_consistent(&s));
    }

    #[test]
    /// What: Ctrl+L clears everything; Ctrl+C exits
    ///
    /// - Input: Search text and level set, then Ctrl+L, then Ctrl+C
    /// - Output: Full view restored; exit requested
    fn ctrl_shortcuts_clear_and_exit() {
        let mut s = session();
        handle_event(key(KeyCode::Char('c')), &mut s);
        emit(&mut s, FilterEvent::LevelChanged("100".into()));
        assert_eq!(s.view, vec![0]);
        assert!(!handle_event(ctrl('l'), &mut s));
        assert_eq!(s.view, vec![0, 1, 2]);
        assert!(s.input.is_empty());
        assert!(handle_event(ctrl('c'), &mut s));
    }

    #[test]
    /// What: Level menu selection via keys
    ///
    /// - Input: Focus levels, Right twice, Enter; then Left twice, Space
    /// - Output: Level "200" then "All"
    fn level_keys_select_levels() {
        let mut s = session();
        s.focus = Focus::Levels;
        handle_event(key(KeyCode::Right), &mut s);
        handle_event(key(KeyCode::Right), &mut s);
        handle_event(key(KeyCode::Enter), &mut s);
        assert_eq!(s.filter.level.as_deref(), Some("200"));
        assert_eq!(s.view, vec![1]);
        handle_event(key(KeyCode::Left), &mut s);
        handle_event(key(KeyCode::Left), &mut s);
        handle_event(key(KeyCode::Char(' ')), &mut s);
        assert_eq!(s.filter.level, None);
    }
}
