use crate::catalog::{Catalog, department_options};
use crate::state::{ContractViolation, DepartmentSurface, FilterEvent, LoadState, Session};

use super::filter::refresh_view;
use super::sync::publish_department;

/// What: Install a freshly loaded catalog into the session.
///
/// Inputs:
/// - `session`: Session still in `Loading`
/// - `catalog`: Catalog returned by the loader
///
/// Output:
/// - Sets `Ready`, derives the Department Option Set, republishes both surfaces,
///   and recomputes the view under the current filters.
///
/// Details:
/// - A department typed in before the catalog arrived cannot exist (the option set
///   was empty), so filters set while loading carry over unchanged.
pub fn install_catalog(session: &mut Session, catalog: Catalog) {
    session.department_options = department_options(&catalog);
    session.catalog = catalog;
    session.load_state = LoadState::Ready;
    publish_department(session);
    refresh_view(session);
    tracing::info!(
        courses = session.catalog.len(),
        departments = session.department_options.len(),
        "catalog installed"
    );
}

/// What: Record a terminal load failure.
///
/// Inputs:
/// - `session`: Session still in `Loading`
/// - `message`: Error text for the status line
///
/// Output:
/// - `LoadState::Failed`; the catalog stays empty for the rest of the session.
pub fn fail_load(session: &mut Session, message: String) {
    tracing::error!(error = %message, "Error loading courses");
    session.load_state = LoadState::Failed(message);
    refresh_view(session);
}

/// What: Store new search text and recompute.
///
/// Inputs:
/// - `session`: Session to mutate
/// - `text`: Raw text from the search box
///
/// Output:
/// - `input` keeps the raw text; the filter keeps it lower-cased.
///
/// Details:
/// - Empty text means no text filter, never "match nothing".
pub fn set_search_text(session: &mut Session, text: &str) {
    session.input = text.to_string();
    session.filter.search = text.to_lowercase();
    refresh_view(session);
}

/// What: Select a department from either surface.
///
/// Inputs:
/// - `session`: Session to mutate
/// - `value`: `""` for "All" or a member of the Department Option Set
/// - `origin`: Surface that emitted the change
///
/// Output:
/// - `Ok(())` after writing the field, republishing both surfaces and recomputing;
///   `Err(ContractViolation::UnknownDepartment)` otherwise.
///
/// # Errors
/// - `value` is neither empty nor a known department; the session is left untouched
pub fn set_department(
    session: &mut Session,
    value: &str,
    origin: DepartmentSurface,
) -> Result<(), ContractViolation> {
    let department = if value.is_empty() {
        None
    } else if session.department_options.iter().any(|d| d == value) {
        Some(value.to_string())
    } else {
        tracing::warn!(
            department = %value,
            origin = origin.as_str(),
            "rejected department outside option set"
        );
        return Err(ContractViolation::UnknownDepartment(value.to_string()));
    };
    session.filter.department = department;
    publish_department(session);
    refresh_view(session);
    Ok(())
}

/// What: Select a level filter.
///
/// Inputs:
/// - `session`: Session to mutate
/// - `value`: `""` for "All", the string form of some course's level, or a menu entry
///
/// Output:
/// - `Ok(())` after recomputing; `Err(ContractViolation::UnknownLevel)` otherwise.
///
/// Details:
/// - Levels present in the catalog are accepted even when the menu does not list them;
///   the level cursor then stays on "All".
///
/// # Errors
/// - `value` is neither empty, a catalog level, nor a menu entry; the session is left untouched
pub fn set_level(session: &mut Session, value: &str) -> Result<(), ContractViolation> {
    let known = session.level_options.iter().any(|l| l == value)
        || session
            .catalog
            .courses()
            .iter()
            .any(|c| c.level.to_string() == value);
    let level = if value.is_empty() {
        None
    } else if known {
        Some(value.to_string())
    } else {
        tracing::warn!(level = %value, "rejected level outside option set");
        return Err(ContractViolation::UnknownLevel(value.to_string()));
    };
    session.level_cursor = level
        .as_deref()
        .and_then(|l| session.level_options.iter().position(|o| o == l))
        .map_or(0, |i| i + 1);
    session.filter.level = level;
    refresh_view(session);
    Ok(())
}

/// What: Reset every filter to "no filter".
///
/// Inputs:
/// - `session`: Session to mutate
///
/// Output:
/// - Empty search, "All" department on both surfaces, "All" level, full view.
///
/// Details:
/// - Idempotent; a second call yields the same view.
pub fn clear_all(session: &mut Session) {
    session.input.clear();
    session.filter.search.clear();
    session.filter.department = None;
    session.filter.level = None;
    session.level_cursor = 0;
    session.dropdown_open = false;
    publish_department(session);
    refresh_view(session);
}

/// What: Single mutation path for all filter input.
///
/// Inputs:
/// - `session`: Session to mutate
/// - `event`: One of the four filter events
///
/// Output:
/// - Result of the underlying operation.
///
/// # Errors
/// - Propagates [`ContractViolation`] from department or level changes
pub fn apply(session: &mut Session, event: FilterEvent) -> Result<(), ContractViolation> {
    match event {
        FilterEvent::TextChanged(text) => {
            set_search_text(session, &text);
            Ok(())
        }
        FilterEvent::DepartmentChanged { value, origin } => {
            set_department(session, &value, origin)
        }
        FilterEvent::LevelChanged(value) => set_level(session, &value),
        FilterEvent::ClearRequested => {
            clear_all(session);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Course, Scalar};
    use crate::logic::surfaces_consistent;

    fn course(code: &str, dept: &str, level: u32) -> Course {
        Course {
            course_code: code.into(),
            title: format!("{code} course"),
            department: dept.into(),
            level: Scalar::from(level),
            ..Default::default()
        }
    }

    fn ready_session() -> Session {
        let mut s = Session::default();
        install_catalog(
            &mut s,
            Catalog::new(vec![
                course("CS101", "CS", 100),
                course("MATH210", "MATH", 200),
                course("CS250", "CS", 200),
            ]),
        );
        s
    }

    fn codes(s: &Session) -> Vec<&str> {
        s.visible_courses().map(|c| c.course_code.as_str()).collect()
    }

    #[test]
    /// What: Installing a catalog shows everything and publishes "All"
    ///
    /// - Input: Three-course catalog
    /// - Output: Full view, sorted department options, consistent surfaces
    fn install_catalog_shows_full_view() {
        let s = ready_session();
        assert_eq!(codes(&s), vec!["CS101", "MATH210", "CS250"]);
        assert_eq!(s.department_options, vec!["CS", "MATH"]);
        assert_eq!(s.load_state, LoadState::Ready);
        assert_eq!(s.dropdown.active_index(), Some(0));
        assert!(surfaces_consistent(&s));
    }

    #[test]
    /// What: Rejected department leaves the session untouched
    ///
    /// - Input: `set_department("PHYS")` after selecting MATH
    /// - Output: `UnknownDepartment` error; MATH still selected; revision unchanged
    fn set_department_rejects_unknown() {
        let mut s = ready_session();
        set_department(&mut s, "MATH", DepartmentSurface::Dropdown).expect("known department");
        let rev = s.revision;
        let err = set_department(&mut s, "PHYS", DepartmentSurface::Buttons);
        assert_eq!(err, Err(ContractViolation::UnknownDepartment("PHYS".into())));
        assert_eq!(s.filter.department.as_deref(), Some("MATH"));
        assert_eq!(s.revision, rev);
        assert!(surfaces_consistent(&s));
    }

    #[test]
    /// What: Unknown level is rejected, known level filters
    ///
    /// - Input: `set_level("150")` then `set_level("200")`
    /// - Output: Error first; then only 200-level courses
    fn set_level_validates_against_menu() {
        let mut s = ready_session();
        assert_eq!(
            set_level(&mut s, "150"),
            Err(ContractViolation::UnknownLevel("150".into()))
        );
        set_level(&mut s, "200").expect("menu level");
        assert_eq!(codes(&s), vec!["MATH210", "CS250"]);
        assert_eq!(s.level_cursor, 2);
    }

    #[test]
    /// What: Catalog levels outside the menu are still selectable
    ///
    /// - Input: Courses at levels 150 and 100; `set_level("150")`, then `set_level("175")`
    /// - Output: Only the 150 course; "175" rejected and the filter stays on 150
    fn set_level_accepts_catalog_level_off_menu() {
        let mut s = Session::default();
        install_catalog(
            &mut s,
            Catalog::new(vec![course("CS150", "CS", 150), course("CS101", "CS", 100)]),
        );
        set_level(&mut s, "150").expect("level present in catalog");
        assert_eq!(codes(&s), vec!["CS150"]);
        assert_eq!(s.filter.level.as_deref(), Some("150"));
        assert_eq!(s.level_cursor, 0);
        assert_eq!(
            set_level(&mut s, "175"),
            Err(ContractViolation::UnknownLevel("175".into()))
        );
        assert_eq!(s.filter.level.as_deref(), Some("150"));
    }

    #[test]
    /// What: Search text is stored lower-cased and raw input kept
    ///
    /// - Input: `set_search_text("CS2")`
    /// - Output: Filter "cs2", input "CS2", view [CS250]
    fn set_search_text_normalizes() {
        let mut s = ready_session();
        set_search_text(&mut s, "CS2");
        assert_eq!(s.filter.search, "cs2");
        assert_eq!(s.input, "CS2");
        assert_eq!(codes(&s), vec!["CS250"]);
    }

    #[test]
    /// What: Operations before the catalog arrives act on an empty catalog
    ///
    /// - Input: Loading session; search, "All" department, clear
    /// - Output: Empty view, no errors; unknown department rejected
    fn operations_before_load_are_empty() {
        let mut s = Session::default();
        set_search_text(&mut s, "cs");
        assert!(s.view.is_empty());
        assert!(set_department(&mut s, "", DepartmentSurface::Dropdown).is_ok());
        assert!(set_department(&mut s, "CS", DepartmentSurface::Dropdown).is_err());
        clear_all(&mut s);
        assert!(s.view.is_empty());
        assert_eq!(s.stats.total, 0);
    }

    #[test]
    /// What: Load failure is terminal and keeps the view empty
    ///
    /// - Input: `fail_load` with a message
    /// - Output: `Failed` state, empty view
    fn fail_load_sets_failed_state() {
        let mut s = Session::default();
        fail_load(&mut s, "boom".into());
        assert_eq!(s.load_state, LoadState::Failed("boom".into()));
        assert!(s.view.is_empty());
    }

    #[test]
    /// What: `apply` routes every event kind
    ///
    /// - Input: Text, department from buttons, level, clear
    /// - Output: Views narrow and then reset; surfaces stay consistent
    fn apply_routes_events() {
        let mut s = ready_session();
        apply(&mut s, FilterEvent::TextChanged("cs".into())).expect("text");
        assert_eq!(codes(&s), vec!["CS101", "CS250"]);
        apply(
            &mut s,
            FilterEvent::DepartmentChanged {
                value: "CS".into(),
                origin: DepartmentSurface::Buttons,
            },
        )
        .expect("department");
        assert_eq!(s.dropdown.active_index(), Some(1));
        apply(&mut s, FilterEvent::LevelChanged("100".into())).expect("level");
        assert_eq!(codes(&s), vec!["CS101"]);
        apply(&mut s, FilterEvent::ClearRequested).expect("clear");
        assert_eq!(codes(&s), vec!["CS101", "MATH210", "CS250"]);
        assert!(s.input.is_empty());
        assert!(surfaces_consistent(&s));
    }
}
