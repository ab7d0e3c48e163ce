use std::collections::HashSet;

use crate::catalog::{Catalog, Course};
use crate::state::{FilterState, Session, Stats};

/// What: Decide whether one course passes the current filters.
///
/// Inputs:
/// - `course`: Candidate course
/// - `filter`: Filter state with lower-cased search text
///
/// Output:
/// - `true` when the search, department and level predicates all hold.
///
/// Details:
/// - Search is a plain substring test against the lower-cased code, title,
///   department and description; no tokenizing or fuzzy matching.
/// - Department is an exact, case-sensitive comparison.
/// - Level compares string forms, so `"100"` only matches a level rendering as `100`.
#[must_use]
pub fn course_matches(course: &Course, filter: &FilterState) -> bool {
    let search = filter.search.as_str();
    let matches_search = search.is_empty()
        || course.course_code.to_lowercase().contains(search)
        || course.title.to_lowercase().contains(search)
        || course.department.to_lowercase().contains(search)
        || course.description.to_lowercase().contains(search);

    let matches_department = filter
        .department
        .as_deref()
        .is_none_or(|d| course.department == d);

    let matches_level = filter
        .level
        .as_deref()
        .is_none_or(|l| course.level.to_string() == l);

    matches_search && matches_department && matches_level
}

/// What: Compute the filtered view.
///
/// Inputs:
/// - `catalog`: Full catalog (may be empty while loading)
/// - `filter`: Current filter state
///
/// Output:
/// - Catalog indices of matching courses, in catalog order.
#[must_use]
pub fn recompute(catalog: &Catalog, filter: &FilterState) -> Vec<usize> {
    catalog
        .courses()
        .iter()
        .enumerate()
        .filter(|(_, c)| course_matches(c, filter))
        .map(|(i, _)| i)
        .collect()
}

/// What: Derive the stats pair shown next to the list.
///
/// Inputs:
/// - `catalog`: Full catalog
/// - `view`: Indices produced by [`recompute`]
///
/// Output:
/// - Match count, distinct departments among matches, and catalog size.
#[must_use]
pub fn compute_stats(catalog: &Catalog, view: &[usize]) -> Stats {
    let departments: HashSet<&str> = view
        .iter()
        .filter_map(|&i| catalog.get(i))
        .map(|c| c.department.as_str())
        .collect();
    Stats {
        matching: view.len(),
        departments: departments.len(),
        total: catalog.len(),
    }
}

/// What: Recompute the session's view, stats and revision, preserving the highlight.
///
/// Inputs:
/// - `session`: Session whose filter state was just changed
///
/// Output:
/// - Updates `view`, `stats`, `revision`, `selected` and `list_state`.
///
/// Details:
/// - The highlighted course is kept by code when it is still visible; otherwise the
///   index is clamped, or cleared when the view is empty.
pub fn refresh_view(session: &mut Session) {
    let prev_code = session.selected_course().map(|c| c.course_code.clone());

    session.view = recompute(&session.catalog, &session.filter);
    session.stats = compute_stats(&session.catalog, &session.view);
    session.revision = session.revision.wrapping_add(1);

    let kept = prev_code.and_then(|code| {
        session
            .visible_courses()
            .position(|c| c.course_code == code)
    });
    if let Some(pos) = kept {
        session.selected = pos;
        session.list_state.select(Some(pos));
    } else if session.view.is_empty() {
        session.selected = 0;
        session.list_state.select(None);
    } else {
        session.selected = session.selected.min(session.view.len() - 1);
        session.list_state.select(Some(session.selected));
    }
    tracing::debug!(
        revision = session.revision,
        matching = session.stats.matching,
        departments = session.stats.departments,
        "filtered view recomputed"
    );
}
