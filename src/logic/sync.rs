//! Publishing the authoritative department value to its surfaces.

use crate::state::Session;

/// What: Entry index of the current department on either surface.
///
/// Inputs:
/// - `session`: Session with installed department options
///
/// Output:
/// - `0` for "All", `i + 1` for department option `i`.
///
/// Details:
/// - A department missing from the option set maps to "All"; the controller never
///   stores such a value, so this only matters for hand-built sessions.
#[must_use]
pub fn department_entry_index(session: &Session) -> usize {
    session
        .filter
        .department
        .as_deref()
        .and_then(|d| session.department_options.iter().position(|o| o == d))
        .map_or(0, |i| i + 1)
}

/// What: Republish `filter.department` to the dropdown and the button group.
///
/// Inputs:
/// - `session`: Session whose department field was just written
///
/// Output:
/// - Both surfaces show exactly one active entry, the same one.
///
/// Details:
/// - Keyboard cursors of both surfaces snap to the published entry.
pub fn publish_department(session: &mut Session) {
    let entries = session.department_entries();
    let active = department_entry_index(session);
    session.dropdown.publish(entries, active);
    session.buttons.publish(entries, active);
    session.dropdown_cursor = active;
    session.button_cursor = active;
}

/// What: Check the synchronization invariant.
///
/// Inputs:
/// - `session`: Any session
///
/// Output:
/// - `true` when both surfaces have exactly one active entry and it matches
///   `filter.department`.
#[must_use]
pub fn surfaces_consistent(session: &Session) -> bool {
    let expected = department_entry_index(session);
    let entries = session.department_entries();
    [&session.dropdown, &session.buttons]
        .into_iter()
        .all(|v| v.len() == entries && v.active_index() == Some(expected))
}
