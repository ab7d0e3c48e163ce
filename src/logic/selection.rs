use crate::state::Session;

/// Move the course highlight by `delta`, clamped to the filtered view.
///
/// Does nothing when the view is empty.
pub fn move_selection(session: &mut Session, delta: isize) {
    if session.view.is_empty() {
        return;
    }
    let last = session.view.len() - 1;
    session.selected = session.selected.saturating_add_signed(delta).min(last);
    session.list_state.select(Some(session.selected));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Course};

    #[test]
    /// What: Selection clamps at both ends
    ///
    /// - Input: Three visible courses; move -1, +10, -1
    /// - Output: 0, 2, 1
    fn move_selection_clamps() {
        let mut s = Session::default();
        crate::logic::install_catalog(
            &mut s,
            Catalog::new(vec![Course::default(), Course::default(), Course::default()]),
        );
        move_selection(&mut s, -1);
        assert_eq!(s.selected, 0);
        move_selection(&mut s, 10);
        assert_eq!(s.selected, 2);
        move_selection(&mut s, -1);
        assert_eq!(s.list_state.selected(), Some(1));
    }
}
