//! Core value types used by the browsing session.

/// The three-field record driving the filtered view.
///
/// `None` in `department` or `level` means "all"; an empty `search` means no
/// text filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Lower-cased search text.
    pub search: String,
    /// Selected department, exact label.
    pub department: Option<String>,
    /// Selected level, compared against the course level's string form.
    pub level: Option<String>,
}

impl FilterState {
    /// Whether no filter is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.department.is_none() && self.level.is_none()
    }
}

/// Controls that can express the department selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentSurface {
    /// The department dropdown menu.
    Dropdown,
    /// The row of department buttons.
    Buttons,
}

impl DepartmentSurface {
    /// Short label used in log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dropdown => "dropdown",
            Self::Buttons => "buttons",
        }
    }
}

/// What: Rendered selection indicators of one department surface.
///
/// Inputs:
/// - Rewritten only by the controller's publish step.
///
/// Output:
/// - One flag per entry: index 0 is "All", index `i + 1` is department option `i`.
///
/// Details:
/// - Holds no copy of the selected value; it only mirrors what was published.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceView {
    /// Active flag per entry.
    indicators: Vec<bool>,
}

impl SurfaceView {
    /// Overwrite the indicators so that only `active` is set among `entries` slots.
    pub(crate) fn publish(&mut self, entries: usize, active: usize) {
        self.indicators.clear();
        self.indicators.resize(entries, false);
        if let Some(slot) = self.indicators.get_mut(active) {
            *slot = true;
        }
    }

    /// Number of entries (including "All").
    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// Whether the surface has not been published yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Whether entry `idx` is shown as selected.
    #[must_use]
    pub fn is_active(&self, idx: usize) -> bool {
        self.indicators.get(idx).copied().unwrap_or(false)
    }

    /// Number of entries shown as selected.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.indicators.iter().filter(|b| **b).count()
    }

    /// Index of the selected entry when exactly one is selected.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        if self.active_count() == 1 {
            self.indicators.iter().position(|b| *b)
        } else {
            None
        }
    }
}

/// Counts derived from the filtered view after every recompute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of matching courses.
    pub matching: usize,
    /// Distinct departments among the matching courses.
    pub departments: usize,
    /// Catalog size.
    pub total: usize,
}

/// Catalog availability for the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch still pending; behaves as an empty catalog.
    #[default]
    Loading,
    /// Catalog installed.
    Ready,
    /// Fetch failed; terminal for the session.
    Failed(String),
}

/// The four input event kinds the controller reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterEvent {
    /// Search text edited; carries the raw text.
    TextChanged(String),
    /// Department picked on either surface; `""` means "All".
    DepartmentChanged {
        /// Picked department label.
        value: String,
        /// Surface that emitted the change.
        origin: DepartmentSurface,
    },
    /// Level picked; `""` means "All".
    LevelChanged(String),
    /// Clear-filters requested.
    ClearRequested,
}

/// Out-of-domain input to a controller operation.
///
/// Rejected calls leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// Department is not in the Department Option Set.
    #[error("department '{0}' is not in the department option set")]
    UnknownDepartment(String),
    /// Level is not in the level menu.
    #[error("level '{0}' is not in the level option set")]
    UnknownLevel(String),
}

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search text box.
    #[default]
    Search,
    /// Department dropdown.
    Dropdown,
    /// Department button group.
    Buttons,
    /// Level menu.
    Levels,
    /// Course list.
    Results,
}

impl Focus {
    /// Next pane in Tab order, skipping the button group when hidden.
    #[must_use]
    pub const fn next(self, buttons_visible: bool) -> Self {
        match self {
            Self::Search => Self::Dropdown,
            Self::Dropdown if buttons_visible => Self::Buttons,
            Self::Dropdown | Self::Buttons => Self::Levels,
            Self::Levels => Self::Results,
            Self::Results => Self::Search,
        }
    }

    /// Previous pane in Tab order.
    #[must_use]
    pub const fn prev(self, buttons_visible: bool) -> Self {
        match self {
            Self::Search => Self::Results,
            Self::Dropdown => Self::Search,
            Self::Buttons => Self::Dropdown,
            Self::Levels if buttons_visible => Self::Buttons,
            Self::Levels => Self::Dropdown,
            Self::Results => Self::Levels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Publishing leaves exactly one active indicator
    ///
    /// - Input: Publish slot 2 of 4, then slot 0 of 3
    /// - Output: Single active slot each time, previous flags cleared
    fn surface_view_publish_single_active() {
        let mut v = SurfaceView::default();
        assert!(v.is_empty());
        v.publish(4, 2);
        assert_eq!(v.active_index(), Some(2));
        v.publish(3, 0);
        assert_eq!(v.len(), 3);
        assert_eq!(v.active_count(), 1);
        assert!(v.is_active(0));
        assert!(!v.is_active(2));
    }

    #[test]
    /// What: Tab order skips hidden button group
    ///
    /// - Input: `Focus::Dropdown.next` with and without buttons
    /// - Output: `Buttons` when visible, `Levels` when hidden
    fn focus_cycle_respects_button_visibility() {
        assert_eq!(Focus::Dropdown.next(true), Focus::Buttons);
        assert_eq!(Focus::Dropdown.next(false), Focus::Levels);
        assert_eq!(Focus::Levels.prev(false), Focus::Dropdown);
        assert_eq!(Focus::Results.next(true), Focus::Search);
    }
}
