//! Central `Session` container owned by the application entry point.

use ratatui::widgets::ListState;

use crate::catalog::{Catalog, Course, DEFAULT_LEVEL_OPTIONS};
use crate::state::types::{Focus, FilterState, LoadState, Stats, SurfaceView};
use crate::theme::Settings;

/// Hit-test rectangle `(x, y, width, height)` recorded during rendering.
pub type Rect4 = (u16, u16, u16, u16);

/// Browsing session shared by the event and UI layers.
///
/// Created at startup, dropped when the UI exits. The filter fields and the
/// filtered view are only changed through `crate::logic`, which keeps both
/// department surfaces in step with `filter.department`.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct Session {
    // Catalog
    /// Loaded catalog; empty until the fetch succeeds.
    pub catalog: Catalog,
    /// Whether the catalog is pending, ready, or failed.
    pub load_state: LoadState,
    /// Human-readable catalog location for the status line.
    pub catalog_label: String,
    /// Distinct departments, sorted; fixed once the catalog is installed.
    pub department_options: Vec<String>,
    /// Level menu entries (not derived from the catalog).
    pub level_options: Vec<String>,

    // Filtering
    /// Single authoritative filter state.
    pub filter: FilterState,
    /// Published indicators of the department dropdown.
    pub dropdown: SurfaceView,
    /// Published indicators of the department button group.
    pub buttons: SurfaceView,
    /// Catalog indices of the matching courses, in catalog order.
    pub view: Vec<usize>,
    /// Counts derived from `view`.
    pub stats: Stats,
    /// Bumped after every recompute; the "filtered view changed" signal.
    pub revision: u64,

    // Input surfaces
    /// Raw search text as typed (the filter stores it lower-cased).
    pub input: String,
    /// Which pane receives keys.
    pub focus: Focus,
    /// Whether the dropdown menu is expanded.
    pub dropdown_open: bool,
    /// Highlighted dropdown row while expanded (0 = "All").
    pub dropdown_cursor: usize,
    /// Highlighted button while the button group has focus (0 = "All").
    pub button_cursor: usize,
    /// Highlighted level entry while the level menu has focus (0 = "All").
    pub level_cursor: usize,

    // Results
    /// Index into `view` that is highlighted.
    pub selected: usize,
    /// List selection state for the course list.
    pub list_state: ListState,

    // Layout toggles
    /// Show the details pane next to the list.
    pub show_details_pane: bool,
    /// Show the department button group.
    pub show_department_buttons: bool,

    // Hit-test rects (filled by the renderer)
    /// Search box.
    pub search_rect: Option<Rect4>,
    /// Collapsed dropdown control.
    pub dropdown_rect: Option<Rect4>,
    /// Expanded dropdown list (inner area, one row per entry).
    pub dropdown_menu_rect: Option<Rect4>,
    /// First visible row of the expanded dropdown list.
    pub dropdown_scroll: usize,
    /// Department buttons paired with their entry index (0 = "All").
    pub department_button_rects: Vec<(usize, Rect4)>,
    /// Level entries paired with their entry index (0 = "All").
    pub level_rects: Vec<(usize, Rect4)>,
    /// Course list inner area.
    pub results_rect: Option<Rect4>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            load_state: LoadState::Loading,
            catalog_label: String::new(),
            department_options: Vec::new(),
            level_options: DEFAULT_LEVEL_OPTIONS.iter().map(|s| (*s).to_string()).collect(),
            filter: FilterState::default(),
            dropdown: SurfaceView::default(),
            buttons: SurfaceView::default(),
            view: Vec::new(),
            stats: Stats::default(),
            revision: 0,
            input: String::new(),
            focus: Focus::Search,
            dropdown_open: false,
            dropdown_cursor: 0,
            button_cursor: 0,
            level_cursor: 0,
            selected: 0,
            list_state: ListState::default(),
            show_details_pane: true,
            show_department_buttons: true,
            search_rect: None,
            dropdown_rect: None,
            dropdown_menu_rect: None,
            dropdown_scroll: 0,
            department_button_rects: Vec::new(),
            level_rects: Vec::new(),
            results_rect: None,
        }
    }
}

impl Session {
    /// What: Build a session configured from user settings.
    ///
    /// Inputs:
    /// - `settings`: Parsed settings.conf values
    ///
    /// Output:
    /// - Session in `Loading` state with published "All" surfaces and an empty view.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let mut s = Self {
            level_options: settings.level_options.clone(),
            show_details_pane: settings.show_details_pane,
            show_department_buttons: settings.show_department_buttons,
            ..Self::default()
        };
        crate::logic::publish_department(&mut s);
        s
    }

    /// Courses of the filtered view, in catalog order.
    pub fn visible_courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.view.iter().filter_map(|&i| self.catalog.get(i))
    }

    /// Currently highlighted course, if any.
    #[must_use]
    pub fn selected_course(&self) -> Option<&Course> {
        self.view
            .get(self.selected)
            .and_then(|&i| self.catalog.get(i))
    }

    /// Number of entries on a department surface ("All" plus options).
    #[must_use]
    pub fn department_entries(&self) -> usize {
        self.department_options.len() + 1
    }

    /// Label of department entry `idx` (0 = "All").
    #[must_use]
    pub fn department_entry_label(&self, idx: usize) -> &str {
        if idx == 0 {
            "All"
        } else {
            self.department_options
                .get(idx - 1)
                .map_or("", String::as_str)
        }
    }

    /// Label of level entry `idx` (0 = "All").
    #[must_use]
    pub fn level_entry_label(&self, idx: usize) -> &str {
        if idx == 0 {
            "All"
        } else {
            self.level_options.get(idx - 1).map_or("", String::as_str)
        }
    }
}
