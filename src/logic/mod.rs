//! Filter state controller.
//!
//! Every change to the filter fields goes through the functions here, which
//! write the authoritative value first, republish the department surfaces,
//! and then recompute the filtered view and its stats.

pub mod controller;
pub mod filter;
pub mod selection;
pub mod sync;

pub use controller::{
    apply, clear_all, fail_load, install_catalog, set_department, set_level, set_search_text,
};
pub use filter::{compute_stats, course_matches, recompute, refresh_view};
pub use selection::move_selection;
pub use sync::{department_entry_index, publish_department, surfaces_consistent};
