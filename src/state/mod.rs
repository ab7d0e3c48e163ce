//! Session state module.
//!
//! `Session` is the single owner of the catalog, the filter state and the
//! derived view. Value types live in `types`.

pub mod session;
pub mod types;

pub use session::{Rect4, Session};
pub use types::{
    ContractViolation, DepartmentSurface, FilterEvent, FilterState, Focus, LoadState, Stats,
    SurfaceView,
};
