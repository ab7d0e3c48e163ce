//! Headless query mode: apply filters from the command line and print the matches.

use std::fmt::Write as _;

use crate::catalog::{CatalogSource, LoadError, load};
use crate::logic;
use crate::state::{ContractViolation, DepartmentSurface, FilterEvent, Session};
use crate::theme::Settings;

use super::Args;

/// Failure of a headless query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Catalog could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// A filter value was outside its option set.
    #[error(transparent)]
    Filter(#[from] ContractViolation),
}

/// What: Load the catalog and apply the CLI filters through the controller.
///
/// Inputs:
/// - `args`: Parsed CLI arguments (search/department/level)
/// - `source`: Catalog location
/// - `settings`: Settings supplying the level menu
///
/// Output:
/// - Session holding the filtered view.
///
/// # Errors
/// - `QueryError::Load` when the catalog is unavailable
/// - `QueryError::Filter` for a department or level outside its option set
pub async fn run_query(
    args: &Args,
    source: &CatalogSource,
    settings: &Settings,
) -> Result<Session, QueryError> {
    let catalog = load(source).await?;
    let mut session = Session::from_settings(settings);
    session.catalog_label = source.to_string();
    logic::install_catalog(&mut session, catalog);

    if let Some(text) = &args.search {
        logic::apply(&mut session, FilterEvent::TextChanged(text.clone()))?;
    }
    if let Some(dept) = &args.department {
        logic::apply(
            &mut session,
            FilterEvent::DepartmentChanged {
                value: dept.clone(),
                origin: DepartmentSurface::Dropdown,
            },
        )?;
    }
    if let Some(level) = &args.level {
        logic::apply(&mut session, FilterEvent::LevelChanged(level.clone()))?;
    }
    Ok(session)
}

/// What: Render the filtered view as plain text.
///
/// Inputs:
/// - `session`: Session after filtering
/// - `departments_only`: Print the department option set instead of courses
///
/// Output:
/// - One line per course (`CODE  Title  [DEPT, level L, C credits]`) and a stats line.
#[must_use]
pub fn format_report(session: &Session, departments_only: bool) -> String {
    let mut out = String::new();
    if departments_only {
        for d in &session.department_options {
            let _ = writeln!(out, "{d}");
        }
        return out;
    }
    for c in session.visible_courses() {
        let _ = writeln!(
            out,
            "{}  {}  [{}, level {}, {} credits]",
            c.course_code, c.title, c.department, c.level, c.credits
        );
    }
    let st = session.stats;
    if st.matching == 0 {
        out.push_str("No courses found\n");
    } else {
        let _ = writeln!(
            out,
            "Showing {} of {} courses ({} departments)",
            st.matching, st.total, st.departments
        );
    }
    out
}

/// What: Run headless mode end-to-end.
///
/// Inputs:
/// - `args`: Parsed CLI arguments
/// - `source`: Catalog location
/// - `settings`: Parsed settings
///
/// Output:
/// - Process exit code: `0` on success, `1` on load failure or rejected filter.
pub async fn handle_query(args: &Args, source: &CatalogSource, settings: &Settings) -> i32 {
    tracing::info!(
        search = ?args.search,
        department = ?args.department,
        level = ?args.level,
        "headless query requested from CLI"
    );
    match run_query(args, source, settings).await {
        Ok(session) => {
            print!("{}", format_report(&session, args.list_departments));
            0
        }
        Err(e) => {
            eprintln!("coursea: {e}");
            tracing::error!(error = %e, "headless query failed");
            1
        }
    }
}
