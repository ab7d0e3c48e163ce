//! Command-line argument definition.

use clap::Parser;

use crate::catalog::CatalogSource;
use crate::theme::Settings;

/// Coursea - browse a course catalog with live search, department and level filters
#[derive(Parser, Debug, Default)]
#[command(name = "coursea")]
#[command(version)]
#[command(about = "Browse a course catalog with live search, department and level filters", long_about = None)]
pub struct Args {
    /// Catalog JSON file or http(s) URL (default: rit_courses.json)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the department option set and exit
    #[arg(long)]
    pub list_departments: bool,

    /// Print courses matching this search text and exit
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print courses in this department and exit
    #[arg(short, long)]
    pub department: Option<String>,

    /// Print courses at this level and exit
    #[arg(short = 'L', long)]
    pub level: Option<String>,
}

impl Args {
    /// Whether any flag asks for headless output instead of the TUI.
    #[must_use]
    pub const fn is_headless(&self) -> bool {
        self.list_departments
            || self.search.is_some()
            || self.department.is_some()
            || self.level.is_some()
    }
}

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`; `RUST_LOG` still wins at subscriber setup.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Pick the catalog location.
///
/// Inputs:
/// - `args`: Parsed CLI arguments
/// - `settings`: Parsed settings.conf
///
/// Output:
/// - `--catalog` if given, else settings `catalog`, else the default file.
#[must_use]
pub fn resolve_catalog_source(args: &Args, settings: &Settings) -> CatalogSource {
    args.catalog
        .as_deref()
        .or(settings.catalog.as_deref())
        .map_or_else(CatalogSource::default, CatalogSource::parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    /// What: CLI flags parse and headless detection
    ///
    /// - Input: `--department CS -L 100 -v`
    /// - Output: Fields set; headless; debug log level
    fn args_parse_headless_flags() {
        let args = Args::parse_from(["coursea", "--department", "CS", "-L", "100", "-v"]);
        assert_eq!(args.department.as_deref(), Some("CS"));
        assert_eq!(args.level.as_deref(), Some("100"));
        assert!(args.is_headless());
        assert_eq!(determine_log_level(&args), "debug");

        let plain = Args::parse_from(["coursea"]);
        assert!(!plain.is_headless());
        assert_eq!(determine_log_level(&plain), "info");
    }

    #[test]
    /// What: CLI catalog beats settings, settings beat default
    ///
    /// - Input: Combinations of `--catalog` and settings `catalog`
    /// - Output: Matching `CatalogSource`
    fn resolve_catalog_source_precedence() {
        let settings = Settings {
            catalog: Some("https://example.org/c.json".into()),
            ..Settings::default()
        };
        let cli = Args::parse_from(["coursea", "--catalog", "local.json"]);
        assert_eq!(
            resolve_catalog_source(&cli, &settings),
            CatalogSource::File(PathBuf::from("local.json"))
        );
        let none = Args::parse_from(["coursea"]);
        assert_eq!(
            resolve_catalog_source(&none, &settings),
            CatalogSource::Url("https://example.org/c.json".into())
        );
        assert_eq!(
            resolve_catalog_source(&none, &Settings::default()),
            CatalogSource::default()
        );
    }
}
