use std::collections::BTreeSet;

use super::Catalog;

/// Level menu used when settings.conf does not override it.
pub const DEFAULT_LEVEL_OPTIONS: [&str; 8] = ["100", "200", "300", "400", "500", "600", "700", "800"];

/// What: Build the Department Option Set.
///
/// Inputs:
/// - `catalog`: Loaded catalog
///
/// Output:
/// - Distinct department labels in lexicographic (byte) order.
///
/// Details:
/// - Computed once per session when the catalog arrives.
#[must_use]
pub fn department_options(catalog: &Catalog) -> Vec<String> {
    catalog
        .courses()
        .iter()
        .map(|c| c.department.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// What: Parse a comma-separated level menu.
///
/// Inputs:
/// - `raw`: e.g. `"100, 200,300"`
///
/// Output:
/// - Trimmed, non-empty entries in the given order with duplicates dropped.
#[must_use]
pub fn parse_level_options(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let p = part.trim();
        if !p.is_empty() && !out.iter().any(|o| o == p) {
            out.push(p.to_string());
        }
    }
    out
}
