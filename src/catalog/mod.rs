//! Course catalog model and one-shot loader.
//!
//! The catalog is read once at startup and never mutated afterwards. Everything
//! downstream (filter controller, renderer, headless query mode) only borrows it.

use std::fmt;
use std::sync::Arc;

mod load;
mod options;

pub use load::{CatalogSource, DEFAULT_CATALOG_LOCATION, LoadError, load, parse_document};
pub use options::{DEFAULT_LEVEL_OPTIONS, department_options, parse_level_options};

/// What: A JSON scalar kept exactly as the catalog document supplied it.
///
/// Inputs:
/// - Deserialized from either a JSON number or a JSON string.
///
/// Output:
/// - `Display` renders the string form used for level comparison and display.
///
/// Details:
/// - Numbers render the way a browser prints them: integral values without a
///   fractional part (`100`, not `100.0`), `-0` as `0`, and magnitudes at or
///   above `1e21` or below `1e-6` in exponent form (`1e+21`, `1.5e-7`).
/// - Strings render verbatim, so `"100 "` stays distinct from `100`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Numeric value as written in the document.
    Number(serde_json::Number),
    /// Textual value as written in the document.
    Text(String),
    /// Anything else (`null`, booleans, nested values), carried through untouched.
    Other(serde_json::Value),
}

impl Default for Scalar {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Self::Number(v.into())
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{v}"),
            Self::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    return write!(f, "{n}");
                }
                match n.as_f64() {
                    // both signed zeros
                    Some(v) if v.abs().to_bits() == 0 => f.write_str("0"),
                    Some(v) if v.is_finite() && (v.abs() >= 1e21 || v.abs() < 1e-6) => {
                        write_exponent(f, v)
                    }
                    Some(v) if v.is_finite() && v.fract().abs() < f64::EPSILON && v.abs() < 1e15 => {
                        write!(f, "{v:.0}")
                    }
                    Some(v) => write!(f, "{v}"),
                    None => write!(f, "{n}"),
                }
            }
        }
    }
}

/// Exponent form with an explicit sign on the exponent (`1e+21`, `1.5e-7`).
fn write_exponent(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let raw = format!("{v:e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
        _ => f.write_str(&raw),
    }
}

/// One course record from the catalog document.
///
/// Field names follow the document exactly. Missing fields fall back to empty
/// values; nothing is validated, so prerequisites may name courses that do not
/// exist.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    /// Course code, unique within a catalog (e.g. `CSCI-141`).
    pub course_code: String,
    /// Human-readable title.
    pub title: String,
    /// Department label used by the department filter.
    pub department: String,
    /// Course level; compared by its string form.
    pub level: Scalar,
    /// Credit count as supplied.
    pub credits: Scalar,
    /// Long description text.
    pub description: String,
    /// Ordered term labels the course is offered in.
    pub terms: Vec<String>,
    /// Ordered prerequisite course codes.
    pub prerequisites: Vec<String>,
}

/// What: Immutable, cheaply clonable sequence of courses.
///
/// Inputs:
/// - Built once by the loader (or from a `Vec<Course>` in tests).
///
/// Output:
/// - Read-only slice access and exact-code lookup.
///
/// Details:
/// - Backed by `Arc<[Course]>` so the runtime can hand it to the session
///   without copying; there is no mutable accessor.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Courses in document order.
    courses: Arc<[Course]>,
}

impl Catalog {
    /// Wrap an ordered list of courses.
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: courses.into(),
        }
    }

    /// All courses in document order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Course at catalog position `idx`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Course> {
        self.courses.get(idx)
    }

    /// What: Look a course up by its exact code.
    ///
    /// Inputs:
    /// - `code`: Course code, compared case-sensitively
    ///
    /// Output:
    /// - First course whose `course_code` equals `code`, if any.
    #[must_use]
    pub fn course_by_code(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Scalar string forms used for level comparison
    ///
    /// - Input: Integer, integral float, fractional float, and string scalars
    /// - Output: `100`, `100`, `1.5`, and the raw string respectively
    fn scalar_display_forms() {
        let int: Scalar = serde_json::from_str("100").expect("int scalar");
        let float: Scalar = serde_json::from_str("100.0").expect("float scalar");
        let frac: Scalar = serde_json::from_str("1.5").expect("fractional scalar");
        let text: Scalar = serde_json::from_str("\"100 \"").expect("text scalar");
        assert_eq!(int.to_string(), "100");
        assert_eq!(float.to_string(), "100");
        assert_eq!(frac.to_string(), "1.5");
        assert_eq!(text.to_string(), "100 ");
    }

    #[test]
    /// What: Edge-case numbers print the way a browser would
    ///
    /// - Input: `-0.0`, `1e21`, `1.5e-7`, `1e20`
    /// - Output: `0`, `1e+21`, `1.5e-7`, `100000000000000000000`
    fn scalar_display_edge_numbers() {
        let parse = |s: &str| serde_json::from_str::<Scalar>(s).expect("numeric scalar");
        assert_eq!(parse("-0.0").to_string(), "0");
        assert_eq!(parse("1e21").to_string(), "1e+21");
        assert_eq!(parse("1.5e-7").to_string(), "1.5e-7");
        assert_eq!(parse("1e20").to_string(), "100000000000000000000");
    }

    #[test]
    /// What: Missing course fields deserialize to empty values
    ///
    /// - Input: Record with only a course code
    /// - Output: Empty strings, lists and an empty-text level
    fn course_missing_fields_default_to_empty() {
        let c: Course = serde_json::from_str(r#"{"courseCode":"CSCI-141"}"#).expect("course");
        assert_eq!(c.course_code, "CSCI-141");
        assert!(c.title.is_empty());
        assert!(c.terms.is_empty());
        assert_eq!(c.level.to_string(), "");
    }

    #[test]
    /// What: Exact-code lookup
    ///
    /// - Input: Catalog with two courses
    /// - Output: Exact code hits; different case misses
    fn course_by_code_is_exact() {
        let cat = Catalog::new(vec![
            Course {
                course_code: "CS101".into(),
                ..Default::default()
            },
            Course {
                course_code: "MATH210".into(),
                ..Default::default()
            },
        ]);
        assert_eq!(
            cat.course_by_code("MATH210").map(|c| c.course_code.as_str()),
            Some("MATH210")
        );
        assert!(cat.course_by_code("cs101").is_none());
        assert_eq!(cat.len(), 2);
    }
}
