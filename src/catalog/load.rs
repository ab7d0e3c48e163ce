use std::path::PathBuf;

use super::{Catalog, Course};

/// Location used when neither the CLI nor settings.conf names a catalog.
pub const DEFAULT_CATALOG_LOCATION: &str = "rit_courses.json";

/// Failure to obtain the catalog. Terminal for the session; never retried.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Local file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Remote document could not be fetched.
    #[error("failed to fetch catalog {url}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// Transport error or non-success status.
        message: String,
    },
    /// Document is not `{"courses": [...]}` JSON.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the catalog document is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    /// Local JSON file.
    File(PathBuf),
    /// Remote JSON document fetched with a single GET.
    Url(String),
}

impl CatalogSource {
    /// What: Classify a user-supplied location.
    ///
    /// Inputs:
    /// - `raw`: Path or URL from the CLI or settings.conf
    ///
    /// Output:
    /// - `Url` for `http://`/`https://` prefixes, `File` otherwise.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        if t.starts_with("http://") || t.starts_with("https://") {
            Self::Url(t.to_string())
        } else {
            Self::File(PathBuf::from(t))
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_CATALOG_LOCATION))
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => f.write_str(u),
        }
    }
}

/// Top-level shape of the catalog document.
#[derive(serde::Deserialize)]
struct CatalogDocument {
    /// The keyed course collection.
    courses: Vec<Course>,
}

/// What: Parse a catalog document body.
///
/// Inputs:
/// - `body`: JSON text of the form `{"courses": [...]}`
///
/// Output:
/// - `Ok(Catalog)` in document order, or `LoadError::Parse`.
///
/// # Errors
/// - Body is not JSON or has no `courses` array
pub fn parse_document(body: &str) -> Result<Catalog, LoadError> {
    let doc: CatalogDocument = serde_json::from_str(body)?;
    Ok(Catalog::new(doc.courses))
}

/// What: Read and parse the catalog once.
///
/// Inputs:
/// - `source`: File path or URL of the catalog document
///
/// Output:
/// - `Ok(Catalog)` on success; `Err(LoadError)` for IO, HTTP, or parse failures.
///
/// Details:
/// - Single attempt, no retries and no timeout; a hung fetch leaves the caller waiting.
///
/// # Errors
/// - See [`LoadError`]
pub async fn load(source: &CatalogSource) -> Result<Catalog, LoadError> {
    let body = match source {
        CatalogSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::Io {
                    path: path.clone(),
                    source: e,
                })?
        }
        CatalogSource::Url(url) => fetch_remote(url).await?,
    };
    let catalog = parse_document(&body)?;
    tracing::info!(source = %source, count = catalog.len(), "Loaded {} courses", catalog.len());
    Ok(catalog)
}

/// Fetch a remote document body, treating non-success statuses as failures.
async fn fetch_remote(url: &str) -> Result<String, LoadError> {
    let http_err = |message: String| LoadError::Http {
        url: url.to_string(),
        message,
    };
    let resp = reqwest::get(url).await.map_err(|e| http_err(e.to_string()))?;
    let status = resp.status();
    tracing::debug!(url = %url, status = status.as_u16(), "catalog fetch response received");
    if !status.is_success() {
        return Err(http_err(format!("status {status}")));
    }
    resp.text().await.map_err(|e| http_err(e.to_string()))
}
