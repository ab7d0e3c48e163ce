use std::fs;
use std::path::Path;

use super::parsing::{parse_bool, skip_comment_or_empty, strip_inline_comment};
use super::paths::settings_path;
use super::types::Settings;
use crate::catalog::parse_level_options;

/// What: Parse settings.conf content into `settings`.
///
/// Inputs:
/// - `content`: Content of the settings.conf file.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`.
/// - Unknown keys and unparsable values are ignored, keeping the defaults.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let trimmed = line.trim();
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "catalog" | "catalog_path" | "catalog_url" => {
                if !val.is_empty() {
                    settings.catalog = Some(val.to_string());
                }
            }
            "level_options" | "levels" => {
                let levels = parse_level_options(val);
                if !levels.is_empty() {
                    settings.level_options = levels;
                }
            }
            "show_details_pane" | "details_visible" => {
                settings.show_details_pane = parse_bool(val);
            }
            "show_department_buttons" | "department_buttons" => {
                settings.show_department_buttons = parse_bool(val);
            }
            _ => {}
        }
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: settings.conf location
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
pub fn load_settings(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::info!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

/// Load user settings from the resolved settings.conf, falling back to defaults.
pub fn settings() -> Settings {
    settings_path().map_or_else(Settings::default, |p| load_settings(&p))
}
