//! Theme and configuration for Coursea.
//!
//! Holds the color palette, config directory resolution, and the
//! `settings.conf` parser.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading from `settings.conf`.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{load_settings, parse_settings, settings};
pub use types::{Settings, Theme};

/// Catppuccin Mocha palette used by all rendering code.
#[must_use]
pub const fn theme() -> Theme {
    use ratatui::style::Color;

    Theme {
        base: Color::Rgb(30, 30, 46),        // #1e1e2e
        mantle: Color::Rgb(24, 24, 37),      // #181825
        crust: Color::Rgb(17, 17, 27),       // #11111b
        surface1: Color::Rgb(69, 71, 90),    // #45475a
        surface2: Color::Rgb(88, 91, 112),   // #585b70
        overlay1: Color::Rgb(127, 132, 156), // #7f849c
        overlay2: Color::Rgb(147, 153, 178), // #9399b2
        text: Color::Rgb(205, 214, 244),     // #cdd6f4
        subtext0: Color::Rgb(166, 173, 200), // #a6adc8
        sapphire: Color::Rgb(116, 199, 236), // #74c7ec
        mauve: Color::Rgb(203, 166, 247),    // #cba6f7
        green: Color::Rgb(166, 227, 161),    // #a6e3a1
        yellow: Color::Rgb(249, 226, 175),   // #f9e2af
        red: Color::Rgb(243, 139, 168),      // #f38ba8
        lavender: Color::Rgb(180, 190, 254), // #b4befe
    }
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
