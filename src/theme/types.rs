use ratatui::style::Color;

use crate::catalog::DEFAULT_LEVEL_OPTIONS;

/// Application theme palette used by rendering code.
#[derive(Clone, Copy)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade, used for text on highlighted rows.
    pub crust: Color,
    /// Subtle surface color for inactive buttons.
    pub surface1: Color,
    /// Subtle surface color for borders.
    pub surface2: Color,
    /// Muted overlay color for titles and hints (primary).
    pub overlay1: Color,
    /// Muted overlay color for secondary text.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for focused controls.
    pub sapphire: Color,
    /// Accent color for headings and open menus.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for the active selection.
    pub lavender: Color,
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Catalog path or URL; `None` uses the built-in default location.
    pub catalog: Option<String>,
    /// Level menu entries, in display order.
    pub level_options: Vec<String>,
    /// Show the course details pane.
    pub show_details_pane: bool,
    /// Show the department button group next to the dropdown.
    pub show_department_buttons: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: None,
            level_options: DEFAULT_LEVEL_OPTIONS.iter().map(|s| (*s).to_string()).collect(),
            show_details_pane: true,
            show_department_buttons: true,
        }
    }
}
