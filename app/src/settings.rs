//! Application settings
//!
//! Defaults for the window and the export. Nothing here is persisted; every
//! session starts from `Settings::default()`.

use filelist_core::export::{DEFAULT_HEADER, EXTENSION};

/// Settings fixed for the lifetime of a session
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    // Window
    /// Window title
    pub window_title: &'static str,
    /// Initial window width in logical pixels
    pub window_width: f64,
    /// Initial window height in logical pixels
    pub window_height: f64,

    // Export defaults
    /// Output path shown when the app starts
    pub default_output: &'static str,
    /// Header cell written above the names, also the preview column heading
    pub export_header: &'static str,
    /// Extension appended to save-dialog picks that have none
    pub export_extension: &'static str,

    /// Status bar text before anything happens
    pub initial_status: &'static str,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "File Name List Tool",
            window_width: 600.0,
            window_height: 500.0,

            default_output: "output.xlsx",
            export_header: DEFAULT_HEADER,
            export_extension: EXTENSION,

            initial_status: "Select a folder to begin.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_is_xlsx() {
        let settings = Settings::default();
        assert!(
            settings
                .default_output
                .ends_with(&format!(".{}", settings.export_extension))
        );
        assert_eq!(settings.export_header, "File Name");
    }
}
