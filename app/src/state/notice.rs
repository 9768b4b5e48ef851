//! User-facing notices
//!
//! A notice is what an action reports back: shown as a modal dialog and
//! mirrored into the status bar.

use filelist_core::{Error, Severity};

/// Dialog level of a notice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    /// Informational notice for a completed action
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: "Done",
            message: message.into(),
        }
    }

    /// Notice for an error raised while performing `action`
    ///
    /// Errors without a specific category are prefixed with the action so the
    /// user can tell which button failed.
    pub fn failure(action: &str, err: &Error) -> Self {
        let message = match err {
            Error::Io(_) | Error::Spreadsheet(_) => format!("{} failed: {}", action, err),
            _ => err.to_string(),
        };

        match err.severity() {
            Severity::Warning => Self {
                level: NoticeLevel::Warning,
                title: "Warning",
                message,
            },
            Severity::Error => Self {
                level: NoticeLevel::Error,
                title: "Error",
                message,
            },
        }
    }
}
