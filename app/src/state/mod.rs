//! Application state management
//!
//! This module contains the window's state and the actions that change it:
//! - `AppState`: folder path, output path, preview rows and status text
//! - `Notice`: what an action reports back to the user
//!
//! Actions run synchronously and return notices instead of showing dialogs,
//! so everything here works without a window.

mod notice;

pub use notice::{Notice, NoticeLevel};

use crate::settings::Settings;
use filelist_core::export::{ExportOptions, export_folder};
use filelist_core::listing::list_names;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Where the window is in its short life
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No folder path entered yet
    FolderUnset,
    /// Preview rows do not belong to the folder in the text field
    Stale,
    /// Preview rows are the listing of the folder in the text field
    Fresh,
}

/// Global application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Session settings
    pub settings: Settings,
    /// Folder path text field
    pub folder: String,
    /// Output path text field
    pub output: String,
    /// Names shown in the preview table
    pub names: Vec<String>,
    /// Folder the preview rows were listed from
    pub listed_folder: Option<PathBuf>,
    /// Status bar text
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create state with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state with the given settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            output: settings.default_output.to_string(),
            status: settings.initial_status.to_string(),
            folder: String::new(),
            names: Vec::new(),
            listed_folder: None,
            settings,
        }
    }

    /// Current phase, derived from the folder field and the preview
    pub fn phase(&self) -> Phase {
        if self.folder.is_empty() {
            Phase::FolderUnset
        } else if self.listed_folder.as_deref() == Some(Path::new(&self.folder)) {
            Phase::Fresh
        } else {
            Phase::Stale
        }
    }

    /// Folder to open the folder dialog in, if the field names an existing one
    pub fn folder_dir(&self) -> Option<PathBuf> {
        let path = PathBuf::from(&self.folder);
        (!self.folder.is_empty() && path.is_dir()).then_some(path)
    }

    /// Update the folder field as the user types
    pub fn set_folder(&mut self, folder: String) {
        self.folder = folder;
    }

    /// Update the output field as the user types
    pub fn set_output(&mut self, output: String) {
        self.output = output;
    }

    /// Apply a folder picked in the folder dialog and refresh the preview
    pub fn select_folder(&mut self, folder: PathBuf) -> Option<Notice> {
        self.folder = folder.display().to_string();
        self.status = format!("Folder selected: {}", self.folder);
        info!("Folder selected: {}", self.folder);
        self.refresh_preview()
    }

    /// Apply an output path picked in the save dialog
    pub fn select_output(&mut self, output: PathBuf) {
        self.output = output.display().to_string();
        self.status = format!("Save location set: {}", self.output);
        info!("Save location set: {}", self.output);
    }

    /// Re-list the folder into the preview
    ///
    /// On failure the previous rows stay as they were but no longer count as
    /// the listing of any folder, and the returned notice describes the problem.
    pub fn refresh_preview(&mut self) -> Option<Notice> {
        let folder = PathBuf::from(&self.folder);

        match list_names(&folder) {
            Ok(names) => {
                self.status = format!("Files: {}", names.len());
                info!("Preview refreshed: {} entries in {}", names.len(), folder.display());
                self.names = names;
                self.listed_folder = Some(folder);
                None
            }
            Err(e) => {
                self.listed_folder = None;
                Some(self.report(Notice::failure("Listing files", &e)))
            }
        }
    }

    /// Export a fresh listing of the folder to the output path
    ///
    /// The preview is not consulted and not changed.
    pub fn export(&mut self) -> Notice {
        let options = ExportOptions::new(&self.folder, &self.output)
            .with_header(self.settings.export_header);

        match export_folder(&options) {
            Ok(result) => {
                self.status = format!("Done: {}", result);
                Notice::info(format!(
                    "Saved file names to {}.\nFiles: {}",
                    result.path.display(),
                    result.count
                ))
            }
            Err(e) => self.report(Notice::failure("Creating the Excel file", &e)),
        }
    }

    /// Mirror a failure notice into the status bar and the log
    fn report(&mut self, notice: Notice) -> Notice {
        match notice.level {
            NoticeLevel::Warning => warn!("{}", notice.message),
            _ => error!("{}", notice.message),
        }
        self.status.clone_from(&notice.message);
        notice
    }
}
