//! Error types for filelist

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using filelist's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while listing a folder or exporting its names
#[derive(Error, Debug)]
pub enum Error {
    /// No folder path was given
    #[error("No folder selected.")]
    MissingFolderPath,

    /// No output path was given
    #[error("No output file name specified.")]
    MissingOutputPath,

    /// The folder path does not exist
    #[error("The selected folder does not exist: {}", .0.display())]
    FolderNotFound(PathBuf),

    /// The folder exists but cannot be read
    #[error("Cannot access the folder {}. Check permissions.", .0.display())]
    ReadPermissionDenied(PathBuf),

    /// The output file cannot be written, usually because another program holds it open
    #[error("Failed to save {}. The file may be open in another program.", .0.display())]
    OutputInUse(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Spreadsheet writer error
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// How serious an error is from the user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Missing input the user can fill in
    Warning,
    /// The operation failed
    Error,
}

impl Error {
    /// Severity used when reporting this error to the user
    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingFolderPath | Self::MissingOutputPath => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Classify an IO error raised while reading `folder`
    pub(crate) fn from_read(err: io::Error, folder: &Path) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            Self::ReadPermissionDenied(folder.to_path_buf())
        } else {
            Self::Io(err)
        }
    }

    /// Classify an IO error raised while writing `output`
    pub(crate) fn from_write(err: io::Error, output: &Path) -> Self {
        if is_locked(&err) {
            Self::OutputInUse(output.to_path_buf())
        } else {
            Self::Io(err)
        }
    }
}

/// Whether a write failure means the target is locked or not writable
fn is_locked(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::PermissionDenied | io::ErrorKind::ResourceBusy
    ) || is_sharing_violation(err)
}

/// ERROR_SHARING_VIOLATION or ERROR_LOCK_VIOLATION
#[cfg(windows)]
fn is_sharing_violation(err: &io::Error) -> bool {
    matches!(err.raw_os_error(), Some(32 | 33))
}

#[cfg(not(windows))]
fn is_sharing_violation(_err: &io::Error) -> bool {
    false
}
