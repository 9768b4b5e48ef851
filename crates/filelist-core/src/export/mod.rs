//! Spreadsheet export of folder listings
//!
//! [`export_folder`] re-reads the folder at export time, so the written file
//! always reflects the folder as it is now, not whatever a caller last showed.

mod xlsx;

use crate::listing::list_names;
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::info;

pub use xlsx::write_names;

/// Column header written above the names
pub const DEFAULT_HEADER: &str = "File Name";

/// File extension of the exported workbook
pub const EXTENSION: &str = "xlsx";

/// Options for exporting a folder listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Folder whose entries are listed
    pub folder: PathBuf,

    /// Output workbook path
    pub output: PathBuf,

    /// Header cell above the names
    pub header: String,
}

impl ExportOptions {
    /// Create export options for a folder and output path
    pub fn new(folder: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            output: output.into(),
            header: DEFAULT_HEADER.to_string(),
        }
    }

    /// Set the header cell text
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }
}

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Path the workbook was written to
    pub path: PathBuf,

    /// Number of names written, excluding the header
    pub count: usize,
}

impl std::fmt::Display for ExportResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "saved {} file names to {}",
            self.count,
            self.path.display()
        )
    }
}

/// List `options.folder` and write the names to `options.output`
///
/// Inputs are checked in order: folder set, output set, folder exists. Nothing
/// is written unless all three hold.
pub fn export_folder(options: &ExportOptions) -> Result<ExportResult> {
    if options.folder.as_os_str().is_empty() {
        return Err(Error::MissingFolderPath);
    }
    if options.output.as_os_str().is_empty() {
        return Err(Error::MissingOutputPath);
    }

    let names = list_names(&options.folder)?;
    write_names(&options.output, &names, &options.header)?;

    let result = ExportResult {
        path: options.output.clone(),
        count: names.len(),
    };
    info!("Export complete: {}", result);
    Ok(result)
}
