//! Directory listing
//!
//! Reads the immediate entries of a folder and returns their names in plain
//! ordinal order. Files and directories are listed alike; nothing is recursed
//! into and no metadata is read.

use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// List the names of the immediate entries of `folder`, sorted by ordinal string order
///
/// Names that are not valid UTF-8 are converted lossily.
pub fn list_names(folder: &Path) -> Result<Vec<String>> {
    if folder.as_os_str().is_empty() {
        return Err(Error::MissingFolderPath);
    }
    if !folder.exists() {
        return Err(Error::FolderNotFound(folder.to_path_buf()));
    }

    let entries = fs::read_dir(folder).map_err(|e| Error::from_read(e, folder))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::from_read(e, folder))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    sort_names(&mut names);

    debug!("Listed {} entries in {}", names.len(), folder.display());
    Ok(names)
}

/// Sort names by raw codepoint order, not locale collation
pub fn sort_names(names: &mut [String]) {
    names.sort_unstable();
}
