//! # filelist Core
//!
//! Lists the names in a folder and writes them to a spreadsheet.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use filelist_core::prelude::*;
//!
//! let names = list_names(Path::new("photos"))?;
//! println!("{} entries", names.len());
//!
//! let result = export_folder(&ExportOptions::new("photos", "photos.xlsx"))?;
//! println!("{result}");
//! ```
//!
//! ## Conventions
//!
//! - **Listing**: immediate entries only, files and directories alike
//! - **Ordering**: plain codepoint order (`"B" < "a" < "b"`), never locale-aware
//! - **Output**: one sheet, column A, header row followed by one name per row

pub mod export;
pub mod listing;

mod error;

pub use error::{Error, Result, Severity};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::listing::list_names;

    pub use crate::export::{ExportOptions, ExportResult, export_folder, write_names};

    pub use crate::{Error, Result, Severity};

    pub use std::path::Path;
}
