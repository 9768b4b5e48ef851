//! Single-column XLSX writer

use crate::{Error, Result};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;
use tracing::debug;

/// Name of the only worksheet in the workbook
const SHEET_NAME: &str = "Sheet1";

/// Write `names` under `header` into column A of a new workbook at `output`
///
/// An existing file at `output` is overwritten.
pub fn write_names(output: &Path, names: &[String], header: &str) -> Result<()> {
    if output.as_os_str().is_empty() {
        return Err(Error::MissingOutputPath);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    worksheet.write_string(0, 0, header)?;
    for (row, name) in (1u32..).zip(names) {
        worksheet.write_string(row, 0, name)?;
    }

    workbook.save(output).map_err(|e| match e {
        XlsxError::IoError(io) => Error::from_write(io, output),
        other => Error::Spreadsheet(other),
    })?;

    debug!("Wrote {} rows to {}", names.len(), output.display());
    Ok(())
}
