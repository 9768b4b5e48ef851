//! Integration tests for the folder to listing to workbook pipeline

// Tests are allowed to use expect/unwrap for cleaner error messages
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use calamine::{Reader, Xlsx, open_workbook};
use filelist_core::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Read column A of the first sheet back as strings
fn read_column(path: &Path) -> Vec<String> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("Workbook should open");
    let range = workbook
        .worksheet_range_at(0)
        .expect("Workbook should have a sheet")
        .expect("Sheet should parse");
    range.rows().map(|row| row[0].to_string()).collect()
}

fn working_dir_entries() -> Vec<std::ffi::OsString> {
    let mut entries: Vec<_> = fs::read_dir(".")
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    entries.sort();
    entries
}

fn folder_with(entries: &[&str], dirs: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("Temp dir should be created");
    for name in entries {
        fs::write(dir.path().join(name), b"x").expect("File should be written");
    }
    for name in dirs {
        fs::create_dir(dir.path().join(name)).expect("Dir should be created");
    }
    dir
}

#[test]
fn lists_every_immediate_entry_sorted() {
    let dir = folder_with(&["zeta.txt", "Alpha.txt", "beta.csv"], &["sub", "Docs"]);
    fs::write(dir.path().join("sub").join("nested.txt"), b"x").unwrap();

    let names = list_names(dir.path()).expect("Listing should succeed");

    assert_eq!(names.len(), 5);
    assert_eq!(names, ["Alpha.txt", "Docs", "beta.csv", "sub", "zeta.txt"]);
    assert!(names.windows(2).all(|w| w[0] <= w[1]));
    for name in &names {
        assert!(dir.path().join(name).exists());
    }
}

#[test]
fn empty_folder_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_names(dir.path()).unwrap().is_empty());
}

#[test]
fn listing_is_idempotent() {
    let dir = folder_with(&["c", "a", "b"], &[]);

    let first = list_names(dir.path()).unwrap();
    let second = list_names(dir.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn listing_a_file_is_a_generic_error() {
    let dir = folder_with(&["plain.txt"], &[]);
    let err = list_names(&dir.path().join("plain.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn write_names_produces_header_then_rows() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("names.xlsx");
    let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];

    write_names(&output, &names, "File Name").expect("Write should succeed");

    assert_eq!(read_column(&output), ["File Name", "a", "b", "c"]);
    let workbook: Xlsx<_> = open_workbook(&output).unwrap();
    assert_eq!(workbook.sheet_names(), ["Sheet1"]);
}

#[test]
fn export_folder_writes_current_listing() {
    let src = folder_with(&["b.txt", "a.txt"], &["c"]);
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("list.xlsx");

    let result = export_folder(&ExportOptions::new(src.path(), &output)).unwrap();

    assert_eq!(result.count, 3);
    assert_eq!(result.path, output);
    assert_eq!(read_column(&output), ["File Name", "a.txt", "b.txt", "c"]);
}

#[test]
fn export_reflects_changes_since_last_listing() {
    let src = folder_with(&["one"], &[]);
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("list.xlsx");

    let before = list_names(src.path()).unwrap();
    fs::write(src.path().join("two"), b"x").unwrap();
    let result = export_folder(&ExportOptions::new(src.path(), &output)).unwrap();

    assert_eq!(before.len(), 1);
    assert_eq!(result.count, 2);
    assert_eq!(read_column(&output), ["File Name", "one", "two"]);
}

#[test]
fn export_overwrites_existing_file() {
    let src = folder_with(&["only"], &[]);
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("list.xlsx");
    fs::write(&output, b"not a workbook").unwrap();

    export_folder(&ExportOptions::new(src.path(), &output)).unwrap();

    assert_eq!(read_column(&output), ["File Name", "only"]);
}

#[test]
fn export_without_output_path_writes_nothing() {
    let src = folder_with(&["a"], &[]);
    let before = working_dir_entries();

    let err = export_folder(&ExportOptions::new(src.path(), "")).unwrap_err();

    assert!(matches!(err, Error::MissingOutputPath));
    assert_eq!(err.severity(), Severity::Warning);
    assert_eq!(working_dir_entries(), before);
}

#[test]
fn write_names_without_output_path_writes_nothing() {
    let before = working_dir_entries();

    let err = write_names(Path::new(""), &["a".to_string()], "File Name").unwrap_err();

    assert!(matches!(err, Error::MissingOutputPath));
    assert_eq!(working_dir_entries(), before);
}

#[cfg(unix)]
#[test]
fn export_onto_read_only_file_is_output_in_use() {
    use std::os::unix::fs::PermissionsExt;

    let src = folder_with(&["a"], &[]);
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("locked.xlsx");
    fs::write(&output, b"held").unwrap();
    fs::set_permissions(&output, fs::Permissions::from_mode(0o444)).unwrap();

    let result = export_folder(&ExportOptions::new(src.path(), &output));

    // Permission bits do not stop root
    let Err(err) = result else {
        return;
    };
    assert!(matches!(err, Error::OutputInUse(ref p) if *p == output));
    assert!(err.to_string().contains("open in another program"));
}

#[test]
fn export_from_missing_folder_writes_nothing() {
    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("gone");
    let output = out.path().join("list.xlsx");

    let err = export_folder(&ExportOptions::new(&missing, &output)).unwrap_err();

    assert!(matches!(err, Error::FolderNotFound(ref p) if *p == missing));
    assert!(!output.exists());
}

#[test]
fn export_into_missing_directory_is_a_generic_error() {
    let src = folder_with(&["a"], &[]);
    let output = src.path().join("no").join("such").join("dir").join("x.xlsx");

    let err = export_folder(&ExportOptions::new(src.path(), &output)).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.severity(), Severity::Error);
}
