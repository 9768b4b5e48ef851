//! Native dialogs
//!
//! Thin async wrappers around rfd. Each returns `None` when the user cancels.

// Owned arguments keep the returned futures 'static for spawn()
#![allow(clippy::needless_pass_by_value)]

use crate::settings::Settings;
use crate::state::{Notice, NoticeLevel};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use std::path::{Path, PathBuf};

/// Ask for the folder to list
pub async fn pick_folder(start: Option<PathBuf>) -> Option<PathBuf> {
    let mut dialog = AsyncFileDialog::new().set_title("Select target folder");
    if let Some(dir) = start {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_folder().await.map(|f| f.path().to_path_buf())
}

/// Ask where to save the workbook
pub async fn pick_output(settings: Settings, current: String) -> Option<PathBuf> {
    let current = Path::new(&current);
    let file_name = current
        .file_name()
        .map_or_else(|| settings.default_output.to_string(), |n| n.to_string_lossy().to_string());

    let mut dialog = AsyncFileDialog::new()
        .set_title("Select save location")
        .add_filter("Excel files", &[settings.export_extension])
        .add_filter("All files", &["*"])
        .set_file_name(file_name);
    if let Some(dir) = current.parent().filter(|p| p.is_dir()) {
        dialog = dialog.set_directory(dir);
    }

    let picked = dialog.save_file().await?;
    Some(with_default_extension(
        picked.path().to_path_buf(),
        settings.export_extension,
    ))
}

/// Append `extension` to a picked path that has none
pub fn with_default_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(extension);
    }
    path
}

/// Show a notice as a modal message box
pub async fn show_notice(notice: Notice) {
    let level = match notice.level {
        NoticeLevel::Info => MessageLevel::Info,
        NoticeLevel::Warning => MessageLevel::Warning,
        NoticeLevel::Error => MessageLevel::Error,
    };

    AsyncMessageDialog::new()
        .set_level(level)
        .set_title(notice.title)
        .set_description(notice.message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
