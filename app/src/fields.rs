//! Folder and output path fields

// Closure is required for Dioxus signals
#![allow(clippy::redundant_closure)]

use crate::dialogs;
use crate::state::AppState;
use dioxus::prelude::*;

/// Folder path field with a browse button
#[component]
pub fn FolderSection() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let folder = state.read().folder.clone();

    let browse = move |_| {
        let start = state.read().folder_dir();
        spawn(async move {
            if let Some(folder) = dialogs::pick_folder(start).await {
                let notice = state.write().select_folder(folder);
                if let Some(notice) = notice {
                    dialogs::show_notice(notice).await;
                }
            }
        });
    };

    rsx! {
        PathField {
            legend: "Target folder",
            label: "Folder path:",
            value: folder,
            button_label: "Browse",
            oninput: move |value: String| state.write().set_folder(value),
            onbrowse: browse,
        }
    }
}

/// Output path field with a save-as button
#[component]
pub fn OutputSection() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let output = state.read().output.clone();

    let browse = move |_| {
        let (settings, current) = {
            let s = state.read();
            (s.settings.clone(), s.output.clone())
        };
        spawn(async move {
            if let Some(path) = dialogs::pick_output(settings, current).await {
                state.write().select_output(path);
            }
        });
    };

    rsx! {
        PathField {
            legend: "Output",
            label: "Output file:",
            value: output,
            button_label: "Save as",
            oninput: move |value: String| state.write().set_output(value),
            onbrowse: browse,
        }
    }
}

/// Labelled text field with a button beside it
#[component]
fn PathField(
    legend: &'static str,
    label: &'static str,
    value: String,
    button_label: &'static str,
    oninput: EventHandler<String>,
    onbrowse: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        fieldset { class: "path-section",
            legend { "{legend}" }
            label { class: "path-label", "{label}" }
            div { class: "path-row",
                input {
                    r#type: "text",
                    class: "path-input",
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt.value()),
                }
                button {
                    class: "path-button",
                    onclick: move |evt| onbrowse.call(evt),
                    "{button_label}"
                }
            }
        }
    }
}
