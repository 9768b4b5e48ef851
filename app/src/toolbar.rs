//! Action buttons: refresh the preview and export the workbook

use crate::dialogs;
use crate::state::AppState;
use dioxus::prelude::*;

/// Bottom row of action buttons
#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div { class: "toolbar-group",
            ToolbarButton {
                title: "List the folder again",
                label: "Refresh preview",
                onclick: move |_| {
                    let notice = state.write().refresh_preview();
                    if let Some(notice) = notice {
                        spawn(dialogs::show_notice(notice));
                    }
                }
            }
            ToolbarButton {
                title: "Write the file names to the output file",
                label: "Export",
                class: "primary",
                onclick: move |_| {
                    // Runs on the UI thread; the window is unresponsive until it returns
                    let notice = state.write().export();
                    spawn(dialogs::show_notice(notice));
                }
            }
        }
    }
}

/// Reusable toolbar button component
#[component]
fn ToolbarButton(
    title: &'static str,
    label: &'static str,
    onclick: EventHandler<MouseEvent>,
    #[props(default = "")] class: &'static str,
) -> Element {
    let button_class = if class.is_empty() {
        "toolbar-button".to_string()
    } else {
        format!("toolbar-button {}", class)
    };

    rsx! {
        button {
            class: "{button_class}",
            title: "{title}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
