//! Bottom status bar component

use crate::state::AppState;
use dioxus::prelude::*;

/// Application version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom status bar showing the outcome of the last action
#[component]
pub fn StatusBar() -> Element {
    let state = use_context::<Signal<AppState>>();
    let status_text = state.read().status.clone();

    rsx! {
        div { class: "status-bar",
            span { class: "status-item", "{status_text}" }
            span { class: "status-item version", "v{VERSION}" }
        }
    }
}
