//! Preview table of the listed names

use crate::state::{AppState, Phase};
use dioxus::prelude::*;

/// Single-column table of the names from the last refresh
#[component]
pub fn PreviewTable() -> Element {
    let state = use_context::<Signal<AppState>>();

    let (names, heading, stale) = {
        let s = state.read();
        (
            s.names.clone(),
            s.settings.export_header,
            s.phase() == Phase::Stale && !s.names.is_empty(),
        )
    };

    rsx! {
        fieldset { class: "preview-section",
            legend {
                "File list preview"
                if stale {
                    span { class: "preview-stale", " (out of date)" }
                }
            }
            div { class: "preview-scroll",
                table { class: "preview-table",
                    thead {
                        tr { th { "{heading}" } }
                    }
                    tbody {
                        for (idx, name) in names.iter().enumerate() {
                            tr { key: "{idx}",
                                td { "{name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
