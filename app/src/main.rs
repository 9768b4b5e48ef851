//! filelist - Desktop application for listing a folder into a spreadsheet

mod dialogs;
mod fields;
mod preview;
mod settings;
mod state;
mod statusbar;
mod toolbar;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use settings::Settings;
use state::AppState;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::default();

    let window = WindowBuilder::new()
        .with_title(settings.window_title)
        .with_inner_size(LogicalSize::new(settings.window_width, settings.window_height));

    let config = Config::new()
        .with_window(window)
        .with_menu(None::<dioxus::desktop::muda::Menu>);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(App);
}

/// Log filter from a `RUST_LOG`-style spec; errors only when it is unset or empty
fn log_filter(spec: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(spec.unwrap_or_default())
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(AppState::new()));

    rsx! {
        style { {include_str!("../assets/style.css")} }

        div { class: "app-container",
            fields::FolderSection {}
            fields::OutputSection {}

            div { class: "main-content",
                preview::PreviewTable {}
            }

            toolbar::Toolbar {}

            statusbar::StatusBar {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_errors() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::ERROR));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_log_filter_follows_spec() {
        assert_eq!(log_filter(Some("info")).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(Some("filelist_core=debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
