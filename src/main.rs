//! Storyreel
//!
//! Clip-based storyboard editor: scenes on a frame-accurate timeline with snapping,
//! derived captions and narration tracks.

mod app;
mod components;
mod config;
mod constants;
mod core;
mod error;
mod hotkeys;
mod state;
mod timeline;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    let _ = tracing_subscriber::fmt::try_init();

    let editor_config = config::EditorConfig::load_or_default();

    let window = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Storyreel")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(editor_config)
        .launch(app::App);
}
