//! UI components around the timeline.
pub mod common;

mod inspector_panel;
mod preview_panel;
mod status_bar;
mod title_bar;

pub use inspector_panel::InspectorPanel;
pub use preview_panel::PreviewPanel;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
