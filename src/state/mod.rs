//! State management module
//!
//! - Project: the storyboard being edited (scenes, narration, music, captions)
//! - EditorStore: the session that owns and mutates the project

mod project;
mod store;

pub use project::*;
pub use store::{EditOutcome, EditorStore};
