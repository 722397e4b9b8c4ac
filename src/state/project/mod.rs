//! Project data model
//!
//! This module contains the core data structures for a storyboard project.

mod project;
mod scene;
mod meta;
mod audio;
mod payload;
mod persistence;

pub use project::Project;
pub use scene::{Scene, SceneAnimation, ScenePatch};
pub use meta::{AspectRatio, MetaPatch, ProjectMeta, MIN_PROJECT_SECONDS};
pub use audio::VoiceOver;
pub use payload::ProjectPayload;

pub(crate) use audio::clamp_volume;
