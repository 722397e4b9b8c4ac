use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::frame_math::FrameIndex;
use crate::core::timeline_snap::ClipEdges;

/// Motion applied to a scene's still image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SceneAnimation {
    #[default]
    ZoomIn,
    ZoomOut,
    FadeIn,
    SlideLeft,
    SlideRight,
    None,
}

impl SceneAnimation {
    pub const ALL: [SceneAnimation; 6] = [
        SceneAnimation::ZoomIn,
        SceneAnimation::ZoomOut,
        SceneAnimation::FadeIn,
        SceneAnimation::SlideLeft,
        SceneAnimation::SlideRight,
        SceneAnimation::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SceneAnimation::ZoomIn => "Zoom in",
            SceneAnimation::ZoomOut => "Zoom out",
            SceneAnimation::FadeIn => "Fade in",
            SceneAnimation::SlideLeft => "Slide left",
            SceneAnimation::SlideRight => "Slide right",
            SceneAnimation::None => "None",
        }
    }

    /// Parse the value used by the inspector's `<select>`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|animation| animation.label() == label)
    }
}

/// A clip on the video track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Unique identifier, stable across reorder
    pub id: Uuid,
    /// Visual source; empty when the scene has no media yet
    #[serde(default)]
    pub image_url: String,
    /// Script text for this scene
    #[serde(default)]
    pub text: String,
    /// First frame on the timeline
    pub start_frame: FrameIndex,
    /// Length in frames
    pub duration_in_frames: FrameIndex,
    #[serde(default)]
    pub animation: SceneAnimation,
}

impl Scene {
    /// Create a scene with no placement; layout assigns its frames.
    pub fn new(image_url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_url: image_url.into(),
            text: text.into(),
            start_frame: 0,
            duration_in_frames: 0,
            animation: SceneAnimation::default(),
        }
    }

    /// An empty scene: no media and no text.
    pub fn placeholder() -> Self {
        Self::new(String::new(), String::new())
    }

    /// Exclusive end frame.
    pub fn end_frame(&self) -> FrameIndex {
        self.start_frame + self.duration_in_frames
    }

    pub fn contains_frame(&self, frame: FrameIndex) -> bool {
        self.start_frame <= frame && frame < self.end_frame()
    }

    pub fn has_media(&self) -> bool {
        !self.image_url.trim().is_empty()
    }

    pub fn edges(&self) -> ClipEdges {
        ClipEdges {
            scene_id: self.id,
            start: self.start_frame,
            end: self.end_frame(),
        }
    }
}

/// Scalar scene fields the inspector may overwrite. Frame placement is not part of
/// a patch; it goes through `EditorStore::update_scene_frames`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenePatch {
    pub image_url: Option<String>,
    pub text: Option<String>,
    pub animation: Option<SceneAnimation>,
}

impl ScenePatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn image_url(image_url: impl Into<String>) -> Self {
        Self {
            image_url: Some(image_url.into()),
            ..Default::default()
        }
    }

    pub fn animation(animation: SceneAnimation) -> Self {
        Self {
            animation: Some(animation),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image_url.is_none() && self.text.is_none() && self.animation.is_none()
    }

    /// Shallow-merge the set fields into `scene`.
    pub(crate) fn apply_to(self, scene: &mut Scene) {
        if let Some(image_url) = self.image_url {
            scene.image_url = image_url;
        }
        if let Some(text) = self.text {
            scene.text = text;
        }
        if let Some(animation) = self.animation {
            scene.animation = animation;
        }
    }
}
