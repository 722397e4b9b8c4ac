use serde::{Deserialize, Serialize};

/// Shortest project the editor will hold, in seconds.
pub const MIN_PROJECT_SECONDS: f64 = 1.0;

/// Output frame shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [AspectRatio::Landscape, AspectRatio::Portrait, AspectRatio::Square];

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Square => "1:1",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ratio| ratio.label() == label)
    }
}

/// Project-level metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub title: String,
    /// Project length in seconds
    #[serde(rename = "duration")]
    pub duration_seconds: f64,
    /// Frames per second; fixed for the life of the project
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

fn default_fps() -> u32 {
    30
}

impl Default for ProjectMeta {
    fn default() -> Self {
        Self {
            title: "Untitled Project".to_string(),
            duration_seconds: 60.0,
            fps: default_fps(),
            aspect_ratio: AspectRatio::default(),
        }
    }
}

impl ProjectMeta {
    pub(crate) fn normalize(&mut self) {
        if self.fps == 0 {
            self.fps = default_fps();
        }
        self.duration_seconds = normalize_duration(self.duration_seconds);
    }
}

pub(crate) fn normalize_duration(seconds: f64) -> f64 {
    if seconds.is_finite() {
        seconds.max(MIN_PROJECT_SECONDS)
    } else {
        MIN_PROJECT_SECONDS
    }
}

/// Metadata fields to merge; `fps` is not editable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaPatch {
    pub title: Option<String>,
    pub duration_seconds: Option<f64>,
    pub aspect_ratio: Option<AspectRatio>,
}

impl MetaPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn duration_seconds(seconds: f64) -> Self {
        Self {
            duration_seconds: Some(seconds),
            ..Default::default()
        }
    }

    pub fn aspect_ratio(aspect_ratio: AspectRatio) -> Self {
        Self {
            aspect_ratio: Some(aspect_ratio),
            ..Default::default()
        }
    }
}
