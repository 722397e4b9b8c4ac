use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{EditorError, Result};
use super::{Project, ProjectMeta, Scene, VoiceOver};

/// Generation output handed to the editor: one image per scene plus the script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPayload {
    pub title: String,
    pub duration_seconds: f64,
    pub image_urls: Vec<String>,
    pub script: String,
    pub audio_url: Option<String>,
}

impl ProjectPayload {
    /// Read a payload JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|err| EditorError::io("failed to read payload", path, err))?;
        serde_json::from_str(&json).map_err(|err| EditorError::json(path, err))
    }
}

impl Project {
    /// Build a project from a generation payload.
    ///
    /// One scene per image, laid out equal-width across the duration; images
    /// beyond one per whole second are dropped. Scene text
    /// comes from the script's non-empty lines by index, falling back to the first
    /// line. Without images a single placeholder scene carries the whole script.
    pub fn from_payload(payload: &ProjectPayload, fps: u32) -> Self {
        let title = payload.title.trim();
        let title = if title.is_empty() {
            ProjectMeta::default().title
        } else {
            title.to_string()
        };
        let mut project = Project::new(title, payload.duration_seconds, fps);

        let lines: Vec<&str> = payload
            .script
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        // Every scene must fit at least one second.
        let max_scenes = (project.total_frames() / project.min_scene_frames()).max(1) as usize;
        if payload.image_urls.len() > max_scenes {
            tracing::warn!(
                images = payload.image_urls.len(),
                kept = max_scenes,
                "payload has more images than whole seconds; dropping the rest"
            );
        }
        project.scenes = if payload.image_urls.is_empty() {
            vec![Scene::new(String::new(), payload.script.trim())]
        } else {
            payload
                .image_urls
                .iter()
                .take(max_scenes)
                .enumerate()
                .map(|(index, url)| {
                    let text = lines.get(index).or(lines.first()).copied().unwrap_or("");
                    Scene::new(url.trim(), text)
                })
                .collect()
        };
        project.recalc_frames();

        project.audio = payload
            .audio_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(VoiceOver::new);

        tracing::info!(
            project = %project.id,
            scenes = project.scenes.len(),
            total_frames = project.total_frames(),
            "project built from payload"
        );
        project
    }
}
