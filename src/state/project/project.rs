use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::frame_math::{frames_to_seconds, seconds_to_frames, FrameIndex};
use crate::core::timeline_snap::ClipEdges;
use super::audio::{clamp_volume, default_volume};
use super::{ProjectMeta, Scene, VoiceOver};

/// The main project container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier
    pub id: Uuid,
    pub meta: ProjectMeta,
    /// Clips on the video track, in visual order (left to right)
    pub scenes: Vec<Scene>,
    /// Optional narration spanning the whole project
    #[serde(default)]
    pub audio: Option<VoiceOver>,
    /// Optional background music spanning the whole project
    #[serde(default)]
    pub music_url: Option<String>,
    #[serde(default = "default_volume")]
    pub music_volume: f32,
    /// Externally hosted subtitle file; authoritative for captions when present
    #[serde(default)]
    pub caption_url: Option<String>,
}

impl Default for Project {
    fn default() -> Self {
        Self::new("Untitled Project", ProjectMeta::default().duration_seconds, 30)
    }
}

impl Project {
    /// Create a project holding one empty scene that spans the whole duration.
    pub fn new(title: impl Into<String>, duration_seconds: f64, fps: u32) -> Self {
        let mut meta = ProjectMeta {
            title: title.into(),
            duration_seconds,
            fps,
            ..Default::default()
        };
        meta.normalize();
        let mut project = Self {
            id: Uuid::new_v4(),
            meta,
            scenes: vec![Scene::placeholder()],
            audio: None,
            music_url: None,
            music_volume: default_volume(),
            caption_url: None,
        };
        project.recalc_frames();
        project
    }

    pub fn fps(&self) -> u32 {
        self.meta.fps.max(1)
    }

    /// `round(duration × fps)`.
    pub fn total_frames(&self) -> FrameIndex {
        seconds_to_frames(self.meta.duration_seconds, self.fps()).max(0)
    }

    /// Project length on the frame grid, in seconds.
    pub fn total_seconds(&self) -> f64 {
        frames_to_seconds(self.total_frames(), self.fps())
    }

    /// Shortest allowed scene: one second, or the whole project if shorter.
    pub fn min_scene_frames(&self) -> FrameIndex {
        FrameIndex::from(self.fps()).min(self.total_frames())
    }

    /// Last playable frame.
    pub fn last_frame(&self) -> FrameIndex {
        (self.total_frames() - 1).max(0)
    }

    pub fn find_scene(&self, id: Uuid) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.id == id)
    }

    pub fn scene_index(&self, id: Uuid) -> Option<usize> {
        self.scenes.iter().position(|scene| scene.id == id)
    }

    pub(crate) fn find_scene_mut(&mut self, id: Uuid) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|scene| scene.id == id)
    }

    /// Scene shown at `frame`; when clips overlap the later one in track order wins.
    pub fn scene_at_frame(&self, frame: FrameIndex) -> Option<&Scene> {
        self.scenes.iter().rev().find(|scene| scene.contains_frame(frame))
    }

    /// Edges of every scene except `id`, for snapping a dragged clip.
    pub fn clip_edges_except(&self, id: Uuid) -> Vec<ClipEdges> {
        self.scenes
            .iter()
            .filter(|scene| scene.id != id)
            .map(Scene::edges)
            .collect()
    }

    /// Redistribute scenes to be contiguous and equal-width across `[0, total)`.
    ///
    /// Each scene gets `floor(total / count)` frames; the last scene also takes the
    /// remainder so the layout ends exactly on the last frame boundary.
    pub fn recalc_frames(&mut self) {
        let total = self.total_frames();
        let count = self.scenes.len() as FrameIndex;
        if count == 0 {
            return;
        }
        let per_scene = total / count;
        for (index, scene) in self.scenes.iter_mut().enumerate() {
            scene.start_frame = index as FrameIndex * per_scene;
            scene.duration_in_frames = per_scene;
        }
        if let Some(last) = self.scenes.last_mut() {
            last.duration_in_frames = total - last.start_frame;
        }
        if per_scene < self.min_scene_frames() {
            tracing::warn!(
                scenes = count,
                total_frames = total,
                per_scene,
                "equal-width layout leaves scenes shorter than one second"
            );
        }
    }

    /// Clamp a placement so the scene fits inside the project and is at least
    /// `min_scene_frames` long.
    pub fn clamp_scene_frames(
        &self,
        start_frame: FrameIndex,
        duration_in_frames: FrameIndex,
    ) -> (FrameIndex, FrameIndex) {
        let total = self.total_frames();
        let min = self.min_scene_frames();
        let start = start_frame.clamp(0, (total - min).max(0));
        let duration = duration_in_frames.clamp(min, (total - start).max(min));
        (start, duration)
    }

    /// Repair a project that came from outside the editor: metadata in range, at
    /// least one scene, every scene inside the project bounds.
    pub(crate) fn normalize(&mut self) {
        self.meta.normalize();
        self.music_volume = clamp_volume(self.music_volume);
        self.audio = self.audio.take().map(VoiceOver::normalized);
        if self.scenes.is_empty() {
            tracing::warn!(project = %self.id, "project had no scenes; adding a placeholder");
            self.scenes.push(Scene::placeholder());
            self.recalc_frames();
            return;
        }
        for index in 0..self.scenes.len() {
            let scene = &self.scenes[index];
            let (start, duration) = self.clamp_scene_frames(scene.start_frame, scene.duration_in_frames);
            let scene = &mut self.scenes[index];
            scene.start_frame = start;
            scene.duration_in_frames = duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_scenes(duration_seconds: f64, count: usize) -> Project {
        let mut project = Project::new("Test", duration_seconds, 30);
        project.scenes = (0..count).map(|i| Scene::new(format!("{i}.png"), "")).collect();
        project.recalc_frames();
        project
    }

    #[test]
    fn test_default_project_has_one_spanning_scene() {
        let project = Project::default();
        assert_eq!(project.scenes.len(), 1);
        assert_eq!(project.scenes[0].start_frame, 0);
        assert_eq!(project.scenes[0].duration_in_frames, project.total_frames());
        assert_eq!(project.total_frames(), 1800);
    }

    #[test]
    fn test_recalc_splits_equally() {
        let project = project_with_scenes(60.0, 4);
        let layout: Vec<_> = project
            .scenes
            .iter()
            .map(|s| (s.start_frame, s.duration_in_frames))
            .collect();
        assert_eq!(layout, vec![(0, 450), (450, 450), (900, 450), (1350, 450)]);
    }

    #[test]
    fn test_recalc_gives_remainder_to_last_scene() {
        let project = project_with_scenes(10.0, 7);
        let last = project.scenes.last().unwrap();
        assert_eq!(project.scenes[0].duration_in_frames, 42);
        assert_eq!(last.end_frame(), 300);
    }

    #[test]
    fn test_recalc_is_idempotent() {
        let mut project = project_with_scenes(37.3, 5);
        project.recalc_frames();
        let first = project.scenes.clone();
        project.recalc_frames();
        assert_eq!(first, project.scenes);
    }

    #[test]
    fn test_clamp_scene_frames_keeps_one_second_inside_bounds() {
        let project = project_with_scenes(60.0, 4);
        assert_eq!(project.clamp_scene_frames(-40, 10), (0, 30));
        assert_eq!(project.clamp_scene_frames(1799, 500), (1770, 30));
        assert_eq!(project.clamp_scene_frames(1500, 900), (1500, 300));
    }

    #[test]
    fn test_scene_at_frame_prefers_later_overlapping_scene() {
        let mut project = project_with_scenes(60.0, 2);
        project.scenes[0].duration_in_frames = 1200;
        let at = project.scene_at_frame(1000).unwrap();
        assert_eq!(at.id, project.scenes[1].id);
        assert!(project.scene_at_frame(5000).is_none());
    }

    #[test]
    fn test_normalize_repairs_empty_and_out_of_range() {
        let mut project = project_with_scenes(10.0, 2);
        project.scenes[1].start_frame = 900;
        project.scenes[1].duration_in_frames = -5;
        project.music_volume = 2.0;
        project.normalize();
        assert_eq!(project.scenes[1].start_frame, 270);
        assert_eq!(project.scenes[1].duration_in_frames, 30);
        assert_eq!(project.music_volume, 1.0);

        project.scenes.clear();
        project.normalize();
        assert_eq!(project.scenes.len(), 1);
        assert_eq!(project.scenes[0].duration_in_frames, 300);
    }

    #[test]
    fn test_project_serialization() {
        let project = project_with_scenes(12.0, 3);
        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("\"startFrame\""));
        assert!(json.contains("\"durationInFrames\""));
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, parsed);
    }
}
