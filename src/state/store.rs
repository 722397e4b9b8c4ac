//! Editing session store.
//!
//! `EditorStore` is the only owner and mutator of the open [`Project`] plus the
//! transient session state around it (selection, playhead, pending seek). Every
//! mutation clamps its input so the project stays valid; the returned
//! [`EditOutcome`] tells callers whether the input was taken as-is, adjusted, or
//! ignored.

use uuid::Uuid;

use crate::core::frame_math::FrameIndex;
use super::project::{
    clamp_volume, MetaPatch, Project, Scene, ScenePatch, VoiceOver, MIN_PROJECT_SECONDS,
};

/// How a store mutation treated its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Committed exactly as requested.
    Applied,
    /// Committed after clamping into the valid range.
    Adjusted,
    /// Nothing changed (unknown id, last scene, out-of-range index, ...).
    Ignored,
}

impl EditOutcome {
    pub fn changed(self) -> bool {
        !matches!(self, EditOutcome::Ignored)
    }

    fn from_adjusted(adjusted: bool) -> Self {
        if adjusted {
            EditOutcome::Adjusted
        } else {
            EditOutcome::Applied
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorStore {
    project: Project,
    selected_scene_id: Option<Uuid>,
    current_frame: FrameIndex,
    seek_to_frame: Option<FrameIndex>,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new(Project::default())
    }
}

impl EditorStore {
    /// Start a session on `project`, selecting its first scene.
    pub fn new(mut project: Project) -> Self {
        project.normalize();
        let selected_scene_id = project.scenes.first().map(|scene| scene.id);
        Self {
            project,
            selected_scene_id,
            current_frame: 0,
            seek_to_frame: None,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn total_frames(&self) -> FrameIndex {
        self.project.total_frames()
    }

    pub fn fps(&self) -> u32 {
        self.project.fps()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selected_scene_id(&self) -> Option<Uuid> {
        self.selected_scene_id
    }

    pub fn selected_scene(&self) -> Option<&Scene> {
        self.selected_scene_id.and_then(|id| self.project.find_scene(id))
    }

    pub fn select_scene(&mut self, id: Uuid) -> EditOutcome {
        if self.project.find_scene(id).is_none() {
            return EditOutcome::Ignored;
        }
        self.selected_scene_id = Some(id);
        EditOutcome::Applied
    }

    // =========================================================================
    // Scenes
    // =========================================================================

    /// Shallow-merge scalar fields into a scene. Does not touch layout.
    pub fn update_scene(&mut self, id: Uuid, patch: ScenePatch) -> EditOutcome {
        let Some(scene) = self.project.find_scene_mut(id) else {
            tracing::debug!(scene = %id, "update_scene ignored: unknown scene");
            return EditOutcome::Ignored;
        };
        if patch.is_empty() {
            return EditOutcome::Ignored;
        }
        patch.apply_to(scene);
        EditOutcome::Applied
    }

    /// Move and/or resize a scene. This is the entry point for pointer edits.
    ///
    /// `start_frame` is clamped into `[0, total − min]` and `duration_in_frames`
    /// into `[min, total − start]`, with `min` one second's worth of frames.
    pub fn update_scene_frames(
        &mut self,
        id: Uuid,
        start_frame: FrameIndex,
        duration_in_frames: FrameIndex,
    ) -> EditOutcome {
        let (start, duration) = self.project.clamp_scene_frames(start_frame, duration_in_frames);
        let Some(scene) = self.project.find_scene_mut(id) else {
            return EditOutcome::Ignored;
        };
        scene.start_frame = start;
        scene.duration_in_frames = duration;
        let adjusted = start != start_frame || duration != duration_in_frames;
        if adjusted {
            tracing::trace!(
                scene = %id,
                requested_start = start_frame,
                requested_duration = duration_in_frames,
                start,
                duration,
                "scene frames clamped"
            );
        }
        EditOutcome::from_adjusted(adjusted)
    }

    /// Insert an empty scene after `after_index` (or at the end), re-layout, and
    /// select it. Refused when equal-width scenes would drop below one second.
    pub fn add_scene(&mut self, after_index: Option<usize>) -> Option<Uuid> {
        let count = self.project.scenes.len() as FrameIndex;
        let min = FrameIndex::from(self.project.fps());
        if (count + 1) * min > self.total_frames() {
            tracing::debug!(scenes = count, "add_scene refused: no room for another one-second scene");
            return None;
        }
        let index = match after_index {
            Some(after) if after < self.project.scenes.len() => after + 1,
            _ => self.project.scenes.len(),
        };
        let scene = Scene::placeholder();
        let id = scene.id;
        self.project.scenes.insert(index, scene);
        self.project.recalc_frames();
        self.selected_scene_id = Some(id);
        tracing::debug!(scene = %id, index, "scene added");
        Some(id)
    }

    /// Remove a scene and re-layout. The last remaining scene cannot be removed.
    pub fn remove_scene(&mut self, id: Uuid) -> EditOutcome {
        if self.project.scenes.len() <= 1 {
            tracing::debug!(scene = %id, "remove_scene refused: project needs at least one scene");
            return EditOutcome::Ignored;
        }
        let Some(index) = self.project.scene_index(id) else {
            return EditOutcome::Ignored;
        };
        self.project.scenes.remove(index);
        self.project.recalc_frames();
        if self.selected_scene_id == Some(id) {
            self.selected_scene_id = self.project.scenes.first().map(|scene| scene.id);
        }
        tracing::debug!(scene = %id, index, "scene removed");
        EditOutcome::Applied
    }

    /// Move the scene at `from_index` to `to_index`, then re-layout.
    pub fn reorder_scenes(&mut self, from_index: usize, to_index: usize) -> EditOutcome {
        let len = self.project.scenes.len();
        if from_index >= len {
            return EditOutcome::Ignored;
        }
        let target = to_index.min(len - 1);
        let scene = self.project.scenes.remove(from_index);
        self.project.scenes.insert(target, scene);
        self.project.recalc_frames();
        EditOutcome::from_adjusted(target != to_index)
    }

    /// Restore the contiguous equal-width layout.
    pub fn recalc_frames(&mut self) {
        self.project.recalc_frames();
    }

    // =========================================================================
    // Project-wide fields
    // =========================================================================

    /// Merge metadata. A duration change re-lays out every scene and re-clamps
    /// the playhead.
    pub fn update_meta(&mut self, patch: MetaPatch) -> EditOutcome {
        let mut adjusted = false;
        if let Some(title) = patch.title {
            self.project.meta.title = title;
        }
        if let Some(aspect_ratio) = patch.aspect_ratio {
            self.project.meta.aspect_ratio = aspect_ratio;
        }
        if let Some(requested) = patch.duration_seconds {
            let duration = if requested.is_finite() {
                requested.max(MIN_PROJECT_SECONDS)
            } else {
                self.project.meta.duration_seconds
            };
            adjusted = duration != requested;
            if duration != self.project.meta.duration_seconds {
                self.project.meta.duration_seconds = duration;
                self.project.recalc_frames();
                self.set_current_frame(self.current_frame);
                if let Some(seek) = self.seek_to_frame {
                    self.seek_to_frame = Some(seek.clamp(0, self.project.last_frame()));
                }
                tracing::debug!(duration, total_frames = self.total_frames(), "project duration changed");
            }
        }
        EditOutcome::from_adjusted(adjusted)
    }

    /// Replace or clear the narration track.
    pub fn update_audio(&mut self, audio: Option<VoiceOver>) {
        self.project.audio = audio.map(VoiceOver::normalized);
    }

    pub fn update_music_volume(&mut self, volume: f32) -> EditOutcome {
        let clamped = clamp_volume(volume);
        self.project.music_volume = clamped;
        EditOutcome::from_adjusted(clamped != volume)
    }

    pub fn set_music_url(&mut self, url: Option<String>) {
        self.project.music_url = url.filter(|url| !url.trim().is_empty());
    }

    pub fn set_caption_url(&mut self, url: Option<String>) {
        self.project.caption_url = url.filter(|url| !url.trim().is_empty());
    }

    /// Swap in a whole project (load, undo/redo). Selection and playhead are kept
    /// when still valid.
    pub fn replace_project(&mut self, mut project: Project) {
        project.normalize();
        self.project = project;
        let selection_valid = self
            .selected_scene_id
            .is_some_and(|id| self.project.find_scene(id).is_some());
        if !selection_valid {
            self.selected_scene_id = self.project.scenes.first().map(|scene| scene.id);
        }
        self.set_current_frame(self.current_frame);
        self.seek_to_frame = None;
    }

    // =========================================================================
    // Playhead
    // =========================================================================

    pub fn current_frame(&self) -> FrameIndex {
        self.current_frame
    }

    /// Move the playhead, clamped to `[0, total − 1]`. Returns the stored frame.
    pub fn set_current_frame(&mut self, frame: FrameIndex) -> FrameIndex {
        self.current_frame = frame.clamp(0, self.project.last_frame());
        self.current_frame
    }

    pub fn seek_to_frame(&self) -> Option<FrameIndex> {
        self.seek_to_frame
    }

    /// Post (or clear) a one-shot seek for the preview.
    pub fn set_seek_to_frame(&mut self, frame: Option<FrameIndex>) {
        self.seek_to_frame = frame.map(|frame| frame.clamp(0, self.project.last_frame()));
    }

    /// Consume the pending seek, if any.
    pub fn take_seek_request(&mut self) -> Option<FrameIndex> {
        self.seek_to_frame.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProjectPayload;
    use proptest::prelude::*;

    /// 60 s at 30 fps with four 450-frame scenes.
    fn four_scene_store() -> EditorStore {
        let payload = ProjectPayload {
            title: "Four".into(),
            duration_seconds: 60.0,
            image_urls: (1..=4).map(|i| format!("{i}.png")).collect(),
            script: "Scene text".into(),
            audio_url: None,
        };
        EditorStore::new(Project::from_payload(&payload, 30))
    }

    fn layout(store: &EditorStore) -> Vec<(FrameIndex, FrameIndex)> {
        store
            .project()
            .scenes
            .iter()
            .map(|scene| (scene.start_frame, scene.duration_in_frames))
            .collect()
    }

    #[test]
    fn new_store_selects_first_scene() {
        let store = four_scene_store();
        assert_eq!(store.selected_scene_id(), Some(store.project().scenes[0].id));
        assert_eq!(store.current_frame(), 0);
    }

    #[test]
    fn update_scene_frames_commits_in_range_values() {
        let mut store = four_scene_store();
        let id = store.project().scenes[1].id;
        assert_eq!(store.update_scene_frames(id, 450, 510), EditOutcome::Applied);
        assert_eq!(layout(&store)[1], (450, 510));
        assert_eq!(layout(&store)[2], (900, 450));
    }

    #[test]
    fn update_scene_frames_clamps_out_of_range_values() {
        let mut store = four_scene_store();
        let id = store.project().scenes[3].id;
        assert_eq!(store.update_scene_frames(id, 1700, 400), EditOutcome::Adjusted);
        assert_eq!(layout(&store)[3], (1700, 100));
        assert_eq!(store.update_scene_frames(id, -20, 5), EditOutcome::Adjusted);
        assert_eq!(layout(&store)[3], (0, 30));
        assert_eq!(store.update_scene_frames(Uuid::new_v4(), 0, 30), EditOutcome::Ignored);
    }

    #[test]
    fn update_scene_merges_without_layout_change() {
        let mut store = four_scene_store();
        let id = store.project().scenes[0].id;
        let before = layout(&store);
        assert_eq!(store.update_scene(id, ScenePatch::text("New text")), EditOutcome::Applied);
        assert_eq!(store.project().scenes[0].text, "New text");
        assert_eq!(layout(&store), before);
        assert_eq!(store.update_scene(id, ScenePatch::default()), EditOutcome::Ignored);
    }

    #[test]
    fn add_scene_inserts_after_index_and_selects_it() {
        let mut store = four_scene_store();
        let id = store.add_scene(Some(0)).unwrap();
        assert_eq!(store.project().scenes[1].id, id);
        assert_eq!(store.selected_scene_id(), Some(id));
        assert_eq!(layout(&store), vec![(0, 360), (360, 360), (720, 360), (1080, 360), (1440, 360)]);
    }

    #[test]
    fn add_scene_appends_when_index_is_missing_or_out_of_range() {
        let mut store = four_scene_store();
        let id = store.add_scene(None).unwrap();
        assert_eq!(store.project().scenes.last().map(|s| s.id), Some(id));
        let id = store.add_scene(Some(99)).unwrap();
        assert_eq!(store.project().scenes.last().map(|s| s.id), Some(id));
    }

    #[test]
    fn add_scene_refuses_sub_second_layout() {
        let mut store = EditorStore::new(Project::new("Short", 2.0, 30));
        assert!(store.add_scene(None).is_some());
        assert!(store.add_scene(None).is_none());
        assert_eq!(store.project().scenes.len(), 2);
    }

    #[test]
    fn remove_scene_keeps_at_least_one() {
        let mut store = EditorStore::new(Project::new("Single", 10.0, 30));
        let id = store.project().scenes[0].id;
        assert_eq!(store.remove_scene(id), EditOutcome::Ignored);
        assert_eq!(store.project().scenes.len(), 1);
    }

    #[test]
    fn remove_selected_scene_moves_selection_to_first() {
        let mut store = four_scene_store();
        let removed = store.project().scenes[2].id;
        store.select_scene(removed);
        assert_eq!(store.remove_scene(removed), EditOutcome::Applied);
        assert_eq!(store.selected_scene_id(), Some(store.project().scenes[0].id));
        assert_eq!(layout(&store), vec![(0, 600), (600, 600), (1200, 600)]);
    }

    #[test]
    fn reorder_moves_scene_and_relayouts() {
        let mut store = four_scene_store();
        let ids: Vec<_> = store.project().scenes.iter().map(|s| s.id).collect();
        let first = store.project().scenes[0].id;
        store.update_scene_frames(first, 100, 900);
        assert_eq!(store.reorder_scenes(0, 2), EditOutcome::Applied);
        let reordered: Vec<_> = store.project().scenes.iter().map(|s| s.id).collect();
        assert_eq!(reordered, vec![ids[1], ids[2], ids[0], ids[3]]);
        assert_eq!(layout(&store), vec![(0, 450), (450, 450), (900, 450), (1350, 450)]);
        assert_eq!(store.reorder_scenes(9, 0), EditOutcome::Ignored);
        assert_eq!(store.reorder_scenes(0, 9), EditOutcome::Adjusted);
    }

    #[test]
    fn duration_change_relayouts_and_clamps_playhead() {
        let mut store = four_scene_store();
        store.set_current_frame(1700);
        assert_eq!(store.update_meta(MetaPatch::duration_seconds(20.0)), EditOutcome::Applied);
        assert_eq!(store.total_frames(), 600);
        assert_eq!(layout(&store), vec![(0, 150), (150, 150), (300, 150), (450, 150)]);
        assert_eq!(store.current_frame(), 599);
        assert_eq!(store.update_meta(MetaPatch::duration_seconds(0.2)), EditOutcome::Adjusted);
        assert_eq!(store.project().meta.duration_seconds, MIN_PROJECT_SECONDS);
    }

    #[test]
    fn title_change_does_not_touch_layout() {
        let mut store = four_scene_store();
        let id = store.project().scenes[0].id;
        store.update_scene_frames(id, 10, 60);
        store.update_meta(MetaPatch::title("Renamed"));
        assert_eq!(store.project().meta.title, "Renamed");
        assert_eq!(layout(&store)[0], (10, 60));
    }

    #[test]
    fn playhead_and_seek_are_clamped() {
        let mut store = four_scene_store();
        assert_eq!(store.set_current_frame(-10), 0);
        assert_eq!(store.set_current_frame(5_000), 1799);
        store.set_seek_to_frame(Some(1800));
        assert_eq!(store.take_seek_request(), Some(1799));
        assert_eq!(store.take_seek_request(), None);
    }

    #[test]
    fn audio_and_music_writes_are_clamped() {
        let mut store = four_scene_store();
        assert_eq!(store.update_music_volume(1.5), EditOutcome::Adjusted);
        assert_eq!(store.project().music_volume, 1.0);
        store.update_audio(Some(VoiceOver { volume: -1.0, ..VoiceOver::new("v.mp3") }));
        assert_eq!(store.project().audio.as_ref().map(|a| a.volume), Some(0.0));
        store.update_audio(None);
        assert!(store.project().audio.is_none());
        store.set_music_url(Some("  ".into()));
        assert!(store.project().music_url.is_none());
    }

    #[test]
    fn replace_project_keeps_valid_selection() {
        let mut store = four_scene_store();
        let snapshot = store.project().clone();
        let selected = snapshot.scenes[2].id;
        store.select_scene(selected);
        store.set_current_frame(1000);
        store.replace_project(snapshot);
        assert_eq!(store.selected_scene_id(), Some(selected));
        assert_eq!(store.current_frame(), 1000);

        store.replace_project(Project::new("Other", 10.0, 30));
        assert_eq!(store.selected_scene_id(), Some(store.project().scenes[0].id));
        assert_eq!(store.current_frame(), 299);
    }

    proptest! {
        #[test]
        fn frame_edits_never_break_bounds(
            edits in prop::collection::vec(
                (0usize..4, -10_000i64..10_000, -10_000i64..10_000),
                1..40,
            )
        ) {
            let mut store = four_scene_store();
            let ids: Vec<_> = store.project().scenes.iter().map(|s| s.id).collect();
            for (index, start, duration) in edits {
                store.update_scene_frames(ids[index], start, duration);
                for scene in &store.project().scenes {
                    prop_assert!(scene.start_frame >= 0);
                    prop_assert!(scene.end_frame() <= store.total_frames());
                    prop_assert!(scene.duration_in_frames >= 30);
                }
            }
        }

        #[test]
        fn recalc_is_idempotent_for_any_shape(count in 1usize..20, seconds in 20.0f64..600.0) {
            let mut project = Project::new("p", seconds, 30);
            project.scenes = (0..count).map(|_| Scene::placeholder()).collect();
            let mut store = EditorStore::new(project);
            store.recalc_frames();
            let once = layout(&store);
            store.recalc_frames();
            prop_assert_eq!(once, layout(&store));
        }
    }
}
