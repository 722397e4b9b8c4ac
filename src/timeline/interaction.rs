//! Pointer gestures on the timeline, independent of the UI toolkit.
//!
//! Each gesture is an `idle → dragging → idle` cycle owned by one pointer. While
//! a pointer holds a drag every other pointer is ignored until it is released.
//! Edits are committed on every move; releasing the pointer only ends the drag.

use uuid::Uuid;

use crate::core::frame_math::{FrameIndex, FrameScale};
use crate::core::timeline_snap::{resolve_second_snap, resolve_snap, SnapMatch};
use crate::state::{EditOutcome, EditorStore};

use super::caption_overrides::{clamp_cue_start, CaptionOverrides};

pub type PointerId = i32;

/// What a pointer-down landed on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragTarget {
    /// Body of a video clip.
    ClipBody { scene_id: Uuid },
    /// Right-edge resize handle of a video clip.
    ClipResize { scene_id: Uuid },
    /// A caption block at `slot` in the displayed cue list.
    Caption {
        slot: usize,
        start_seconds: f64,
        duration_seconds: f64,
    },
    /// The playhead handle.
    Playhead,
}

impl DragTarget {
    /// Undo label for drags that edit the project; `None` for view-only drags.
    pub fn edit_label(&self) -> Option<&'static str> {
        match self {
            DragTarget::ClipBody { .. } => Some("Move scene"),
            DragTarget::ClipResize { .. } => Some("Resize scene"),
            DragTarget::Caption { .. } | DragTarget::Playhead => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragSession {
    MoveClip {
        scene_id: Uuid,
        origin_x: f64,
        start_frame: FrameIndex,
        duration: FrameIndex,
    },
    ResizeClip {
        scene_id: Uuid,
        origin_x: f64,
        start_frame: FrameIndex,
        duration: FrameIndex,
    },
    Caption {
        slot: usize,
        origin_x: f64,
        start_seconds: f64,
        duration_seconds: f64,
    },
    Playhead {
        origin_x: f64,
        start_frame: FrameIndex,
    },
}

/// A pointer position during a drag.
///
/// `x` may be in any horizontal coordinate space as long as it is the same one
/// used for the pointer-down; only deltas are used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMove {
    pub pointer_id: PointerId,
    pub x: f64,
    /// Snapping is skipped when false (the UI clears it while Alt is held).
    pub snap: bool,
}

/// The drag state machine for the whole timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineInteraction {
    snap_threshold_px: f64,
    active: Option<(PointerId, DragSession)>,
    snap_guide: Option<FrameIndex>,
}

impl TimelineInteraction {
    pub fn new(snap_threshold_px: f64) -> Self {
        Self {
            snap_threshold_px: snap_threshold_px.max(0.0),
            active: None,
            snap_guide: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Scene being moved or resized, if any.
    pub fn dragged_scene(&self) -> Option<Uuid> {
        match self.active {
            Some((_, DragSession::MoveClip { scene_id, .. } | DragSession::ResizeClip { scene_id, .. })) => {
                Some(scene_id)
            }
            _ => None,
        }
    }

    pub fn dragged_caption(&self) -> Option<usize> {
        match self.active {
            Some((_, DragSession::Caption { slot, .. })) => Some(slot),
            _ => None,
        }
    }

    /// Frame of the snap target the current drag is attached to.
    pub fn snap_guide(&self) -> Option<FrameIndex> {
        self.snap_guide
    }

    /// Start a drag. Returns false when another pointer already owns a drag or
    /// the target scene does not exist.
    pub fn pointer_down(
        &mut self,
        pointer_id: PointerId,
        x: f64,
        target: DragTarget,
        store: &mut EditorStore,
    ) -> bool {
        if let Some((owner, _)) = self.active {
            tracing::trace!(pointer_id, owner, "pointer ignored: drag already in progress");
            return false;
        }
        let session = match target {
            DragTarget::ClipBody { scene_id } | DragTarget::ClipResize { scene_id } => {
                let Some(scene) = store.project().find_scene(scene_id) else {
                    return false;
                };
                let (start_frame, duration) = (scene.start_frame, scene.duration_in_frames);
                store.select_scene(scene_id);
                if matches!(target, DragTarget::ClipBody { .. }) {
                    DragSession::MoveClip {
                        scene_id,
                        origin_x: x,
                        start_frame,
                        duration,
                    }
                } else {
                    DragSession::ResizeClip {
                        scene_id,
                        origin_x: x,
                        start_frame,
                        duration,
                    }
                }
            }
            DragTarget::Caption {
                slot,
                start_seconds,
                duration_seconds,
            } => DragSession::Caption {
                slot,
                origin_x: x,
                start_seconds,
                duration_seconds,
            },
            DragTarget::Playhead => DragSession::Playhead {
                origin_x: x,
                start_frame: store.current_frame(),
            },
        };
        tracing::trace!(pointer_id, ?session, "drag started");
        self.active = Some((pointer_id, session));
        self.snap_guide = None;
        true
    }

    /// Advance the drag owned by `pointer.pointer_id`. Returns false when that
    /// pointer owns no drag.
    pub fn pointer_move(
        &mut self,
        pointer: PointerMove,
        scale: &FrameScale,
        store: &mut EditorStore,
        captions: &mut CaptionOverrides,
    ) -> bool {
        let Some((owner, session)) = self.active else {
            return false;
        };
        if owner != pointer.pointer_id {
            return false;
        }
        let threshold_px = if pointer.snap { self.snap_threshold_px } else { 0.0 };
        self.snap_guide = match session {
            DragSession::MoveClip {
                scene_id,
                origin_x,
                start_frame,
                duration,
            } => move_clip(
                store,
                scale,
                threshold_px,
                scene_id,
                start_frame + scale.pixel_to_frame(pointer.x - origin_x),
                duration,
            ),
            DragSession::ResizeClip {
                scene_id,
                origin_x,
                start_frame,
                duration,
            } => resize_clip(
                store,
                scale,
                threshold_px,
                scene_id,
                start_frame,
                duration + scale.pixel_to_frame(pointer.x - origin_x),
            ),
            DragSession::Caption {
                slot,
                origin_x,
                start_seconds,
                duration_seconds,
            } => {
                let delta_seconds = if scale.pixels_per_second > 0.0 {
                    (pointer.x - origin_x) / scale.pixels_per_second
                } else {
                    0.0
                };
                let start = (start_seconds + delta_seconds).round();
                let start = clamp_cue_start(start, duration_seconds, store.project().total_seconds());
                captions.set_start(slot, start);
                None
            }
            DragSession::Playhead { origin_x, start_frame } => {
                let frame = (start_frame + scale.pixel_to_frame(pointer.x - origin_x))
                    .clamp(0, store.total_frames());
                let frame = store.set_current_frame(frame);
                store.set_seek_to_frame(Some(frame));
                None
            }
        };
        true
    }

    /// End the drag owned by `pointer_id`. Whatever was committed stays.
    pub fn pointer_up(&mut self, pointer_id: PointerId) -> bool {
        match self.active {
            Some((owner, session)) if owner == pointer_id => {
                tracing::trace!(pointer_id, ?session, "drag finished");
                self.active = None;
                self.snap_guide = None;
                true
            }
            _ => false,
        }
    }

    /// The pointer left the timeline surface; ends its drag like a release.
    pub fn pointer_leave(&mut self, pointer_id: PointerId) -> bool {
        self.pointer_up(pointer_id)
    }

    /// Click on the ruler at content offset `x`: seek there, snapping to the
    /// timeline extremes and whole seconds but never to clips.
    pub fn ruler_click(&self, x: f64, scale: &FrameScale, store: &mut EditorStore, snap: bool) -> FrameIndex {
        let threshold_px = if snap { self.snap_threshold_px } else { 0.0 };
        let candidate = scale.pixel_to_frame(x);
        let snapped = resolve_snap(candidate, scale, store.total_frames(), &[], threshold_px);
        let frame = store.set_current_frame(snapped.frame);
        store.set_seek_to_frame(Some(frame));
        frame
    }
}

/// Move a clip to `candidate_start`, snapping whichever of its edges lands
/// closer to a target. Returns the snap guide frame.
fn move_clip(
    store: &mut EditorStore,
    scale: &FrameScale,
    threshold_px: f64,
    scene_id: Uuid,
    candidate_start: FrameIndex,
    duration: FrameIndex,
) -> Option<FrameIndex> {
    let total = store.total_frames();
    let others = store.project().clip_edges_except(scene_id);
    let candidate_end = candidate_start + duration;

    let leading = resolve_snap(candidate_start, scale, total, &others, threshold_px);
    let trailing = resolve_snap(candidate_end, scale, total, &others, threshold_px);
    let (delta, guide) = match (snapped_delta(&leading, candidate_start), snapped_delta(&trailing, candidate_end)) {
        (Some(lead), Some(trail)) if trail.abs() < lead.abs() => (trail, Some(trailing.frame)),
        (Some(lead), _) => (lead, Some(leading.frame)),
        (None, Some(trail)) => (trail, Some(trailing.frame)),
        (None, None) => (0, None),
    };

    let start = (candidate_start + delta).clamp(0, (total - duration).max(0));
    if store.update_scene_frames(scene_id, start, duration) == EditOutcome::Ignored {
        return None;
    }
    let committed_start = store
        .project()
        .find_scene(scene_id)
        .map_or(start, |scene| scene.start_frame);
    store.set_current_frame(committed_start);
    guide.filter(|&frame| frame == committed_start || frame == committed_start + duration)
}

/// Resize a clip from its right edge, snapping the length to whole seconds.
fn resize_clip(
    store: &mut EditorStore,
    scale: &FrameScale,
    threshold_px: f64,
    scene_id: Uuid,
    start_frame: FrameIndex,
    candidate_duration: FrameIndex,
) -> Option<FrameIndex> {
    let snapped = resolve_second_snap(candidate_duration, scale, threshold_px);
    let min = store.project().min_scene_frames();
    let duration = snapped
        .frame
        .clamp(min, (store.total_frames() - start_frame).max(min));
    if store.update_scene_frames(scene_id, start_frame, duration) == EditOutcome::Ignored {
        return None;
    }
    let end = store
        .project()
        .find_scene(scene_id)
        .map_or(start_frame + duration, |scene| scene.end_frame());
    store.set_current_frame(end - 1);
    (snapped.target.is_some() && duration == snapped.frame).then_some(end)
}

fn snapped_delta(snap: &SnapMatch, candidate: FrameIndex) -> Option<FrameIndex> {
    snap.target.map(|_| snap.delta_from(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::History;
    use crate::state::{MetaPatch, Project, ProjectPayload};

    const SNAP_PX: f64 = 8.0;
    const MOUSE: PointerId = 1;
    const TOUCH: PointerId = 2;

    /// 60 s at 30 fps, four 450-frame scenes.
    fn four_scene_store() -> EditorStore {
        let payload = ProjectPayload {
            title: "Drag".into(),
            duration_seconds: 60.0,
            image_urls: (0..4).map(|i| format!("{i}.png")).collect(),
            script: String::new(),
            audio_url: None,
        };
        EditorStore::new(Project::from_payload(&payload, 30))
    }

    /// 100 px/s: 3.33 px per frame, three-frame snap window.
    fn scale() -> FrameScale {
        FrameScale::new(100.0, 30)
    }

    fn drag(
        interaction: &mut TimelineInteraction,
        store: &mut EditorStore,
        captions: &mut CaptionOverrides,
        x: f64,
    ) -> bool {
        interaction.pointer_move(
            PointerMove {
                pointer_id: MOUSE,
                x,
                snap: true,
            },
            &scale(),
            store,
            captions,
        )
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
    fn extending_scene_two_by_two_seconds_commits_510_frames() {
        let mut store = four_scene_store();
        let mut captions = CaptionOverrides::default();
        let mut interaction = TimelineInteraction::new(SNAP_PX);
        let scene_id = store.project().scenes[1].id;

        assert!(interaction.pointer_down(MOUSE, 1000.0, DragTarget::ClipResize { scene_id }, &mut store));
        // 198 px is 59 frames; the whole-second snap pulls it to 60.
        assert!(drag(&mut interaction, &mut store, &mut captions, 1198.0));
        assert!(interaction.pointer_up(MOUSE));

        assert_eq!(layout(&store), vec![(0, 450), (450, 510), (900, 450), (1350, 450)]);
        assert_eq!(store.current_frame(), 959);
        assert_eq!(store.selected_scene_id(), Some(scene_id));
        assert!(interaction.snap_guide().is_none());
    }

    #[test]
    fn resize_cannot_pass_project_end_or_drop_below_one_second() {
        let mut store = four_scene_store();
        let mut captions = CaptionOverrides::default();
        let mut interaction = TimelineInteraction::new(SNAP_PX);
        let scene_id = store.project().scenes[3].id;

        interaction.pointer_down(MOUSE, 0.0, DragTarget::ClipResize { scene_id }, &mut store);
        drag(&mut interaction, &mut store, &mut captions, 5000.0);
        assert_eq!(layout(&store)[3], (1350, 450));
        drag(&mut interaction, &mut store, &mut captions, -5000.0);
        assert_eq!(layout(&store)[3], (1350, 30));
    }

    #[test]
    fn move_snaps_to_neighbour_edge_and_keeps_duration() {
        let mut store = four_scene_store();
        let mut captions = CaptionOverrides::default();
        let mut interaction = TimelineInteraction::new(SNAP_PX);
        let scene_id = store.project().scenes[0].id;

        interaction.pointer_down(MOUSE, 10.0, DragTarget::ClipBody { scene_id }, &mut store);
        // +452 frames leaves both edges two frames past scene two's edges; the
        // leading edge wins the tie.
        drag(&mut interaction, &mut store, &mut captions, 10.0 + 452.0 * 100.0 / 30.0);

        assert_eq!(layout(&store)[0], (450, 450));
        assert_eq!(store.current_frame(), 450);
        assert_eq!(interaction.snap_guide(), Some(450));
    }

    #[test]
    fn move_without_snap_lands_on_raw_frame() {
        let mut store = four_scene_store();
        let mut captions = CaptionOverrides::default();
        let mut interaction = TimelineInteraction::new(SNAP_PX);
        let scene_id = store.project().scenes[0].id;

        interaction.pointer_down(MOUSE, 0.0, DragTarget::ClipBody { scene_id }, &mut store);
        interaction.pointer_move(
            PointerMove {
                pointer_id: MOUSE,
                x: 10.0,
                snap: false,
            },
            &scale(),
            &mut store,
            &mut captions,
        );
        assert_eq!(layout(&store)[0], (3, 450));
        assert!(interaction.snap_guide().is_none());
    }

    #[test]
    fn move_is_clamped_inside_project() {
        let mut store = four_scene_store();
        let mut captions = CaptionOverrides::default();
        let mut interaction = TimelineInteraction::new(SNAP_PX);
        let scene_id = store.project().scenes[2].id;

        interaction.pointer_down(MOUSE, 0.0, DragTarget::ClipBody { scene_id }, &mut store);
        drag(&mut interaction, &mut store, &mut captions, 99_999.0);
        assert_eq!(layout(&store)[2], (1350, 450));
        drag(&mut interaction, &mut store, &mut captions, -99_999.0);
        assert_eq!(layout(&store)[2], (0, 450));
    }

    #[test]
    fn second_pointer_is_ignored_until_release() {
        let mut store = four_scene_store();
        let mut captions = CaptionOverrides::default();
        let mut interaction = TimelineInteraction::new(SNAP_PX);
        let first = store.project().scenes[0].id;
        let second = store.project().scenes[1].id;

        assert!(interaction.pointer_down(MOUSE, 0.0, DragTarget::ClipBody { scene_id: first }, &mut store));
        assert!(!interaction.pointer_down(TOUCH, 0.0, DragTarget::ClipBody { scene_id: second }, &mut store));
        assert!(!interaction.pointer_move(
            PointerMove {
                pointer_id: TOUCH,
                x: 500.0,
                snap: true,
            },
            &scale(),
            &mut store,
            &mut captions,
        ));
        assert!(!interaction.pointer_up(TOUCH));
        assert_eq!(interaction.dragged_scene(), Some(first));
        assert_eq!(layout(&store)[1], (450, 450));

        assert!(interaction.pointer_leave(MOUSE));
        assert!(!interaction.is_dragging());
        assert!(interaction.pointer_down(TOUCH, 0.0, DragTarget::ClipBody { scene_id: second }, &mut store));
    }

    #[test]
    fn stale_clip_target_opens_no_edit() {
        let mut store = four_scene_store();
        let mut history = History::default();
        let mut interaction = TimelineInteraction::new(SNAP_PX);
        let kept = store.project().scenes[0].id;

        history.checkpoint("Rename", store.project());
        store.update_meta(MetaPatch::title("Renamed"));
        history.discard_if_unchanged(store.project());
        let checkpoint = history.undo(store.project()).unwrap();
        store.replace_project(checkpoint.project);
        store.select_scene(kept);

        let target = DragTarget::ClipBody { scene_id: Uuid::new_v4() };
        let started = interaction.pointer_down(MOUSE, 0.0, target, &mut store);
        if let (true, Some(label)) = (started, target.edit_label()) {
            history.checkpoint(label, store.project());
        }

        assert!(!started);
        assert!(!interaction.is_dragging());
        assert_eq!(store.selected_scene_id(), Some(kept));
        assert_eq!(history.redo_label(), Some("Rename"));
        assert_eq!(DragTarget::Playhead.edit_label(), None);
        assert_eq!(DragTarget::ClipResize { scene_id: kept }.edit_label(), Some("Resize scene"));
    }

    #[test]
    fn caption_drag_rounds_to_seconds_without_touching_scenes() {
        let mut store = four_scene_store();
        let before = layout(&store);
        let mut captions = CaptionOverrides::default();
        let mut interaction = TimelineInteraction::new(SNAP_PX);

        let target = DragTarget::Caption {
            slot: 1,
            start_seconds: 15.0,
            duration_seconds: 15.0,
        };
        interaction.pointer_down(MOUSE, 0.0, target, &mut store);
        assert_eq!(interaction.dragged_caption(), Some(1));
        drag(&mut interaction, &mut store, &mut captions, 240.0);
        assert_eq!(captions.start_for(1), Some(17.0));
        drag(&mut interaction, &mut store, &mut captions, 10_000.0);
        assert_eq!(captions.start_for(1), Some(45.0));
        assert_eq!(layout(&store), before);
    }

    #[test]
    fn playhead_drag_seeks_without_snapping() {
        let mut store = four_scene_store();
        let mut captions = CaptionOverrides::default();
        let mut interaction = TimelineInteraction::new(SNAP_PX);
        store.set_current_frame(300);

        interaction.pointer_down(MOUSE, 0.0, DragTarget::Playhead, &mut store);
        drag(&mut interaction, &mut store, &mut captions, 10.0);
        assert_eq!(store.current_frame(), 303);
        assert_eq!(store.take_seek_request(), Some(303));

        drag(&mut interaction, &mut store, &mut captions, 1_000_000.0);
        assert_eq!(store.current_frame(), 1799);
    }

    #[test]
    fn ruler_click_snaps_to_seconds_but_not_clips() {
        let mut store = four_scene_store();
        let interaction = TimelineInteraction::new(SNAP_PX);

        // 449 frames is near scene two's start at 450, which is also a second boundary.
        let frame = interaction.ruler_click(449.0 * 100.0 / 30.0, &scale(), &mut store, true);
        assert_eq!(frame, 450);
        // Frame 15 is half a second from either boundary, outside the three-frame window.
        let frame = interaction.ruler_click(15.0 * 100.0 / 30.0, &scale(), &mut store, true);
        assert_eq!(frame, 15);
        assert_eq!(store.take_seek_request(), Some(15));
    }
}
