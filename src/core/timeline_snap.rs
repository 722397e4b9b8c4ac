use uuid::Uuid;

use super::frame_math::{snap_to_second, FrameIndex, FrameScale};

/// Category of snap target used for tie-breaking.
///
/// Hard edges (other clips and the timeline extremes) always win over second
/// boundaries inside the threshold window, even when the second is nearer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapTargetKind {
    /// Start or end edge of another clip.
    ClipEdge,
    /// Frame 0 or the last frame boundary of the project.
    TimelineBound,
    /// Nearest whole-second boundary.
    SecondBoundary,
}

impl SnapTargetKind {
    /// Lower tiers are considered before higher tiers regardless of distance.
    pub fn tier(self) -> u8 {
        match self {
            SnapTargetKind::ClipEdge | SnapTargetKind::TimelineBound => 0,
            SnapTargetKind::SecondBoundary => 1,
        }
    }

    /// Priority for tie-breaking when tier and distance are equal.
    pub fn priority(self) -> i32 {
        match self {
            SnapTargetKind::ClipEdge => 3,
            SnapTargetKind::TimelineBound => 2,
            SnapTargetKind::SecondBoundary => 1,
        }
    }
}

/// Snap target expressed in frame units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapTarget {
    pub frame: FrameIndex,
    pub kind: SnapTargetKind,
    /// Scene id if this target comes from a clip edge.
    pub scene_id: Option<Uuid>,
}

impl SnapTarget {
    pub fn clip_edge(frame: FrameIndex, scene_id: Uuid) -> Self {
        Self {
            frame,
            kind: SnapTargetKind::ClipEdge,
            scene_id: Some(scene_id),
        }
    }

    pub fn timeline_bound(frame: FrameIndex) -> Self {
        Self {
            frame,
            kind: SnapTargetKind::TimelineBound,
            scene_id: None,
        }
    }

    pub fn second_boundary(frame: FrameIndex) -> Self {
        Self {
            frame,
            kind: SnapTargetKind::SecondBoundary,
            scene_id: None,
        }
    }
}

/// Start/end frames of a clip that a dragged clip may snap against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipEdges {
    pub scene_id: Uuid,
    pub start: FrameIndex,
    pub end: FrameIndex,
}

/// Result of a snap query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapMatch {
    /// Frame to commit: the snapped target, or the clamped candidate.
    pub frame: FrameIndex,
    /// The target that was snapped to, if any.
    pub target: Option<SnapTarget>,
}

impl SnapMatch {
    /// Signed distance the snap moved the candidate.
    pub fn delta_from(&self, candidate: FrameIndex) -> FrameIndex {
        self.frame - candidate
    }
}

/// Snap window in frames for a pixel threshold at the given zoom.
pub fn snap_threshold_frames(pixels_per_frame: f64, threshold_px: f64) -> FrameIndex {
    if !(pixels_per_frame > 0.0) || !(threshold_px > 0.0) {
        return 0;
    }
    (threshold_px / pixels_per_frame).ceil() as FrameIndex
}

/// Resolve the frame a dragged position should land on.
///
/// Candidates are the timeline extremes, the nearest second boundary and the
/// edges of `other_edges`; anything outside `[0, total_frames]` is ignored.
/// Runs in O(`other_edges.len()`) without allocating.
pub fn resolve_snap(
    candidate: FrameIndex,
    scale: &FrameScale,
    total_frames: FrameIndex,
    other_edges: &[ClipEdges],
    threshold_px: f64,
) -> SnapMatch {
    let total_frames = total_frames.max(0);
    let clamped = candidate.clamp(0, total_frames);
    let threshold = snap_threshold_frames(scale.pixels_per_frame(), threshold_px);

    let fixed = [
        SnapTarget::timeline_bound(0),
        SnapTarget::timeline_bound(total_frames),
        SnapTarget::second_boundary(snap_to_second(candidate, scale.fps)),
    ];
    let edges = other_edges.iter().flat_map(|edge| {
        [
            SnapTarget::clip_edge(edge.start, edge.scene_id),
            SnapTarget::clip_edge(edge.end, edge.scene_id),
        ]
    });

    let mut best: Option<(SnapTarget, FrameIndex)> = None;
    for target in fixed.into_iter().chain(edges) {
        if target.frame < 0 || target.frame > total_frames {
            continue;
        }
        let distance = (target.frame - candidate).abs();
        if distance > threshold {
            continue;
        }
        let better = match best {
            None => true,
            Some((current, current_distance)) => {
                (target.kind.tier(), distance, -target.kind.priority())
                    < (current.kind.tier(), current_distance, -current.kind.priority())
            }
        };
        if better {
            best = Some((target, distance));
        }
    }

    match best {
        Some((target, _)) => SnapMatch {
            frame: target.frame,
            target: Some(target),
        },
        None => SnapMatch {
            frame: clamped,
            target: None,
        },
    }
}

/// Snap a frame to the nearest whole second only, when within the threshold.
pub fn resolve_second_snap(candidate: FrameIndex, scale: &FrameScale, threshold_px: f64) -> SnapMatch {
    let threshold = snap_threshold_frames(scale.pixels_per_frame(), threshold_px);
    let second = snap_to_second(candidate, scale.fps);
    if (second - candidate).abs() <= threshold {
        SnapMatch {
            frame: second,
            target: Some(SnapTarget::second_boundary(second)),
        }
    } else {
        SnapMatch {
            frame: candidate,
            target: None,
        }
    }
}
