//! Session-only caption offsets layered over the derived cue list.
//!
//! Dragging a caption block never touches the project. The new start is kept
//! here, keyed by the cue's position in the derived list, and is dropped as soon
//! as the derived list itself changes.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use crate::core::captions::CaptionCue;

/// Identity of a derived cue list. Any change to a cue's index, timing or text
/// changes the fingerprint.
pub fn cue_fingerprint(cues: &[CaptionCue]) -> u64 {
    let mut hasher = DefaultHasher::new();
    cues.len().hash(&mut hasher);
    for cue in cues {
        cue.index.hash(&mut hasher);
        cue.start_seconds.to_bits().hash(&mut hasher);
        cue.end_seconds.to_bits().hash(&mut hasher);
        cue.text.hash(&mut hasher);
    }
    hasher.finish()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionOverrides {
    fingerprint: u64,
    starts: BTreeMap<usize, f64>,
}

impl CaptionOverrides {
    /// Keep these overrides if `cues` is the list they were made for, otherwise
    /// start over empty for the new list.
    pub fn reconcile(self, cues: &[CaptionCue]) -> Self {
        let fingerprint = cue_fingerprint(cues);
        if fingerprint == self.fingerprint {
            self
        } else {
            if !self.starts.is_empty() {
                tracing::debug!(dropped = self.starts.len(), "caption overrides cleared");
            }
            Self {
                fingerprint,
                starts: BTreeMap::new(),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn start_for(&self, slot: usize) -> Option<f64> {
        self.starts.get(&slot).copied()
    }

    pub fn set_start(&mut self, slot: usize, start_seconds: f64) {
        self.starts.insert(slot, start_seconds);
    }

    pub fn clear(&mut self) {
        self.starts.clear();
    }

    /// The cues as displayed: overridden cues keep their length and move to the
    /// stored start, clamped so they end inside `[0, total_seconds]`.
    pub fn apply(&self, cues: &[CaptionCue], total_seconds: f64) -> Vec<CaptionCue> {
        cues.iter()
            .enumerate()
            .map(|(slot, cue)| match self.start_for(slot) {
                Some(start) => {
                    let length = cue.duration_seconds();
                    let start = clamp_cue_start(start, length, total_seconds);
                    CaptionCue {
                        start_seconds: start,
                        end_seconds: (start + length).min(total_seconds),
                        ..cue.clone()
                    }
                }
                None => cue.clone(),
            })
            .collect()
    }
}

/// Clamp a cue start so a cue of `length` stays inside `[0, total_seconds]`.
pub(crate) fn clamp_cue_start(start: f64, length: f64, total_seconds: f64) -> f64 {
    let latest = (total_seconds - length).max(0.0);
    if start.is_finite() {
        start.clamp(0.0, latest)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cues() -> Vec<CaptionCue> {
        vec![
            CaptionCue {
                index: 1,
                start_seconds: 0.0,
                end_seconds: 5.0,
                text: "one".into(),
            },
            CaptionCue {
                index: 2,
                start_seconds: 5.0,
                end_seconds: 10.0,
                text: "two".into(),
            },
        ]
    }

    #[test]
    fn apply_moves_only_overridden_cues() {
        let base = cues();
        let mut overrides = CaptionOverrides::default().reconcile(&base);
        overrides.set_start(0, 2.0);
        let shown = overrides.apply(&base, 10.0);
        assert_eq!((shown[0].start_seconds, shown[0].end_seconds), (2.0, 7.0));
        assert_eq!(shown[1], base[1]);
        assert_eq!(base[0].start_seconds, 0.0);
    }

    #[test]
    fn apply_clamps_to_project_bound() {
        let base = cues();
        let mut overrides = CaptionOverrides::default().reconcile(&base);
        overrides.set_start(1, 8.0);
        let shown = overrides.apply(&base, 10.0);
        assert_eq!((shown[1].start_seconds, shown[1].end_seconds), (5.0, 10.0));
    }

    #[test]
    fn reconcile_keeps_same_list_and_drops_changed_list() {
        let base = cues();
        let mut overrides = CaptionOverrides::default().reconcile(&base);
        overrides.set_start(0, 3.0);

        let overrides = overrides.reconcile(&cues());
        assert_eq!(overrides.start_for(0), Some(3.0));

        let mut changed = cues();
        changed[1].text = "edited".into();
        let overrides = overrides.reconcile(&changed);
        assert!(overrides.is_empty());
    }
}
