//! Undo/redo checkpoints of the project.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::state::Project;

/// Default number of undo steps kept.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// A snapshot of the project taken before an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub label: String,
    pub taken_at: DateTime<Utc>,
    pub project: Project,
}

/// Bounded undo/redo stacks of whole-project snapshots.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Checkpoint>,
    redo: Vec<Checkpoint>,
    depth: usize,
    /// Edit opened by `checkpoint` and not yet closed.
    pending: Option<PendingEdit>,
}

/// Redo entries set aside until the open edit proves it changed something.
#[derive(Debug, Clone)]
struct PendingEdit {
    pushed: bool,
    redo: Vec<Checkpoint>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl History {
    pub fn new(depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            depth: depth.max(1),
            pending: None,
        }
    }

    /// Record `project` as it was before the edit named `label`.
    ///
    /// Opens an edit: the redo stack is set aside and only comes back if
    /// `discard_if_unchanged` finds the edit was a no-op. The oldest checkpoint
    /// is dropped past `depth`.
    pub fn checkpoint(&mut self, label: impl Into<String>, project: &Project) {
        let stashed = std::mem::take(&mut self.redo);
        let redo = match self.pending.take() {
            Some(open) if stashed.is_empty() => open.redo,
            _ => stashed,
        };
        let pushed = !self.undo.back().is_some_and(|last| last.project == *project);
        if pushed {
            self.undo.push_back(Checkpoint {
                label: label.into(),
                taken_at: Utc::now(),
                project: project.clone(),
            });
            while self.undo.len() > self.depth {
                self.undo.pop_front();
            }
        }
        self.pending = Some(PendingEdit { pushed, redo });
    }

    /// Close the open edit. When it changed nothing, e.g. a click on a clip
    /// that never moved, its checkpoint is dropped and the redo stack restored.
    /// Returns whether a checkpoint was dropped.
    pub fn discard_if_unchanged(&mut self, current: &Project) -> bool {
        let Some(open) = self.pending.take() else {
            return false;
        };
        if !self.undo.back().is_some_and(|last| last.project == *current) {
            return false;
        }
        if open.pushed {
            self.undo.pop_back();
        }
        self.redo = open.redo;
        open.pushed
    }

    /// Step back. `current` is saved for redo; returns the project to restore.
    pub fn undo(&mut self, current: &Project) -> Option<Checkpoint> {
        self.pending = None;
        let checkpoint = self.undo.pop_back()?;
        self.redo.push(Checkpoint {
            label: checkpoint.label.clone(),
            taken_at: Utc::now(),
            project: current.clone(),
        });
        tracing::debug!(label = %checkpoint.label, "undo");
        Some(checkpoint)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: &Project) -> Option<Checkpoint> {
        self.pending = None;
        let checkpoint = self.redo.pop()?;
        self.undo.push_back(Checkpoint {
            label: checkpoint.label.clone(),
            taken_at: Utc::now(),
            project: current.clone(),
        });
        tracing::debug!(label = %checkpoint.label, "redo");
        Some(checkpoint)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Label of the edit the next undo reverts.
    pub fn undo_label(&self) -> Option<&str> {
        self.undo.back().map(|checkpoint| checkpoint.label.as_str())
    }

    pub fn redo_label(&self) -> Option<&str> {
        self.redo.last().map(|checkpoint| checkpoint.label.as_str())
    }

    /// Forget everything, e.g. after opening another project.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EditorStore, ScenePatch};

    #[test]
    fn undo_then_redo_restores_edits() {
        let mut store = EditorStore::new(Project::new("History", 10.0, 30));
        let mut history = History::default();
        let id = store.project().scenes[0].id;

        history.checkpoint("Edit text", store.project());
        store.update_scene(id, ScenePatch::text("after"));

        let checkpoint = history.undo(store.project()).unwrap();
        assert_eq!(checkpoint.label, "Edit text");
        store.replace_project(checkpoint.project);
        assert_eq!(store.project().scenes[0].text, "");
        assert_eq!(history.redo_label(), Some("Edit text"));

        let checkpoint = history.redo(store.project()).unwrap();
        store.replace_project(checkpoint.project);
        assert_eq!(store.project().scenes[0].text, "after");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_checkpoint_clears_redo() {
        let project = Project::new("History", 10.0, 30);
        let mut history = History::default();
        history.checkpoint("one", &project);
        history.undo(&project);
        assert!(history.can_redo());

        let mut edited = project.clone();
        edited.meta.title = "changed".into();
        history.checkpoint("two", &edited);
        assert!(!history.can_redo());
    }

    #[test]
    fn unchanged_edit_leaves_no_undo_step() {
        let mut store = EditorStore::new(Project::new("History", 10.0, 30));
        let mut history = History::default();
        let id = store.project().scenes[0].id;

        history.checkpoint("Move clip", store.project());
        assert!(history.discard_if_unchanged(store.project()));
        assert!(!history.can_undo());

        history.checkpoint("Edit text", store.project());
        store.update_scene(id, ScenePatch::text("changed"));
        assert!(!history.discard_if_unchanged(store.project()));
        assert_eq!(history.undo_label(), Some("Edit text"));
    }

    #[test]
    fn no_op_gesture_after_undo_keeps_redo() {
        let mut store = EditorStore::new(Project::new("History", 10.0, 30));
        let mut history = History::default();

        history.checkpoint("Rename", store.project());
        store.update_meta(crate::state::MetaPatch::title("Renamed"));
        history.discard_if_unchanged(store.project());

        let checkpoint = history.undo(store.project()).unwrap();
        store.replace_project(checkpoint.project);
        assert!(history.can_redo());

        history.checkpoint("Move scene", store.project());
        assert!(!history.can_redo());
        assert!(history.discard_if_unchanged(store.project()));
        assert!(history.can_redo());
        assert!(!history.can_undo());
        assert_eq!(history.redo_label(), Some("Rename"));

        let checkpoint = history.redo(store.project()).unwrap();
        store.replace_project(checkpoint.project);
        assert_eq!(store.project().meta.title, "Renamed");
    }

    #[test]
    fn closing_without_open_edit_keeps_earlier_steps() {
        let mut project = Project::new("History", 10.0, 30);
        let mut history = History::default();
        history.checkpoint("Rename", &project);
        project.meta.title = "changed".into();
        assert!(!history.discard_if_unchanged(&project));

        history.checkpoint("Rename", &project);
        history.undo(&project);
        assert!(!history.discard_if_unchanged(&project));
        assert!(history.can_redo());
        assert_eq!(history.undo_label(), Some("Rename"));
    }

    #[test]
    fn depth_drops_oldest_and_duplicates_are_skipped() {
        let mut history = History::new(2);
        let mut project = Project::new("History", 10.0, 30);
        for title in ["a", "b", "c"] {
            project.meta.title = title.into();
            history.checkpoint(title, &project);
        }
        history.checkpoint("same", &project);
        assert_eq!(history.undo_label(), Some("c"));
        history.undo(&project);
        assert_eq!(history.undo_label(), Some("b"));
        history.undo(&project);
        assert!(!history.can_undo());
    }
}
