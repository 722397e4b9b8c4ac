use std::fs;
use std::path::Path;

use crate::error::{EditorError, Result};
use super::Project;

impl Project {
    // =========================================================================
    // Save/Load
    // =========================================================================

    /// Write the project as pretty JSON, creating parent folders as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|err| EditorError::io("failed to create project folder", parent, err))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| EditorError::json(path, err))?;
        fs::write(path, json).map_err(|err| EditorError::io("failed to write project", path, err))?;
        tracing::info!(project = %self.id, path = %path.display(), "project saved");
        Ok(())
    }

    /// Load a project and repair anything out of range.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|err| EditorError::io("failed to read project", path, err))?;
        let mut project: Project =
            serde_json::from_str(&json).map_err(|err| EditorError::json(path, err))?;
        project.normalize();
        tracing::info!(
            project = %project.id,
            scenes = project.scenes.len(),
            path = %path.display(),
            "project loaded"
        );
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Scene;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("storyreel-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn save_then_load_restores_project() {
        let mut project = Project::new("Saved", 20.0, 30);
        project.scenes.push(Scene::new("b.png", "second"));
        project.recalc_frames();
        let path = temp_path("project.json");

        project.save_to(&path).unwrap();
        let loaded = Project::load(&path).unwrap();
        fs::remove_dir_all(path.parent().unwrap()).ok();

        assert_eq!(loaded, project);
    }

    #[test]
    fn load_normalizes_scene_frames() {
        let mut project = Project::new("Broken", 10.0, 30);
        project.scenes[0].start_frame = 10_000;
        let path = temp_path("project.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string(&project).unwrap()).unwrap();

        let loaded = Project::load(&path).unwrap();
        fs::remove_dir_all(path.parent().unwrap()).ok();

        assert_eq!(loaded.scenes[0].start_frame, 270);
        assert!(loaded.scenes[0].end_frame() <= loaded.total_frames());
    }

    #[test]
    fn load_reports_missing_file() {
        let result = Project::load(&temp_path("missing.json"));
        assert!(matches!(result, Err(EditorError::Io { .. })));
    }
}
