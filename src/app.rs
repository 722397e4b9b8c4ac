//! Root application component
//!
//! Owns the editing session (store, history, timeline view state) and wires the
//! panels together. File I/O runs on tokio's blocking pool; nothing in here blocks a
//! pointer handler.

use dioxus::prelude::*;
use std::path::{Path, PathBuf};

use crate::components::{InspectorPanel, PreviewPanel, StatusBar, TitleBar};
use crate::config::EditorConfig;
use crate::constants::*;
use crate::core::captions::{cue_source, derive_cues, CaptionCue};
use crate::core::history::History;
use crate::core::subtitles::load_srt;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{EditorStore, Project, ProjectPayload};
use crate::timeline::{CaptionOverrides, TimelineInteraction, TimelinePanel, TimelineZoom};

const PROJECT_FILTER: (&str, &[&str]) = ("Storyreel project", &["json"]);
const PAYLOAD_FILTER: (&str, &[&str]) = ("Generation payload", &["json"]);
const SUBTITLE_FILTER: (&str, &[&str]) = ("Subtitles", &["srt", "vtt"]);

/// Signals making up one editing session. All of them are `Copy` handles.
#[derive(Clone, Copy)]
struct Session {
    store: Signal<EditorStore>,
    history: Signal<History>,
    zoom: Signal<TimelineZoom>,
    caption_overrides: Signal<CaptionOverrides>,
    project_path: Signal<Option<PathBuf>>,
    /// Project as last opened or saved; `None` when it has never been written.
    saved_project: Signal<Option<Project>>,
    status: Signal<String>,
}

impl Session {
    /// Swap in a freshly opened project and reset everything tied to the old one.
    fn install(mut self, project: Project, path: Option<PathBuf>, config: &EditorConfig) {
        self.zoom.set(TimelineZoom::for_project(config, project.total_seconds()));
        self.history.write().clear();
        self.caption_overrides.write().clear();
        self.store.write().replace_project(project);
        let installed = self.store.read().project().clone();
        self.saved_project.set(path.as_ref().map(|_| installed));
        self.project_path.set(path);
    }

    fn report(mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.status.set(message);
    }

    fn report_error(mut self, action: &str, error: impl std::fmt::Display) {
        tracing::warn!(%error, "{action} failed");
        self.status.set(format!("{action} failed: {error}"));
    }

    fn begin_edit(mut self, label: &'static str) {
        self.history.write().checkpoint(label, self.store.read().project());
    }

    fn end_edit(mut self) {
        self.history.write().discard_if_unchanged(self.store.read().project());
    }

    fn undo(mut self) {
        let checkpoint = self.history.write().undo(self.store.read().project());
        match checkpoint {
            Some(checkpoint) => {
                self.store.write().replace_project(checkpoint.project);
                self.report(format!("Undid {}", checkpoint.label));
            }
            None => self.report("Nothing to undo"),
        }
    }

    fn redo(mut self) {
        let checkpoint = self.history.write().redo(self.store.read().project());
        match checkpoint {
            Some(checkpoint) => {
                self.store.write().replace_project(checkpoint.project);
                self.report(format!("Redid {}", checkpoint.label));
            }
            None => self.report("Nothing to redo"),
        }
    }

    /// Move the playhead and ask the preview to follow.
    fn seek(mut self, frame: i64) {
        let mut store = self.store.write();
        let frame = store.set_current_frame(frame);
        store.set_seek_to_frame(Some(frame));
    }

    fn is_dirty(&self) -> bool {
        self.saved_project.read().as_ref() != Some(self.store.read().project())
    }
}

/// Run file I/O off the UI thread.
async fn run_blocking<T: Send + 'static>(
    work: impl FnOnce() -> crate::error::Result<T> + Send + 'static,
) -> Result<T, String> {
    match tokio::task::spawn_blocking(work).await {
        Ok(result) => result.map_err(|err| err.to_string()),
        Err(err) => Err(format!("background task failed: {err}")),
    }
}

fn pick_file(title: &str, filter: (&str, &[&str])) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter(filter.0, filter.1)
        .pick_file()
}

fn open_project(session: Session, config: EditorConfig) {
    let Some(path) = pick_file("Open project", PROJECT_FILTER) else {
        return;
    };
    spawn(async move {
        let load_path = path.clone();
        match run_blocking(move || Project::load(&load_path)).await {
            Ok(project) => {
                session.install(project, Some(path.clone()), &config);
                session.report(format!("Opened {}", path.display()));
            }
            Err(err) => session.report_error("Open project", err),
        }
    });
}

fn import_payload(session: Session, config: EditorConfig) {
    let Some(path) = pick_file("Import generation payload", PAYLOAD_FILTER) else {
        return;
    };
    spawn(async move {
        let load_path = path.clone();
        match run_blocking(move || ProjectPayload::load(&load_path)).await {
            Ok(payload) => {
                let project = Project::from_payload(&payload, config.default_fps);
                let scenes = project.scenes.len();
                session.install(project, None, &config);
                session.report(format!("Imported {scenes} scenes from {}", path.display()));
            }
            Err(err) => session.report_error("Import payload", err),
        }
    });
}

/// Point the project at a subtitle file; the caption loader effect picks it up.
fn choose_subtitles(mut session: Session) {
    let Some(path) = pick_file("Load subtitles", SUBTITLE_FILTER) else {
        return;
    };
    session.begin_edit("Load subtitles");
    session
        .store
        .write()
        .set_caption_url(Some(path.to_string_lossy().into_owned()));
    session.end_edit();
}

fn save_project(mut session: Session) {
    let existing = session.project_path.read().clone();
    let path = match existing {
        Some(path) => path,
        None => {
            let title = session.store.read().project().meta.title.clone();
            let Some(path) = rfd::FileDialog::new()
                .set_title("Save project")
                .add_filter(PROJECT_FILTER.0, PROJECT_FILTER.1)
                .set_file_name(format!("{title}.json"))
                .save_file()
            else {
                return;
            };
            path
        }
    };
    let project = session.store.read().project().clone();
    spawn(async move {
        let save_path = path.clone();
        let snapshot = project.clone();
        match run_blocking(move || snapshot.save_to(&save_path)).await {
            Ok(()) => {
                session.saved_project.set(Some(project));
                session.project_path.set(Some(path.clone()));
                session.report(format!("Saved {}", path.display()));
            }
            Err(err) => session.report_error("Save project", err),
        }
    });
}

/// Local path for a caption reference, or `None` for a remote URL.
fn local_subtitle_path(url: &str) -> Option<PathBuf> {
    if let Some(path) = url.strip_prefix("file://") {
        return Some(PathBuf::from(path));
    }
    if url.contains("://") {
        return None;
    }
    Some(Path::new(url).to_path_buf())
}

#[component]
pub fn App() -> Element {
    let config = use_context::<EditorConfig>();

    let store = use_signal({
        let config = config.clone();
        move || EditorStore::new(Project::new("Untitled Project", 60.0, config.default_fps))
    });
    let interaction = use_signal({
        let threshold = config.snap_threshold_px;
        move || TimelineInteraction::new(threshold)
    });
    let caption_overrides = use_signal(CaptionOverrides::default);
    let zoom = use_signal({
        let config = config.clone();
        move || TimelineZoom::for_project(&config, store.peek().project().total_seconds())
    });
    let history = use_signal(History::default);
    let project_path = use_signal(|| None::<PathBuf>);
    let saved_project = use_signal(|| None::<Project>);
    let status = use_signal(|| "Ready".to_string());
    let mut external_cues = use_signal(Vec::<CaptionCue>::new);
    let mut input_focused = use_signal(|| false);

    let session = Session {
        store,
        history,
        zoom,
        caption_overrides,
        project_path,
        saved_project,
        status,
    };

    let min_cue_seconds = config.min_cue_seconds;
    let cues = use_memo(move || derive_cues(store.read().project(), &external_cues.read(), min_cue_seconds));

    // Subtitle file referenced by the project; re-read whenever the reference changes.
    let caption_url = use_memo(move || store.read().project().caption_url.clone());
    use_effect(move || {
        let Some(url) = caption_url() else {
            external_cues.set(Vec::new());
            return;
        };
        let Some(path) = local_subtitle_path(&url) else {
            tracing::info!(%url, "remote subtitle references are not fetched; using derived captions");
            external_cues.set(Vec::new());
            return;
        };
        spawn(async move {
            let load_path = path.clone();
            let result = run_blocking(move || load_srt(&load_path)).await;
            if caption_url.peek().as_deref() != Some(url.as_str()) {
                return;
            }
            match result {
                Ok(loaded) => {
                    session.report(format!("Loaded {} cues from {}", loaded.len(), path.display()));
                    external_cues.set(loaded);
                }
                Err(err) => {
                    session.report_error("Load subtitles", err);
                    external_cues.set(Vec::new());
                }
            }
        });
    });

    let (title, fps, scene_count, source) = {
        let store = store.read();
        let project = store.project();
        (
            project.meta.title.clone(),
            project.fps(),
            project.scenes.len(),
            cue_source(project, &external_cues.read()),
        )
    };
    let cue_list = cues();
    let cue_count = cue_list.len();
    let dirty = session.is_dirty();
    let (can_undo, can_redo, undo_label, redo_label) = {
        let history = history.read();
        (
            history.can_undo(),
            history.can_redo(),
            history.undo_label().map(str::to_string),
            history.redo_label().map(str::to_string),
        )
    };
    let zoom_label = zoom.read().label();

    let config_for_open = config.clone();
    let config_for_import = config.clone();
    let config_for_new = config.clone();

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .collapse-btn {{ opacity: 0.6; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            .collapse-btn:disabled {{ opacity: 0.3; cursor: default; }}
            "#
        }

        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
                user-select: none;
            ",
            oncontextmenu: move |e| e.prevent_default(),
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    has_selection: store.read().selected_scene_id().is_some(),
                    input_focused: input_focused(),
                };
                let modifiers = e.modifiers();
                let result = handle_hotkey(
                    &e.key(),
                    modifiers.shift(),
                    modifiers.ctrl(),
                    modifiers.alt(),
                    modifiers.meta(),
                    &hotkey_context,
                );
                let HotkeyResult::Action(action) = result else {
                    return;
                };
                e.prevent_default();
                let current = store.read().current_frame();
                match action {
                    HotkeyAction::TimelineZoomIn => {
                        let mut zoom = zoom;
                        zoom.write().zoom_in();
                    }
                    HotkeyAction::TimelineZoomOut => {
                        let mut zoom = zoom;
                        zoom.write().zoom_out();
                    }
                    HotkeyAction::SaveProject => save_project(session),
                    HotkeyAction::Undo => session.undo(),
                    HotkeyAction::Redo => session.redo(),
                    HotkeyAction::DeleteScene => {
                        let selected = store.read().selected_scene_id();
                        if let Some(id) = selected {
                            let mut store = store;
                            session.begin_edit("Remove scene");
                            let outcome = store.write().remove_scene(id);
                            session.end_edit();
                            if !outcome.changed() {
                                session.report("The last scene cannot be removed");
                            }
                        }
                    }
                    HotkeyAction::StepBackward => session.seek(current - 1),
                    HotkeyAction::StepForward => session.seek(current + 1),
                    HotkeyAction::SeekStart => session.seek(0),
                    HotkeyAction::SeekEnd => {
                        let last = store.read().project().last_frame();
                        session.seek(last);
                    }
                }
            },

            TitleBar {
                project_title: title,
                dirty,
                can_undo,
                can_redo,
                undo_label,
                redo_label,
                on_new_project: move |_| {
                    let project = Project::new("Untitled Project", 60.0, config_for_new.default_fps);
                    session.install(project, None, &config_for_new);
                    session.report("New project");
                },
                on_open: move |_| open_project(session, config_for_open.clone()),
                on_import_payload: move |_| import_payload(session, config_for_import.clone()),
                on_load_subtitles: move |_| choose_subtitles(session),
                on_save: move |_| save_project(session),
                on_undo: move |_| session.undo(),
                on_redo: move |_| session.redo(),
            }

            div {
                style: "display: flex; flex: 1; min-height: 0;",
                div {
                    style: "display: flex; flex-direction: column; flex: 1; min-width: 0;",
                    PreviewPanel { store, cues: cue_list.clone() }
                }
                InspectorPanel {
                    store,
                    cue_source: source,
                    cue_count,
                    on_edit_start: move |label| session.begin_edit(label),
                    on_edit_end: move |_| session.end_edit(),
                    on_focus_change: move |focused| input_focused.set(focused),
                }
            }

            TimelinePanel {
                height: TIMELINE_HEIGHT,
                store,
                interaction,
                caption_overrides,
                zoom,
                cues: cue_list,
                cue_source: source,
                on_edit_start: move |label| session.begin_edit(label),
                on_edit_end: move |_| session.end_edit(),
            }

            StatusBar {
                message: status(),
                fps,
                scene_count,
                cue_source: source.label(),
                zoom_label,
            }
        }
    }
}
