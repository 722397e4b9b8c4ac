use dioxus::prelude::*;

use crate::components::common::{NumericField, TextAreaField, TextField, VolumeField};
use crate::constants::*;
use crate::core::captions::CueSource;
use crate::core::frame_math::{format_time, frames_to_seconds, seconds_to_frames};
use crate::state::{AspectRatio, EditorStore, MetaPatch, SceneAnimation, ScenePatch, VoiceOver};

const SELECT_STYLE: &str = "
    width: 100%; box-sizing: border-box; padding: 6px 8px; font-size: 12px;
    border-radius: 4px; outline: none;
";

/// Run one store edit bracketed by the undo checkpoint callbacks.
fn commit_edit(
    mut store: Signal<EditorStore>,
    on_edit_start: EventHandler<&'static str>,
    on_edit_end: EventHandler<()>,
    label: &'static str,
    edit: impl FnOnce(&mut EditorStore),
) {
    on_edit_start.call(label);
    edit(&mut *store.write());
    on_edit_end.call(());
}

/// Right-hand property panel: selected scene, project settings and audio.
#[component]
pub fn InspectorPanel(
    store: Signal<EditorStore>,
    cue_source: CueSource,
    cue_count: usize,
    on_edit_start: EventHandler<&'static str>,
    on_edit_end: EventHandler<()>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let focus = Some(on_focus_change);
    let (selected, scene_position, scene_count, meta, fps, total_frames, audio, music_url, music_volume, caption_url) = {
        let store = store.read();
        let project = store.project();
        let selected = store.selected_scene().cloned();
        let position = selected.as_ref().and_then(|scene| project.scene_index(scene.id)).map(|index| index + 1);
        (
            selected,
            position,
            project.scenes.len(),
            project.meta.clone(),
            project.fps(),
            project.total_frames(),
            project.audio.clone(),
            project.music_url.clone(),
            project.music_volume,
            project.caption_url.clone(),
        )
    };

    let edit = move |label: &'static str, f: Box<dyn FnOnce(&mut EditorStore)>| {
        commit_edit(store, on_edit_start, on_edit_end, label, f);
    };

    let scene_section = match selected {
        None => rsx! {
            div {
                style: "
                    display: flex; align-items: center; justify-content: center;
                    height: 80px; border: 1px dashed {BORDER_DEFAULT}; border-radius: 6px;
                    color: {TEXT_DIM}; font-size: 12px;
                ",
                "No scene selected"
            }
        },
        Some(scene) => {
            let id = scene.id;
            let start = scene.start_frame;
            let duration_seconds = frames_to_seconds(scene.duration_in_frames, fps);
            let max_seconds = frames_to_seconds(total_frames - start, fps);
            let span_label = format!("{} – {}", format_time(start, fps), format_time(scene.end_frame(), fps));
            let position = scene_position.unwrap_or(1);
            let current_animation = scene.animation;
            let can_remove = scene_count > 1;
            rsx! {
                div {
                    key: "{id}",
                    style: "display: flex; flex-direction: column; gap: 10px;",
                    div {
                        style: "display: flex; justify-content: space-between; font-size: 11px; color: {TEXT_SECONDARY};",
                        span { "Scene {position} of {scene_count}" }
                        span { style: "font-family: 'SF Mono', Consolas, monospace; color: {TEXT_DIM};", "{span_label}" }
                    }
                    TextAreaField {
                        label: "Text".to_string(),
                        value: scene.text.clone(),
                        rows: 4,
                        on_focus_change: focus,
                        on_commit: move |text: String| {
                            edit("Edit scene text", Box::new(move |store: &mut EditorStore| {
                                store.update_scene(id, ScenePatch::text(text));
                            }));
                        },
                    }
                    TextField {
                        label: "Image".to_string(),
                        value: scene.image_url.clone(),
                        placeholder: "Path or URL".to_string(),
                        on_focus_change: focus,
                        on_commit: move |url: String| {
                            edit("Change scene image", Box::new(move |store: &mut EditorStore| {
                                store.update_scene(id, ScenePatch::image_url(url.trim()));
                            }));
                        },
                    }
                    div {
                        style: "display: flex; flex-direction: column; gap: 4px;",
                        span { style: "font-size: 10px; color: {TEXT_MUTED};", "Animation" }
                        select {
                            style: "{SELECT_STYLE} background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT};",
                            onchange: move |e| {
                                if let Some(animation) = SceneAnimation::from_label(&e.value()) {
                                    edit("Change animation", Box::new(move |store: &mut EditorStore| {
                                        store.update_scene(id, ScenePatch::animation(animation));
                                    }));
                                }
                            },
                            for animation in SceneAnimation::ALL {
                                option {
                                    value: "{animation.label()}",
                                    selected: animation == current_animation,
                                    "{animation.label()}"
                                }
                            }
                        }
                    }
                    NumericField {
                        label: "Duration (s)",
                        value: duration_seconds,
                        step: "1",
                        clamp_min: Some(1.0_f64.min(max_seconds)),
                        clamp_max: Some(max_seconds),
                        on_focus_change: focus,
                        on_commit: move |seconds: f64| {
                            let frames = seconds_to_frames(seconds, fps);
                            edit("Change scene duration", Box::new(move |store: &mut EditorStore| {
                                store.update_scene_frames(id, start, frames);
                            }));
                        },
                    }
                    div {
                        style: "display: flex; gap: 6px;",
                        button {
                            class: "collapse-btn",
                            disabled: position <= 1,
                            style: "flex: 1; padding: 5px; font-size: 11px; border-radius: 4px; border: 1px solid {BORDER_DEFAULT}; background: {BG_SURFACE}; color: {TEXT_SECONDARY}; cursor: pointer;",
                            onclick: move |_| {
                                edit("Move scene", Box::new(move |store: &mut EditorStore| {
                                    store.reorder_scenes(position - 1, position.saturating_sub(2));
                                }));
                            },
                            "Move left"
                        }
                        button {
                            class: "collapse-btn",
                            disabled: position >= scene_count,
                            style: "flex: 1; padding: 5px; font-size: 11px; border-radius: 4px; border: 1px solid {BORDER_DEFAULT}; background: {BG_SURFACE}; color: {TEXT_SECONDARY}; cursor: pointer;",
                            onclick: move |_| {
                                edit("Move scene", Box::new(move |store: &mut EditorStore| {
                                    store.reorder_scenes(position - 1, position);
                                }));
                            },
                            "Move right"
                        }
                        button {
                            class: "collapse-btn",
                            disabled: !can_remove,
                            style: "flex: 1; padding: 5px; font-size: 11px; border-radius: 4px; border: 1px solid {BORDER_DEFAULT}; background: {BG_SURFACE}; color: {ACCENT_PLAYHEAD}; cursor: pointer;",
                            onclick: move |_| {
                                edit("Remove scene", Box::new(move |store: &mut EditorStore| {
                                    store.remove_scene(id);
                                }));
                            },
                            "Remove"
                        }
                    }
                }
            }
        }
    };

    let current_ratio = meta.aspect_ratio;
    let voice_url = audio.as_ref().map(|audio| audio.url.clone()).unwrap_or_default();
    let commit_voice_url = {
        let existing = audio.clone();
        move |url: String| {
            let url = url.trim().to_string();
            let next = if url.is_empty() {
                None
            } else {
                Some(match existing.clone() {
                    Some(voice) => VoiceOver { url, ..voice },
                    None => VoiceOver::new(url),
                })
            };
            edit("Change voice-over", Box::new(move |store: &mut EditorStore| store.update_audio(next)));
        }
    };

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                width: {INSPECTOR_WIDTH}px; min-width: {INSPECTOR_WIDTH}px;
                background-color: {BG_ELEVATED}; border-left: 1px solid {BORDER_DEFAULT};
                overflow: hidden;
            ",
            div {
                style: "
                    display: flex; align-items: center; height: 32px; padding: 0 14px; flex-shrink: 0;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;
                ",
                "Inspector"
            }
            div {
                style: "flex: 1; overflow-y: auto; padding: 12px; display: flex; flex-direction: column; gap: 18px;",

                Section { title: "Scene", {scene_section} }

                Section {
                    title: "Project",
                    TextField {
                        label: "Title".to_string(),
                        value: meta.title.clone(),
                        on_focus_change: focus,
                        on_commit: move |title: String| {
                            edit("Rename project", Box::new(move |store: &mut EditorStore| {
                                store.update_meta(MetaPatch::title(title));
                            }));
                        },
                    }
                    NumericField {
                        label: "Duration (s)",
                        value: meta.duration_seconds,
                        step: "1",
                        clamp_min: Some(crate::state::MIN_PROJECT_SECONDS),
                        clamp_max: None,
                        on_focus_change: focus,
                        on_commit: move |seconds: f64| {
                            edit("Change project duration", Box::new(move |store: &mut EditorStore| {
                                store.update_meta(MetaPatch::duration_seconds(seconds));
                            }));
                        },
                    }
                    div {
                        style: "display: flex; flex-direction: column; gap: 4px;",
                        span { style: "font-size: 10px; color: {TEXT_MUTED};", "Aspect ratio" }
                        select {
                            style: "{SELECT_STYLE} background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT};",
                            onchange: move |e| {
                                if let Some(ratio) = AspectRatio::from_label(&e.value()) {
                                    edit("Change aspect ratio", Box::new(move |store: &mut EditorStore| {
                                        store.update_meta(MetaPatch::aspect_ratio(ratio));
                                    }));
                                }
                            },
                            for ratio in AspectRatio::ALL {
                                option {
                                    value: "{ratio.label()}",
                                    selected: ratio == current_ratio,
                                    "{ratio.label()}"
                                }
                            }
                        }
                    }
                    div {
                        style: "font-size: 10px; color: {TEXT_DIM};",
                        "{fps} fps · {total_frames} frames"
                    }
                }

                Section {
                    title: "Audio",
                    TextField {
                        label: "Voice-over".to_string(),
                        value: voice_url,
                        placeholder: "Path or URL".to_string(),
                        on_focus_change: focus,
                        on_commit: commit_voice_url,
                    }
                    if let Some(voice) = audio {
                        VolumeField {
                            label: "Voice volume",
                            value: voice.volume,
                            on_commit: {
                                let voice = voice.clone();
                                move |volume: f32| {
                                    let next = VoiceOver { volume, ..voice.clone() };
                                    edit("Change voice volume", Box::new(move |store: &mut EditorStore| store.update_audio(Some(next))));
                                }
                            },
                        }
                        NumericField {
                            label: "Voice offset (s)",
                            value: voice.offset_seconds,
                            step: "0.1",
                            clamp_min: Some(0.0),
                            clamp_max: None,
                            on_focus_change: focus,
                            on_commit: {
                                let voice = voice.clone();
                                move |offset_seconds: f64| {
                                    let next = VoiceOver { offset_seconds, ..voice.clone() };
                                    edit("Change voice offset", Box::new(move |store: &mut EditorStore| store.update_audio(Some(next))));
                                }
                            },
                        }
                    }
                    TextField {
                        label: "Music".to_string(),
                        value: music_url.unwrap_or_default(),
                        placeholder: "Path or URL".to_string(),
                        on_focus_change: focus,
                        on_commit: move |url: String| {
                            edit("Change music", Box::new(move |store: &mut EditorStore| store.set_music_url(Some(url))));
                        },
                    }
                    VolumeField {
                        label: "Music volume",
                        value: music_volume,
                        on_commit: move |volume: f32| {
                            edit("Change music volume", Box::new(move |store: &mut EditorStore| {
                                store.update_music_volume(volume);
                            }));
                        },
                    }
                }

                Section {
                    title: "Captions",
                    TextField {
                        label: "Subtitle file".to_string(),
                        value: caption_url.unwrap_or_default(),
                        placeholder: "Path to .srt or .vtt".to_string(),
                        on_focus_change: focus,
                        on_commit: move |url: String| {
                            edit("Change subtitles", Box::new(move |store: &mut EditorStore| store.set_caption_url(Some(url))));
                        },
                    }
                    div {
                        style: "font-size: 10px; color: {TEXT_DIM};",
                        "{cue_count} cues from {cue_source.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn Section(title: &'static str, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            div {
                style: "font-size: 10px; font-weight: 600; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.6px; padding-bottom: 4px; border-bottom: 1px solid {BORDER_SUBTLE};",
                "{title}"
            }
            {children}
        }
    }
}
