use dioxus::prelude::*;
use crate::constants::*;
use crate::core::captions::{active_cue, CaptionCue};
use crate::core::frame_math::{frames_to_seconds, format_timecode};
use crate::state::{AspectRatio, EditorStore};
use crate::utils::media_src;

/// Still preview of the scene under the playhead with its caption.
///
/// Stands in for the renderer: it reads the project and playhead, and consumes
/// the store's one-shot seek request.
#[component]
pub fn PreviewPanel(mut store: Signal<EditorStore>, cues: Vec<CaptionCue>) -> Element {
    let mut last_seek = use_signal(|| None::<i64>);

    use_effect(move || {
        if store.read().seek_to_frame().is_some() {
            let seek = store.write().take_seek_request();
            if seek.is_some() {
                tracing::trace!(frame = ?seek, "preview seek");
                last_seek.set(seek);
            }
        }
    });

    let (scene, scene_number, fps, current_frame, aspect_ratio) = {
        let store = store.read();
        let project = store.project();
        let frame = store.current_frame();
        let scene = project.scene_at_frame(frame).cloned();
        let number = scene
            .as_ref()
            .and_then(|scene| project.scene_index(scene.id))
            .map(|index| index + 1);
        (scene, number, project.fps(), frame, project.meta.aspect_ratio)
    };
    let caption = active_cue(&cues, frames_to_seconds(current_frame, fps)).map(|cue| cue.text.clone());
    let frame_aspect = match aspect_ratio {
        AspectRatio::Landscape => "16 / 9",
        AspectRatio::Portrait => "9 / 16",
        AspectRatio::Square => "1 / 1",
    };
    let timecode = format_timecode(current_frame, fps);
    let seek_label = last_seek()
        .map(|frame| format!("seek {}", format_timecode(frame, fps)))
        .unwrap_or_default();
    let animation_label = scene.as_ref().map(|scene| scene.animation.label()).unwrap_or("");
    let scene_label = scene_number.map(|n| format!("Scene {n}")).unwrap_or_else(|| "Gap".to_string());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; flex: 1; min-height: 0; background-color: {BG_DEEPEST};",

            div {
                style: "
                    display: grid; grid-template-columns: auto 1fr auto; align-items: center;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                span {
                    style: "grid-column: 1; font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Preview"
                }
                span {
                    style: "grid-column: 2; justify-self: center; font-family: 'SF Mono', Consolas, monospace; font-size: 10px; color: {TEXT_DIM};",
                    "{scene_label} · {animation_label}"
                }
                div {
                    style: "grid-column: 3; justify-self: end; display: flex; align-items: center; gap: 6px; font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                    span { "{aspect_ratio.label()}" }
                    span { style: "color: {TEXT_MUTED};", "@" }
                    span { "{fps}" }
                }
            }

            div {
                style: "flex: 1; display: flex; align-items: center; justify-content: center; padding: 16px; min-height: 0; overflow: hidden;",
                div {
                    style: "position: relative; aspect-ratio: {frame_aspect}; max-width: 100%; max-height: 100%; height: 100%; background-color: #000; overflow: hidden;",
                    {match scene.as_ref().filter(|scene| scene.has_media()) {
                        Some(scene) => rsx! {
                            img {
                                src: "{media_src(&scene.image_url)}",
                                draggable: false,
                                style: "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;",
                            }
                        },
                        None => rsx! {
                            div {
                                style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; color: {TEXT_DIM};",
                                div {
                                    style: "width: 48px; height: 48px; border: 1px solid {BORDER_DEFAULT}; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 14px;",
                                    "?"
                                }
                                span { style: "font-size: 12px;", "No image" }
                            }
                        },
                    }}
                    if let Some(caption) = caption {
                        div {
                            style: "position: absolute; left: 8%; right: 8%; bottom: 6%; padding: 6px 10px; border-radius: 4px; background: rgba(0, 0, 0, 0.6); color: {TEXT_PRIMARY}; font-size: 14px; text-align: center;",
                            "{caption}"
                        }
                    }
                }
            }

            div {
                style: "display: flex; justify-content: space-between; padding: 4px 14px; font-family: 'SF Mono', Consolas, monospace; font-size: 10px; color: {TEXT_DIM}; border-top: 1px solid {BORDER_SUBTLE};",
                span { "{timecode}" }
                span { "{seek_label}" }
            }
        }
    }
}
