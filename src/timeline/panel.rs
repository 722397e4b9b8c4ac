use dioxus::prelude::*;
use dioxus::html::input_data::MouseButton;

use crate::constants::{
    ACCENT_AUDIO, ACCENT_CAPTION, ACCENT_PLAYHEAD, ACCENT_SNAP, ACCENT_VIDEO, AUDIO_TRACK_HEIGHT,
    BG_BASE, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE, CAPTION_TRACK_HEIGHT,
    RULER_HEIGHT, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY, TRACK_LABEL_WIDTH, VIDEO_TRACK_HEIGHT,
};
use crate::core::captions::{CaptionCue, CueSource};
use crate::core::frame_math::format_timecode;
use crate::state::EditorStore;

use super::audio_row::AudioTrackRow;
use super::caption_overrides::CaptionOverrides;
use super::caption_row::CaptionTrackRow;
use super::interaction::{DragTarget, PointerId, PointerMove, TimelineInteraction};
use super::playback_controls::PlaybackBtn;
use super::ruler::TimeRuler;
use super::track_label::TrackLabel;
use super::track_row::VideoTrackRow;
use super::zoom::TimelineZoom;

/// Main timeline panel: ruler, video/audio/caption tracks and the playhead.
///
/// `cues` is the derived cue list; caption drags are layered on top of it through
/// `caption_overrides` and never reach the project.
#[component]
pub fn TimelinePanel(
    height: f64,
    mut store: Signal<EditorStore>,
    mut interaction: Signal<TimelineInteraction>,
    mut caption_overrides: Signal<CaptionOverrides>,
    mut zoom: Signal<TimelineZoom>,
    cues: Vec<CaptionCue>,
    cue_source: CueSource,
    // Called before an edit that should be undoable, with its label.
    on_edit_start: EventHandler<&'static str>,
    on_edit_end: EventHandler<()>,
) -> Element {
    let (project, current_frame, selected_scene) = {
        let store = store.read();
        (store.project().clone(), store.current_frame(), store.selected_scene_id())
    };
    let fps = project.fps();
    let total_frames = project.total_frames();
    let total_seconds = project.total_seconds();
    let zoom_state = *zoom.read();
    let scale = zoom_state.scale(fps);
    let pixels_per_second = zoom_state.pixels_per_second();
    let content_width = zoom_state.content_width(total_seconds);

    let (is_dragging, dragged_scene, dragged_caption, snap_guide) = {
        let interaction = interaction.read();
        (
            interaction.is_dragging(),
            interaction.dragged_scene(),
            interaction.dragged_caption(),
            interaction.snap_guide(),
        )
    };

    // Overrides made for an older cue list are never shown.
    let active_overrides = caption_overrides.read().clone().reconcile(&cues);
    let captions_moved = !active_overrides.is_empty();
    let shown_cues = active_overrides.apply(&cues, total_seconds);

    let playhead_x = scale.frame_to_pixel_px(current_frame).min(content_width - 1.0).max(0.0);
    let snap_guide_x = snap_guide.map(|frame| scale.frame_to_pixel_px(frame).min(content_width - 1.0).max(0.0));
    let timecode = format_timecode(current_frame, fps);
    let duration_code = format_timecode(total_frames, fps);
    let tracks_height = RULER_HEIGHT + VIDEO_TRACK_HEIGHT + AUDIO_TRACK_HEIGHT + CAPTION_TRACK_HEIGHT;

    let cues_for_drag = cues.clone();
    let mut start_drag = move |(pointer_id, x, target): (PointerId, f64, DragTarget)| {
        if interaction.peek().is_dragging() {
            return;
        }
        if matches!(target, DragTarget::Caption { .. }) {
            let current = caption_overrides.peek().clone();
            caption_overrides.set(current.reconcile(&cues_for_drag));
        }
        let started = {
            let mut store = store.write();
            interaction.write().pointer_down(pointer_id, x, target, &mut store)
        };
        // Only a drag that actually started gets an undo bracket.
        if let (true, Some(label)) = (started, target.edit_label()) {
            on_edit_start.call(label);
        }
    };

    let drag_clip = start_drag.clone();
    let drag_caption = start_drag.clone();

    let mut seek = move |frame: i64| {
        let mut store = store.write();
        let frame = store.set_current_frame(frame);
        store.set_seek_to_frame(Some(frame));
    };

    let mut end_drag = move |pointer_id: PointerId, left_surface: bool| {
        let clip_drag = interaction.peek().dragged_scene().is_some();
        let ended = if left_surface {
            interaction.write().pointer_leave(pointer_id)
        } else {
            interaction.write().pointer_up(pointer_id)
        };
        if ended && clip_drag {
            on_edit_end.call(());
        }
    };

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                height: {height}px; min-height: {height}px;
                background-color: {BG_ELEVATED};
                border-top: 1px solid {BORDER_DEFAULT};
                overflow: hidden;
            ",

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",

                // Left: label + zoom controls
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    span { style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "Timeline" }
                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        button {
                            class: "collapse-btn",
                            disabled: !zoom_state.can_zoom_out(),
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer;",
                            onclick: move |_| {
                                zoom.write().zoom_out();
                            },
                            "−"
                        }
                        span {
                            style: "font-size: 10px; color: {TEXT_DIM}; min-width: 48px; text-align: center;",
                            "{zoom_state.label()}"
                        }
                        button {
                            class: "collapse-btn",
                            disabled: !zoom_state.can_zoom_in(),
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer;",
                            onclick: move |_| {
                                zoom.write().zoom_in();
                            },
                            "+"
                        }
                    }
                }

                // Center: transport
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    PlaybackBtn { icon: "⏮", title: "Go to start", on_click: move |_| seek(0) }
                    PlaybackBtn { icon: "◀", title: "Previous frame", on_click: move |_| seek(current_frame - 1) }
                    PlaybackBtn { icon: "▶", title: "Next frame", primary: true, on_click: move |_| seek(current_frame + 1) }
                    PlaybackBtn { icon: "⏭", title: "Go to end", on_click: move |_| seek(total_frames) }
                    span {
                        style: "margin-left: 8px; font-size: 11px; color: {TEXT_PRIMARY}; font-family: 'SF Mono', Consolas, monospace;",
                        "{timecode}"
                    }
                    span {
                        style: "font-size: 11px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace;",
                        " / {duration_code}"
                    }
                }

                // Right: structural edits
                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    if captions_moved {
                        button {
                            class: "collapse-btn",
                            title: "Put dragged captions back where they were derived",
                            style: "height: 22px; padding: 0 8px; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; background: transparent; color: {ACCENT_CAPTION}; font-size: 11px; cursor: pointer;",
                            onclick: move |_| caption_overrides.write().clear(),
                            "Reset captions"
                        }
                    }
                    button {
                        class: "collapse-btn",
                        style: "height: 22px; padding: 0 8px; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; background: transparent; color: {TEXT_MUTED}; font-size: 11px; cursor: pointer;",
                        onclick: move |_| {
                            on_edit_start.call("Add scene");
                            let after = {
                                let store = store.peek();
                                store.selected_scene_id().and_then(|id| store.project().scene_index(id))
                            };
                            store.write().add_scene(after);
                            on_edit_end.call(());
                        },
                        "+ Scene"
                    }
                    button {
                        class: "collapse-btn",
                        title: "Lay scenes out evenly across the project",
                        style: "height: 22px; padding: 0 8px; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; background: transparent; color: {TEXT_MUTED}; font-size: 11px; cursor: pointer;",
                        onclick: move |_| {
                            on_edit_start.call("Even out scenes");
                            store.write().recalc_frames();
                            on_edit_end.call(());
                        },
                        "Even out"
                    }
                }
            }

            // Body: labels + scrollable tracks
            div {
                style: "display: flex; flex: 1; min-height: 0; overflow: hidden;",

                div {
                    style: "width: {TRACK_LABEL_WIDTH}px; flex-shrink: 0; background-color: {BG_SURFACE}; border-right: 1px solid {BORDER_DEFAULT};",
                    div { style: "height: {RULER_HEIGHT}px; border-bottom: 1px solid {BORDER_SUBTLE};" }
                    TrackLabel { name: "Video", color: ACCENT_VIDEO, height: VIDEO_TRACK_HEIGHT }
                    TrackLabel { name: "Audio", color: ACCENT_AUDIO, height: AUDIO_TRACK_HEIGHT }
                    TrackLabel {
                        name: "Captions",
                        color: ACCENT_CAPTION,
                        height: CAPTION_TRACK_HEIGHT,
                        detail: cue_source.label().to_string(),
                    }
                }

                div {
                    id: "timeline-scroll-host",
                    style: "flex: 1; overflow-x: auto; overflow-y: hidden; background-color: {BG_BASE};",
                    div {
                        style: "position: relative; width: {content_width}px; height: {tracks_height}px;",

                        // Ruler: click to seek, drag the handle to scrub
                        div {
                            style: "position: relative; height: {RULER_HEIGHT}px; border-bottom: 1px solid {BORDER_SUBTLE}; cursor: pointer;",
                            onpointerdown: move |e| {
                                if e.trigger_button() != Some(MouseButton::Primary) || interaction.peek().is_dragging() {
                                    return;
                                }
                                let x = e.element_coordinates().x;
                                let snap = !e.modifiers().alt();
                                let mut store = store.write();
                                interaction.peek().ruler_click(x, &scale, &mut store, snap);
                            },
                            TimeRuler { total_seconds, pixels_per_second, fps }
                        }

                        VideoTrackRow {
                            width: content_width,
                            scenes: project.scenes.clone(),
                            scale,
                            selected_scene,
                            dragged_scene,
                            on_pointer_down: drag_clip,
                        }
                        AudioTrackRow {
                            width: content_width,
                            pixels_per_second,
                            audio: project.audio.clone(),
                            music_url: project.music_url.clone(),
                            music_volume: project.music_volume,
                        }
                        CaptionTrackRow {
                            width: content_width,
                            pixels_per_second,
                            cues: shown_cues,
                            source_label: cue_source.label(),
                            dragged_slot: dragged_caption,
                            on_pointer_down: drag_caption,
                        }

                        if let Some(x) = snap_guide_x {
                            div {
                                style: "position: absolute; left: {x}px; top: 0; width: 1px; height: 100%; background-color: {ACCENT_SNAP}; pointer-events: none; z-index: 20;",
                            }
                        }

                        // Playhead line with a draggable handle in the ruler
                        div {
                            style: "position: absolute; left: {playhead_x}px; top: 0; width: 1px; height: 100%; background-color: {ACCENT_PLAYHEAD}; pointer-events: none; z-index: 30;",
                        }
                        div {
                            style: "position: absolute; left: {playhead_x - 6.0}px; top: 0; width: 13px; height: 14px; background-color: {ACCENT_PLAYHEAD}; clip-path: polygon(0 0, 100% 0, 50% 100%); cursor: ew-resize; z-index: 31;",
                            onpointerdown: move |e| {
                                if e.trigger_button() != Some(MouseButton::Primary) {
                                    return;
                                }
                                e.prevent_default();
                                e.stop_propagation();
                                start_drag((e.pointer_id(), e.client_coordinates().x, DragTarget::Playhead));
                            },
                        }
                    }
                }
            }
        }

        // Global drag overlay: owns every pointer event while a drag is active
        if is_dragging {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: grabbing;",
                oncontextmenu: move |e| e.prevent_default(),
                onpointermove: move |e| {
                    let pointer = PointerMove {
                        pointer_id: e.pointer_id(),
                        x: e.client_coordinates().x,
                        snap: !e.modifiers().alt(),
                    };
                    let mut store = store.write();
                    let mut overrides = caption_overrides.write();
                    interaction.write().pointer_move(pointer, &scale, &mut store, &mut overrides);
                },
                onpointerup: move |e| end_drag(e.pointer_id(), false),
                onpointerleave: move |e| end_drag(e.pointer_id(), true),
            }
        }
    }
}
