use dioxus::prelude::*;
use dioxus::html::input_data::MouseButton;

use crate::constants::{
    ACCENT_VIDEO, BG_HOVER, BG_SURFACE, BORDER_ACCENT, BORDER_STRONG, RESIZE_HANDLE_WIDTH, TEXT_DIM,
    TEXT_PRIMARY, VIDEO_TRACK_HEIGHT,
};
use crate::core::frame_math::{format_time, FrameScale};
use crate::state::Scene;
use crate::utils::media_src;

use super::interaction::{DragTarget, PointerId};
use super::MIN_CLIP_WIDTH_PX;

/// A scene on the video track: body for moving, right handle for resizing.
#[component]
pub fn ClipElement(
    scene: Scene,
    index: usize,
    scale: FrameScale,
    is_selected: bool,
    is_dragging: bool,
    on_pointer_down: EventHandler<(PointerId, f64, DragTarget)>,
) -> Element {
    let left = scale.frame_to_pixel_px(scene.start_frame);
    let width = (scale.frame_to_pixel_px(scene.end_frame()) - left).max(MIN_CLIP_WIDTH_PX);
    let height = VIDEO_TRACK_HEIGHT - 8.0;
    let scene_id = scene.id;
    let border = if is_selected { BORDER_ACCENT } else { BORDER_STRONG };
    let cursor = if is_dragging { "grabbing" } else { "grab" };
    let z_index = if is_dragging { 3 } else if is_selected { 2 } else { 1 };
    let duration_label = format_time(scene.duration_in_frames, scale.fps);
    let caption = if scene.text.trim().is_empty() {
        format!("Scene {}", index + 1)
    } else {
        scene.text.trim().to_string()
    };

    let begin_drag = move |e: PointerEvent, target: DragTarget| {
        if e.trigger_button() != Some(MouseButton::Primary) {
            return;
        }
        e.prevent_default();
        e.stop_propagation();
        on_pointer_down.call((e.pointer_id(), e.client_coordinates().x, target));
    };

    rsx! {
        div {
            style: "
                position: absolute; left: {left}px; top: 4px;
                width: {width}px; height: {height}px;
                box-sizing: border-box; overflow: hidden;
                background-color: {BG_SURFACE};
                border: 1px solid {border}; border-left: 3px solid {ACCENT_VIDEO}; border-radius: 4px;
                cursor: {cursor}; z-index: {z_index};
                user-select: none;
            ",
            onpointerdown: move |e| begin_drag(e, DragTarget::ClipBody { scene_id }),

            if scene.has_media() {
                img {
                    src: "{media_src(&scene.image_url)}",
                    draggable: false,
                    style: "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.55; pointer-events: none;",
                }
            } else {
                // Missing media renders as a neutral placeholder.
                div {
                    style: "position: absolute; inset: 0; background: repeating-linear-gradient(45deg, {BG_SURFACE}, {BG_SURFACE} 6px, {BG_HOVER} 6px, {BG_HOVER} 12px); pointer-events: none;",
                }
            }

            div {
                style: "position: relative; display: flex; flex-direction: column; gap: 2px; padding: 4px 6px; pointer-events: none;",
                span {
                    style: "font-size: 11px; color: {TEXT_PRIMARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "{caption}"
                }
                span {
                    style: "font-size: 9px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace;",
                    "{duration_label}"
                }
            }

            // Resize handle (right edge only)
            div {
                style: "
                    position: absolute; right: 0; top: 0;
                    width: {RESIZE_HANDLE_WIDTH}px; height: 100%;
                    cursor: ew-resize; background-color: {border}; opacity: 0.6;
                ",
                onpointerdown: move |e| begin_drag(e, DragTarget::ClipResize { scene_id }),
            }
        }
    }
}
