use dioxus::prelude::*;
use dioxus::html::input_data::MouseButton;

use crate::constants::{
    ACCENT_CAPTION, BG_BASE, BG_SURFACE, BORDER_SUBTLE, CAPTION_TRACK_HEIGHT, TEXT_DIM, TEXT_PRIMARY,
};
use crate::core::captions::CaptionCue;

use super::interaction::{DragTarget, PointerId};

/// Caption track: one block per displayed cue.
#[component]
pub fn CaptionTrackRow(
    width: f64,
    pixels_per_second: f64,
    cues: Vec<CaptionCue>,
    source_label: &'static str,
    dragged_slot: Option<usize>,
    on_pointer_down: EventHandler<(PointerId, f64, DragTarget)>,
) -> Element {
    let block_height = CAPTION_TRACK_HEIGHT - 8.0;

    rsx! {
        div {
            style: "
                height: {CAPTION_TRACK_HEIGHT}px; width: {width}px;
                border-bottom: 1px solid {BORDER_SUBTLE};
                background-color: {BG_BASE};
                position: relative;
            ",
            if cues.is_empty() {
                span {
                    style: "position: absolute; left: 8px; top: 10px; font-size: 10px; color: {TEXT_DIM};",
                    "No captions"
                }
            }
            for (slot, cue) in cues.into_iter().enumerate() {
                {
                    let left = cue.start_seconds * pixels_per_second;
                    let block_width = (cue.duration_seconds() * pixels_per_second).max(4.0);
                    let start_seconds = cue.start_seconds;
                    let duration_seconds = cue.duration_seconds();
                    let z_index = if dragged_slot == Some(slot) { 2 } else { 1 };
                    rsx! {
                        div {
                            key: "cue-{slot}",
                            title: "{source_label} #{cue.index}",
                            style: "
                                position: absolute; left: {left}px; top: 4px;
                                width: {block_width}px; height: {block_height}px;
                                box-sizing: border-box; padding: 0 6px;
                                background-color: {BG_SURFACE}; border-left: 3px solid {ACCENT_CAPTION}; border-radius: 3px;
                                font-size: 10px; line-height: {block_height}px; color: {TEXT_PRIMARY};
                                white-space: nowrap; overflow: hidden; text-overflow: ellipsis;
                                cursor: grab; user-select: none; z-index: {z_index};
                            ",
                            onpointerdown: move |e| {
                                if e.trigger_button() != Some(MouseButton::Primary) {
                                    return;
                                }
                                e.prevent_default();
                                e.stop_propagation();
                                on_pointer_down.call((
                                    e.pointer_id(),
                                    e.client_coordinates().x,
                                    DragTarget::Caption { slot, start_seconds, duration_seconds },
                                ));
                            },
                            "{cue.text}"
                        }
                    }
                }
            }
        }
    }
}
