use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{BG_BASE, BORDER_SUBTLE, VIDEO_TRACK_HEIGHT};
use crate::core::frame_math::FrameScale;
use crate::state::Scene;

use super::clip_element::ClipElement;
use super::interaction::{DragTarget, PointerId};

/// Video track content area: one `ClipElement` per scene.
#[component]
pub fn VideoTrackRow(
    width: f64,
    scenes: Vec<Scene>,
    scale: FrameScale,
    selected_scene: Option<Uuid>,
    dragged_scene: Option<Uuid>,
    on_pointer_down: EventHandler<(PointerId, f64, DragTarget)>,
) -> Element {
    rsx! {
        div {
            style: "
                height: {VIDEO_TRACK_HEIGHT}px; width: {width}px;
                border-bottom: 1px solid {BORDER_SUBTLE};
                background-color: {BG_BASE};
                position: relative;
            ",
            oncontextmenu: move |e| e.prevent_default(),

            for (index, scene) in scenes.into_iter().enumerate() {
                {
                    let id = scene.id;
                    rsx! {
                        ClipElement {
                            key: "{id}",
                            scene,
                            index,
                            scale,
                            is_selected: selected_scene == Some(id),
                            is_dragging: dragged_scene == Some(id),
                            on_pointer_down: move |args| on_pointer_down.call(args),
                        }
                    }
                }
            }
        }
    }
}
