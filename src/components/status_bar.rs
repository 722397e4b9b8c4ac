use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn StatusBar(message: String, fps: u32, scene_count: usize, cue_source: &'static str, zoom_label: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{message}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{scene_count} scenes" }
                span { "captions: {cue_source}" }
                span { "{zoom_label}" }
                span { "{fps} fps" }
            }
        }
    }
}
