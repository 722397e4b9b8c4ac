use dioxus::prelude::*;
use crate::constants::{BORDER_SUBTLE, TEXT_DIM, TEXT_SECONDARY};

/// Track label in the sidebar
#[component]
pub fn TrackLabel(
    name: &'static str,
    color: &'static str,
    height: f64,
    #[props(default)] detail: Option<String>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 10px; height: {height}px;
                box-sizing: border-box; padding: 0 12px; border-bottom: 1px solid {BORDER_SUBTLE};
                font-size: 12px; color: {TEXT_SECONDARY};
            ",
            oncontextmenu: move |e| e.prevent_default(),
            div { style: "width: 3px; height: 16px; border-radius: 2px; background-color: {color};" }
            span { "{name}" }
            if let Some(detail) = detail {
                span { style: "margin-left: auto; font-size: 9px; color: {TEXT_DIM}; text-transform: uppercase;", "{detail}" }
            }
        }
    }
}
