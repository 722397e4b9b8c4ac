use dioxus::prelude::*;
use crate::constants::*;

const MENU_BUTTON_STYLE: &str = "
    background: transparent; border: none;
    font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
";

#[component]
pub fn TitleBar(
    project_title: String,
    dirty: bool,
    can_undo: bool,
    can_redo: bool,
    undo_label: Option<String>,
    redo_label: Option<String>,
    on_new_project: EventHandler<MouseEvent>,
    on_open: EventHandler<MouseEvent>,
    on_import_payload: EventHandler<MouseEvent>,
    on_load_subtitles: EventHandler<MouseEvent>,
    on_save: EventHandler<MouseEvent>,
    on_undo: EventHandler<MouseEvent>,
    on_redo: EventHandler<MouseEvent>,
) -> Element {
    let undo_color = if can_undo { TEXT_PRIMARY } else { TEXT_DIM };
    let redo_color = if can_redo { TEXT_PRIMARY } else { TEXT_DIM };
    let undo_title = undo_label.map(|label| format!("Undo {label}")).unwrap_or_else(|| "Nothing to undo".to_string());
    let redo_title = redo_label.map(|label| format!("Redo {label}")).unwrap_or_else(|| "Nothing to redo".to_string());
    let dirty_marker = if dirty { " •" } else { "" };

    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY}; margin-right: 8px;", "Storyreel" }
                button {
                    class: "collapse-btn",
                    style: "{MENU_BUTTON_STYLE} color: {TEXT_PRIMARY};",
                    onclick: move |e| on_new_project.call(e),
                    "New"
                }
                button {
                    class: "collapse-btn",
                    style: "{MENU_BUTTON_STYLE} color: {TEXT_PRIMARY};",
                    onclick: move |e| on_open.call(e),
                    "Open"
                }
                button {
                    class: "collapse-btn",
                    title: "Build a project from images, script and narration",
                    style: "{MENU_BUTTON_STYLE} color: {TEXT_PRIMARY};",
                    onclick: move |e| on_import_payload.call(e),
                    "Import"
                }
                button {
                    class: "collapse-btn",
                    style: "{MENU_BUTTON_STYLE} color: {TEXT_PRIMARY};",
                    onclick: move |e| on_load_subtitles.call(e),
                    "Subtitles"
                }
                button {
                    class: "collapse-btn",
                    style: "{MENU_BUTTON_STYLE} color: {TEXT_PRIMARY};",
                    onclick: move |e| on_save.call(e),
                    "Save"
                }
            }
            span { style: "font-size: 13px; color: {TEXT_MUTED};", "{project_title}{dirty_marker}" }
            div {
                style: "display: flex; align-items: center; justify-content: flex-end; gap: 4px; min-width: 220px;",
                button {
                    class: "collapse-btn",
                    title: "{undo_title}",
                    disabled: !can_undo,
                    style: "{MENU_BUTTON_STYLE} color: {undo_color};",
                    onclick: move |e| on_undo.call(e),
                    "Undo"
                }
                button {
                    class: "collapse-btn",
                    title: "{redo_title}",
                    disabled: !can_redo,
                    style: "{MENU_BUTTON_STYLE} color: {redo_color};",
                    onclick: move |e| on_redo.call(e),
                    "Redo"
                }
            }
        }
    }
}
