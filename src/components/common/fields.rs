use dioxus::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::constants::*;
use crate::utils::{parse_f32_input, parse_f64_input};

const INPUT_STYLE: &str = "
    width: 100%; min-width: 0; box-sizing: border-box;
    padding: 6px 8px; font-size: 12px;
    border-radius: 4px; outline: none; user-select: text;
";

/// Number input that commits on blur or Enter.
#[component]
pub fn NumericField(
    label: &'static str,
    value: f64,
    step: &'static str,
    clamp_min: Option<f64>,
    clamp_max: Option<f64>,
    on_commit: EventHandler<f64>,
    #[props(default)] on_focus_change: Option<EventHandler<bool>>,
) -> Element {
    let mut text = use_signal(|| format!("{:.2}", value));
    let mut last_prop_value = use_signal(|| value);

    use_effect(move || {
        let v = value;
        if (v - last_prop_value()).abs() > 0.0001 {
            text.set(format!("{:.2}", v));
            last_prop_value.set(v);
        }
    });

    let make_commit = || {
        let mut text = text;
        let mut last_prop_value = last_prop_value;
        move || {
            let mut parsed = parse_f64_input(&text(), value);
            if let Some(min) = clamp_min {
                parsed = parsed.max(min);
            }
            if let Some(max) = clamp_max {
                parsed = parsed.min(max);
            }
            on_commit.call(parsed);
            text.set(format!("{:.2}", parsed));
            last_prop_value.set(parsed);
        }
    };

    let mut commit_on_blur = make_commit();
    let mut commit_on_key = make_commit();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            span { style: "font-size: 10px; color: {TEXT_MUTED};", "{label}" }
            input {
                r#type: "number",
                step: "{step}",
                value: "{text()}",
                style: "{INPUT_STYLE} background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT};",
                oninput: move |e| text.set(e.value()),
                onfocus: move |_| {
                    if let Some(handler) = on_focus_change {
                        handler.call(true);
                    }
                },
                onblur: move |_| {
                    commit_on_blur();
                    if let Some(handler) = on_focus_change {
                        handler.call(false);
                    }
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        commit_on_key();
                    }
                },
            }
        }
    }
}

/// Range slider for 0..=1 volumes.
#[component]
pub fn VolumeField(label: &'static str, value: f32, on_commit: EventHandler<f32>) -> Element {
    let percent = (value * 100.0).round();
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            div {
                style: "display: flex; justify-content: space-between; font-size: 10px; color: {TEXT_MUTED};",
                span { "{label}" }
                span { "{percent}%" }
            }
            input {
                r#type: "range",
                min: "0",
                max: "1",
                step: "0.01",
                value: "{value}",
                style: "width: 100%; accent-color: {BORDER_ACCENT};",
                onchange: move |e| on_commit.call(parse_f32_input(&e.value(), value)),
            }
        }
    }
}

/// Single-line text input that commits on blur or Enter.
#[component]
pub fn TextField(
    label: String,
    value: String,
    #[props(default)] placeholder: String,
    on_commit: EventHandler<String>,
    #[props(default)] on_focus_change: Option<EventHandler<bool>>,
) -> Element {
    let mut text = use_signal(|| value.clone());
    let mut last_prop_value = use_signal(|| value.clone());

    use_effect(use_reactive!(|value| {
        if value != *last_prop_value.peek() {
            text.set(value.clone());
            last_prop_value.set(value);
        }
    }));

    let make_commit = || {
        let mut last_prop_value = last_prop_value;
        move || {
            let next = text();
            if next != *last_prop_value.peek() {
                on_commit.call(next.clone());
                last_prop_value.set(next);
            }
        }
    };

    let mut commit_on_blur = make_commit();
    let mut commit_on_key = make_commit();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            span { style: "font-size: 10px; color: {TEXT_MUTED};", "{label}" }
            input {
                r#type: "text",
                value: "{text()}",
                placeholder: "{placeholder}",
                style: "{INPUT_STYLE} background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT};",
                oninput: move |e| text.set(e.value()),
                onfocus: move |_| {
                    if let Some(handler) = on_focus_change {
                        handler.call(true);
                    }
                },
                onblur: move |_| {
                    commit_on_blur();
                    if let Some(handler) = on_focus_change {
                        handler.call(false);
                    }
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        commit_on_key();
                    }
                },
            }
        }
    }
}

/// Multi-line text area. Keeps its own draft while focused so re-renders from
/// other edits do not clobber typing.
#[component]
pub fn TextAreaField(
    label: String,
    value: String,
    rows: u32,
    on_commit: EventHandler<String>,
    #[props(default)] on_focus_change: Option<EventHandler<bool>>,
) -> Element {
    let draft = use_hook(|| Rc::new(RefCell::new(value.clone())));
    let draft_dirty = use_hook(|| Rc::new(Cell::new(false)));
    let mut is_focused = use_signal(|| false);

    {
        let draft = draft.clone();
        let draft_dirty = draft_dirty.clone();
        use_effect(use_reactive!(|value| {
            if is_focused() {
                return;
            }
            let mut draft_value = draft.borrow_mut();
            if !draft_dirty.get() && *draft_value != value {
                *draft_value = value.clone();
            } else if draft_dirty.get() && *draft_value == value {
                draft_dirty.set(false);
            }
        }));
    }

    let draft_oninput = draft.clone();
    let draft_onblur = draft.clone();
    let draft_dirty_oninput = draft_dirty.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            span { style: "font-size: 10px; color: {TEXT_MUTED};", "{label}" }
            textarea {
                rows: "{rows}",
                value: "{draft.borrow().clone()}",
                style: "{INPUT_STYLE} line-height: 1.4; resize: vertical; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT};",
                oninput: move |e| {
                    *draft_oninput.borrow_mut() = e.value();
                    draft_dirty_oninput.set(true);
                },
                onfocus: move |_| {
                    is_focused.set(true);
                    if let Some(handler) = on_focus_change {
                        handler.call(true);
                    }
                },
                onblur: move |_| {
                    is_focused.set(false);
                    on_commit.call(draft_onblur.borrow().clone());
                    if let Some(handler) = on_focus_change {
                        handler.call(false);
                    }
                },
            }
        }
    }
}
