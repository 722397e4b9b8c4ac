//! Hotkey system
//!
//! Maps key events to editor actions. The App component owns the dispatch:
//! `handle_hotkey()` only decides *what* should happen.
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's key handler

use dioxus::prelude::Key;

/// Semantic actions that can be triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // ═══════════════════════════════════════════════════════════════
    // Timeline Zoom
    // ═══════════════════════════════════════════════════════════════
    /// Zoom in on the timeline (increase pixels per second)
    TimelineZoomIn,
    /// Zoom out on the timeline (decrease pixels per second)
    TimelineZoomOut,

    // ═══════════════════════════════════════════════════════════════
    // Project
    // ═══════════════════════════════════════════════════════════════
    SaveProject,
    Undo,
    Redo,
    /// Remove the selected scene.
    DeleteScene,

    // ═══════════════════════════════════════════════════════════════
    // Playhead
    // ═══════════════════════════════════════════════════════════════
    StepBackward,
    StepForward,
    SeekStart,
    SeekEnd,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a scene is selected
    pub has_selection: bool,
    /// Whether an input field has focus (suppresses every hotkey)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(
    key: &Key,
    shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }
    let command = ctrl || meta;

    // ═══════════════════════════════════════════════════════════════
    // Global Hotkeys
    // ═══════════════════════════════════════════════════════════════
    let action = match key {
        Key::Character(c) if command && c.eq_ignore_ascii_case("s") => Some(HotkeyAction::SaveProject),
        Key::Character(c) if command && c.eq_ignore_ascii_case("z") => Some(if shift {
            HotkeyAction::Redo
        } else {
            HotkeyAction::Undo
        }),
        Key::Character(c) if command && c.eq_ignore_ascii_case("y") => Some(HotkeyAction::Redo),
        // Numpad and main-row +/- (and the unshifted "=")
        Key::Character(c) if !command && (c == "+" || c == "=") => Some(HotkeyAction::TimelineZoomIn),
        Key::Character(c) if !command && c == "-" => Some(HotkeyAction::TimelineZoomOut),
        Key::ArrowLeft => Some(HotkeyAction::StepBackward),
        Key::ArrowRight => Some(HotkeyAction::StepForward),
        Key::Home => Some(HotkeyAction::SeekStart),
        Key::End => Some(HotkeyAction::SeekEnd),
        _ => None,
    };
    if let Some(action) = action {
        return HotkeyResult::Action(action);
    }

    // ═══════════════════════════════════════════════════════════════
    // Context-Specific Hotkeys
    // ═══════════════════════════════════════════════════════════════
    if context.has_selection && matches!(key, Key::Delete | Key::Backspace) {
        return HotkeyResult::Action(HotkeyAction::DeleteScene);
    }

    HotkeyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key, shift: bool, ctrl: bool, ctx: &HotkeyContext) -> HotkeyResult {
        handle_hotkey(&key, shift, ctrl, false, false, ctx)
    }

    #[test]
    fn test_plus_zooms_in() {
        let ctx = HotkeyContext::default();
        let result = press(Key::Character("+".to_string()), false, false, &ctx);
        assert_eq!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomIn));
    }

    #[test]
    fn test_minus_zooms_out() {
        let ctx = HotkeyContext::default();
        let result = press(Key::Character("-".to_string()), false, false, &ctx);
        assert_eq!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomOut));
    }

    #[test]
    fn test_ctrl_z_undoes_and_shift_redoes() {
        let ctx = HotkeyContext::default();
        assert_eq!(
            press(Key::Character("z".to_string()), false, true, &ctx),
            HotkeyResult::Action(HotkeyAction::Undo)
        );
        assert_eq!(
            press(Key::Character("Z".to_string()), true, true, &ctx),
            HotkeyResult::Action(HotkeyAction::Redo)
        );
        assert_eq!(
            handle_hotkey(&Key::Character("s".to_string()), false, false, false, true, &ctx),
            HotkeyResult::Action(HotkeyAction::SaveProject)
        );
    }

    #[test]
    fn test_delete_requires_selection() {
        let mut ctx = HotkeyContext::default();
        assert_eq!(press(Key::Delete, false, false, &ctx), HotkeyResult::NoMatch);
        ctx.has_selection = true;
        assert_eq!(
            press(Key::Backspace, false, false, &ctx),
            HotkeyResult::Action(HotkeyAction::DeleteScene)
        );
    }

    #[test]
    fn test_arrows_step_the_playhead() {
        let ctx = HotkeyContext::default();
        assert_eq!(press(Key::ArrowLeft, false, false, &ctx), HotkeyResult::Action(HotkeyAction::StepBackward));
        assert_eq!(press(Key::End, false, false, &ctx), HotkeyResult::Action(HotkeyAction::SeekEnd));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            input_focused: true,
            ..Default::default()
        };
        let result = press(Key::Character("+".to_string()), false, false, &ctx);
        assert_eq!(result, HotkeyResult::Suppressed);
    }

    #[test]
    fn test_unknown_key_no_match() {
        let ctx = HotkeyContext::default();
        let result = press(Key::Character("q".to_string()), false, false, &ctx);
        assert_eq!(result, HotkeyResult::NoMatch);
    }
}
