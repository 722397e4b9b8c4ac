//! Shared UI constants: colors and panel sizing.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_VIDEO: &str = "#22c55e";
pub const ACCENT_AUDIO: &str = "#3b82f6";
pub const ACCENT_MUSIC: &str = "#a855f7";
pub const ACCENT_CAPTION: &str = "#eab308";
pub const ACCENT_PLAYHEAD: &str = "#ef4444";
pub const ACCENT_SNAP: &str = "#f97316";

pub const INSPECTOR_WIDTH: f64 = 280.0;
pub const TIMELINE_HEIGHT: f64 = 260.0;
pub const TRACK_LABEL_WIDTH: f64 = 120.0;
pub const RULER_HEIGHT: f64 = 24.0;
pub const VIDEO_TRACK_HEIGHT: f64 = 56.0;
pub const AUDIO_TRACK_HEIGHT: f64 = 40.0;
pub const CAPTION_TRACK_HEIGHT: f64 = 36.0;
pub const RESIZE_HANDLE_WIDTH: f64 = 6.0;

/// Spacing the ruler aims for between labelled ticks.
pub const RULER_TARGET_TICK_PX: f64 = 90.0;
/// Frame ticks are drawn at or above this zoom.
pub const RULER_FRAME_TICK_MIN_ZOOM: f64 = 240.0;
