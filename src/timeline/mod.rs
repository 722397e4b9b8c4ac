//! Timeline module
//!
//! Pointer logic (`interaction`, `caption_overrides`, `zoom`) is toolkit-free
//! and unit tested; the remaining modules render it with Dioxus.

pub mod caption_overrides;
pub mod interaction;
pub mod zoom;

mod audio_row;
mod caption_row;
mod clip_element;
mod panel;
mod playback_controls;
mod ruler;
mod track_label;
mod track_row;

pub use caption_overrides::CaptionOverrides;
pub use interaction::TimelineInteraction;
pub use panel::TimelinePanel;
pub use zoom::TimelineZoom;

/// Narrowest a clip is drawn, so one-second clips stay grabbable when zoomed out.
pub(crate) const MIN_CLIP_WIDTH_PX: f64 = 12.0;
