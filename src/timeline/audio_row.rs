use dioxus::prelude::*;

use crate::constants::{
    ACCENT_AUDIO, ACCENT_MUSIC, AUDIO_TRACK_HEIGHT, BG_BASE, BORDER_SUBTLE, TEXT_DIM, TEXT_SECONDARY,
};
use crate::state::VoiceOver;

/// Narration and music lanes. Both span the whole project, so neither is draggable.
#[component]
pub fn AudioTrackRow(
    width: f64,
    pixels_per_second: f64,
    audio: Option<VoiceOver>,
    music_url: Option<String>,
    music_volume: f32,
) -> Element {
    let lane_height = AUDIO_TRACK_HEIGHT / 2.0 - 3.0;
    let voice = audio.map(|audio| {
        let left = (audio.offset_seconds * pixels_per_second).max(0.0).min(width);
        (left, width - left, file_name(&audio.url), (audio.volume * 100.0).round())
    });
    let music = music_url.map(|url| (file_name(&url), (music_volume * 100.0).round()));

    rsx! {
        div {
            style: "
                height: {AUDIO_TRACK_HEIGHT}px; width: {width}px;
                border-bottom: 1px solid {BORDER_SUBTLE};
                background-color: {BG_BASE};
                position: relative;
            ",
            {match voice {
                Some((left, lane_width, name, volume)) => rsx! {
                    div {
                        style: "position: absolute; left: {left}px; top: 2px; width: {lane_width}px; height: {lane_height}px; box-sizing: border-box; padding: 0 6px; border-radius: 3px; background-color: {ACCENT_AUDIO}33; border-left: 3px solid {ACCENT_AUDIO}; font-size: 10px; color: {TEXT_SECONDARY}; line-height: {lane_height}px; overflow: hidden; white-space: nowrap;",
                        "Voice · {name} · {volume}%"
                    }
                },
                None => rsx! {
                    span {
                        style: "position: absolute; left: 8px; top: 2px; font-size: 10px; color: {TEXT_DIM}; line-height: {lane_height}px;",
                        "No narration"
                    }
                },
            }}
            {match music {
                Some((name, volume)) => rsx! {
                    div {
                        style: "position: absolute; left: 0; bottom: 2px; width: {width}px; height: {lane_height}px; box-sizing: border-box; padding: 0 6px; border-radius: 3px; background-color: {ACCENT_MUSIC}33; border-left: 3px solid {ACCENT_MUSIC}; font-size: 10px; color: {TEXT_SECONDARY}; line-height: {lane_height}px; overflow: hidden; white-space: nowrap;",
                        "Music · {name} · {volume}%"
                    }
                },
                None => rsx! {
                    span {
                        style: "position: absolute; left: 8px; bottom: 2px; font-size: 10px; color: {TEXT_DIM}; line-height: {lane_height}px;",
                        "No music"
                    }
                },
            }}
        }
    }
}

/// Last path segment of a URL or file path.
fn file_name(url: &str) -> String {
    let is_separator = |c: char| c == '/' || c == '\\';
    let trimmed = url.trim_end_matches(is_separator);
    trimmed
        .rsplit(is_separator)
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::file_name;

    #[test]
    fn file_name_takes_last_segment() {
        assert_eq!(file_name("https://cdn.example.com/audio/voice.mp3"), "voice.mp3");
        assert_eq!(file_name("C:\\music\\bed.wav"), "bed.wav");
        assert_eq!(file_name("plain"), "plain");
    }
}
