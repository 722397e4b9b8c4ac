use dioxus::prelude::*;
use crate::constants::{
    BORDER_STRONG, BORDER_SUBTLE, RULER_FRAME_TICK_MIN_ZOOM, RULER_TARGET_TICK_PX, TEXT_DIM,
};

/// Label spacings the ruler picks from, in seconds.
const NICE_TICK_SECONDS: [f64; 10] = [0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0, 300.0];

/// A labelled ruler tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RulerTick {
    pub seconds: f64,
    pub x: f64,
    pub label: String,
}

/// Smallest nice spacing that keeps labels about `RULER_TARGET_TICK_PX` apart.
pub fn tick_interval_seconds(pixels_per_second: f64) -> f64 {
    let target_seconds = (RULER_TARGET_TICK_PX / pixels_per_second.max(0.1)).max(0.5);
    NICE_TICK_SECONDS
        .into_iter()
        .find(|tick| *tick >= target_seconds)
        .unwrap_or(NICE_TICK_SECONDS[NICE_TICK_SECONDS.len() - 1])
}

/// Labelled ticks from 0 up to and including `total_seconds`.
pub fn ruler_ticks(total_seconds: f64, pixels_per_second: f64) -> Vec<RulerTick> {
    let interval = tick_interval_seconds(pixels_per_second);
    let count = (total_seconds.max(0.0) / interval).floor() as usize;
    (0..=count)
        .map(|i| {
            let seconds = i as f64 * interval;
            let whole = seconds as u64;
            RulerTick {
                seconds,
                x: seconds * pixels_per_second,
                label: format!("{}:{:02}", whole / 60, whole % 60),
            }
        })
        .collect()
}

/// Time ruler with tick marks and labels.
/// Everything here uses pointer-events: none so clicks reach the ruler strip underneath.
#[component]
pub(crate) fn TimeRuler(total_seconds: f64, pixels_per_second: f64, fps: u32) -> Element {
    let ticks = ruler_ticks(total_seconds, pixels_per_second);
    let content_width = total_seconds * pixels_per_second;
    let last_index = ticks.len().saturating_sub(1);

    // Frame ticks only where a frame is at least a few pixels wide.
    let frame_ticks: Vec<f64> = if pixels_per_second >= RULER_FRAME_TICK_MIN_ZOOM {
        let fps = fps.max(1);
        let frames = (total_seconds * f64::from(fps)).round() as u32;
        (0..=frames)
            .filter(|frame| frame % fps != 0)
            .map(|frame| f64::from(frame) / f64::from(fps) * pixels_per_second)
            .collect()
    } else {
        Vec::new()
    };

    rsx! {
        div {
            style: "position: absolute; left: 0; top: 0; width: 100%; height: 100%; pointer-events: none;",

            for (i, x) in frame_ticks.into_iter().enumerate() {
                div {
                    key: "frame-{i}",
                    style: "position: absolute; left: {x}px; bottom: 0; width: 1px; height: 4px; background-color: {BORDER_SUBTLE};",
                }
            }

            for (i, tick) in ticks.into_iter().enumerate() {
                {
                    // Right-align the last label so it stays inside the content.
                    let right_align = i == last_index || tick.x + 40.0 > content_width;
                    let (label_left, transform) = if right_align {
                        (tick.x - 4.0, "translateX(-100%)")
                    } else {
                        (tick.x + 4.0, "none")
                    };
                    rsx! {
                        div {
                            key: "tick-{i}",
                            div {
                                style: "position: absolute; left: {tick.x}px; bottom: 0; width: 1px; height: 10px; background-color: {BORDER_STRONG};",
                            }
                            div {
                                style: "position: absolute; left: {label_left}px; top: 3px; font-size: 9px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace; user-select: none; transform: {transform};",
                                "{tick.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_targets_ninety_pixels() {
        assert_eq!(tick_interval_seconds(100.0), 1.0);
        assert_eq!(tick_interval_seconds(40.0), 5.0);
        assert_eq!(tick_interval_seconds(400.0), 0.5);
        assert_eq!(tick_interval_seconds(0.01), 300.0);
    }

    #[test]
    fn ticks_cover_the_project_end() {
        let ticks = ruler_ticks(60.0, 40.0);
        assert_eq!(ticks.len(), 13);
        assert_eq!(ticks[0].label, "0:00");
        assert_eq!(ticks[12].label, "1:00");
        assert_eq!(ticks[12].x, 2400.0);
    }
}
