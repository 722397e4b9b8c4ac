use crate::config::EditorConfig;
use crate::core::frame_math::FrameScale;

/// Horizontal zoom of the timeline in pixels per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineZoom {
    pixels_per_second: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl TimelineZoom {
    /// Zoom bounded by the config's range, starting at the long-project default.
    pub fn from_config(config: &EditorConfig) -> Self {
        let min = config.min_pixels_per_second.max(f64::MIN_POSITIVE);
        let max = config.max_pixels_per_second.max(min);
        let mut zoom = Self {
            pixels_per_second: min,
            min,
            max,
            step: if config.zoom_step > 1.0 { config.zoom_step } else { 1.25 },
        };
        zoom.set(config.long_project_pixels_per_second);
        zoom
    }

    /// Zoom a freshly loaded project opens at: short projects get the finer zoom.
    pub fn for_project(config: &EditorConfig, total_seconds: f64) -> Self {
        let mut zoom = Self::from_config(config);
        zoom.set(default_pixels_per_second(config, total_seconds));
        zoom
    }

    pub fn pixels_per_second(&self) -> f64 {
        self.pixels_per_second
    }

    pub fn scale(&self, fps: u32) -> FrameScale {
        FrameScale::new(self.pixels_per_second, fps)
    }

    /// Set the zoom, clamped into bounds. Returns the value applied.
    pub fn set(&mut self, pixels_per_second: f64) -> f64 {
        if pixels_per_second.is_finite() {
            self.pixels_per_second = pixels_per_second.clamp(self.min, self.max);
        }
        self.pixels_per_second
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set(self.pixels_per_second * self.step)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set(self.pixels_per_second / self.step)
    }

    pub fn can_zoom_in(&self) -> bool {
        self.pixels_per_second < self.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.pixels_per_second > self.min
    }

    /// Width of the scrollable track content for a project of `total_seconds`.
    pub fn content_width(&self, total_seconds: f64) -> f64 {
        (total_seconds.max(0.0) * self.pixels_per_second).ceil()
    }

    pub fn label(&self) -> String {
        format!("{:.0}px/s", self.pixels_per_second)
    }
}

/// Default zoom for a project of `total_seconds`.
pub fn default_pixels_per_second(config: &EditorConfig, total_seconds: f64) -> f64 {
    if total_seconds <= config.short_project_seconds {
        config.short_project_pixels_per_second
    } else {
        config.long_project_pixels_per_second
    }
}
