//! Conversions between frames, seconds and timeline pixels.
//!
//! Nothing here clamps: callers bound their input before converting.

/// A frame offset from the start of the project.
pub type FrameIndex = i64;

/// Pixel/frame scale of the timeline at the current zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameScale {
    /// Zoom level in pixels per second.
    pub pixels_per_second: f64,
    /// Project frame rate.
    pub fps: u32,
}

impl FrameScale {
    pub fn new(pixels_per_second: f64, fps: u32) -> Self {
        Self {
            pixels_per_second,
            fps,
        }
    }

    pub fn pixels_per_frame(&self) -> f64 {
        self.pixels_per_second / f64::from(self.fps.max(1))
    }

    /// Horizontal offset of a frame boundary, in (possibly fractional) pixels.
    ///
    /// Rounding to whole pixels happens at the render edge via
    /// [`FrameScale::frame_to_pixel_px`]; keeping the exact value here makes
    /// `pixel_to_frame(frame_to_pixel(f)) == f` hold at every zoom level.
    pub fn frame_to_pixel(&self, frame: FrameIndex) -> f64 {
        frame as f64 * self.pixels_per_frame()
    }

    /// Whole-pixel offset used for element placement.
    pub fn frame_to_pixel_px(&self, frame: FrameIndex) -> f64 {
        self.frame_to_pixel(frame).round()
    }

    pub fn pixel_to_frame(&self, px: f64) -> FrameIndex {
        let pixels_per_frame = self.pixels_per_frame();
        if !(pixels_per_frame > 0.0) || !px.is_finite() {
            return 0;
        }
        (px / pixels_per_frame).round() as FrameIndex
    }
}

pub fn frames_to_seconds(frame: FrameIndex, fps: u32) -> f64 {
    frame as f64 / f64::from(fps.max(1))
}

pub fn seconds_to_frames(seconds: f64, fps: u32) -> FrameIndex {
    if !seconds.is_finite() {
        return 0;
    }
    (seconds * f64::from(fps.max(1))).round() as FrameIndex
}

/// Round a frame to the nearest whole-second boundary.
pub fn snap_to_second(frame: FrameIndex, fps: u32) -> FrameIndex {
    let fps = FrameIndex::from(fps.max(1));
    (frame as f64 / fps as f64).round() as FrameIndex * fps
}

/// `M:SS` label for the whole seconds elapsed at `frame`.
pub fn format_time(frame: FrameIndex, fps: u32) -> String {
    let seconds = frame.max(0) / FrameIndex::from(fps.max(1));
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// `HH:MM:SS:FF` timecode.
pub fn format_timecode(frame: FrameIndex, fps: u32) -> String {
    let fps = FrameIndex::from(fps.max(1));
    let frame = frame.max(0);
    let frames = frame % fps;
    let total_seconds = frame / fps;
    let seconds = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;
    format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_frames_at_100_px_per_second() {
        let scale = FrameScale::new(100.0, 30);
        assert_eq!(scale.frame_to_pixel_px(30), 100.0);
        assert_eq!(scale.frame_to_pixel_px(15), 50.0);
        assert_eq!(scale.pixel_to_frame(100.0), 30);
        assert_eq!(scale.pixel_to_frame(-50.0), -15);
    }

    #[test]
    fn zero_zoom_maps_every_pixel_to_frame_zero() {
        let scale = FrameScale::new(0.0, 30);
        assert_eq!(scale.pixel_to_frame(250.0), 0);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(0, 30), "0:00");
        assert_eq!(format_time(29, 30), "0:00");
        assert_eq!(format_time(30 * 75, 30), "1:15");
        assert_eq!(format_time(30 * 600 + 5, 30), "10:00");
    }

    #[test]
    fn formats_timecode_with_frames() {
        assert_eq!(format_timecode(30 * 3661 + 7, 30), "01:01:01:07");
    }

    #[test]
    fn snaps_to_nearest_second() {
        assert_eq!(snap_to_second(44, 30), 30);
        assert_eq!(snap_to_second(46, 30), 60);
        assert_eq!(snap_to_second(0, 30), 0);
    }

    proptest! {
        #[test]
        fn pixel_round_trip_is_within_one_frame(
            frame in 0i64..=108_000,
            pixels_per_second in 1.0f64..2_000.0,
            fps in prop::sample::select(vec![24u32, 25, 30, 60]),
        ) {
            let scale = FrameScale::new(pixels_per_second, fps);
            let back = scale.pixel_to_frame(scale.frame_to_pixel(frame));
            prop_assert!((back - frame).abs() <= 1);
        }
    }
}
