use serde::{Deserialize, Serialize};

/// Narration track spanning the whole project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceOver {
    pub url: String,
    /// Volume from 0.0 (muted) to 1.0
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Delay before the narration starts, in seconds
    #[serde(default)]
    pub offset_seconds: f64,
}

impl VoiceOver {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            volume: default_volume(),
            offset_seconds: 0.0,
        }
    }

    /// Bring volume and offset back into range.
    pub(crate) fn normalized(mut self) -> Self {
        self.volume = clamp_volume(self.volume);
        if !self.offset_seconds.is_finite() {
            self.offset_seconds = 0.0;
        }
        self
    }
}

pub(crate) fn default_volume() -> f32 {
    1.0
}

/// Clamp a volume into `[0, 1]`; NaN becomes silence.
pub(crate) fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_clamps_volume() {
        let voice = VoiceOver {
            volume: 3.0,
            ..VoiceOver::new("narration.mp3")
        };
        assert_eq!(voice.normalized().volume, 1.0);
        assert_eq!(clamp_volume(-0.5), 0.0);
        assert_eq!(clamp_volume(f32::NAN), 0.0);
    }
}
