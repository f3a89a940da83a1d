use crate::components::SliderRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("slider bounds must be finite")]
    NonFiniteRange,
    #[error("slider range is empty: min {min} is not below max {max}")]
    EmptyRange { min: f64, max: f64 },
    #[error("slider step must be positive, got {0}")]
    InvalidStep(f64),
    #[error("invalid settings document: {0}")]
    Parse(String),
}

/// Widget configuration shared through context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubberSettings {
    pub min_seconds: f64,
    pub max_seconds: f64,
    pub step_seconds: f64,
    pub video_src: String,
    pub video_width: u32,
    pub muted: bool,
    pub caption: String,
}

impl Default for ScrubberSettings {
    fn default() -> Self {
        Self {
            min_seconds: 0.0,
            max_seconds: 8.0,
            step_seconds: 0.1,
            video_src: "/day-to-night.mp4".to_string(),
            video_width: 600,
            muted: true,
            caption: "Use the slider to control the animation".to_string(),
        }
    }
}

impl ScrubberSettings {
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(raw).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    pub fn slider_range(&self) -> Result<SliderRange, SettingsError> {
        SliderRange::new(self.min_seconds, self.max_seconds, self.step_seconds)
    }
}
