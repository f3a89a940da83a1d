// Slider state and range helpers shared by the controller and the view.
use crate::settings::SettingsError;

/// Bounds of the range input, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    min: f64,
    max: f64,
    step: f64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 8.0,
            step: 0.1,
        }
    }
}

impl SliderRange {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, SettingsError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(SettingsError::NonFiniteRange);
        }
        if min >= max {
            return Err(SettingsError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(SettingsError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Value currently selected on the range input, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderState {
    value: f64,
}

impl SliderState {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }
}

/// Parse the string an `input[type=range]` hands back in its form event.
pub fn parse_slider_value(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Format a slider value for the readout next to the input, e.g. `4.5s`.
pub fn format_position(seconds: f64) -> String {
    format!("{:.1}s", seconds.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_matches_the_input_markup() {
        let range = SliderRange::default();
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 8.0);
        assert_eq!(range.step(), 0.1);
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(matches!(
            SliderRange::new(8.0, 0.0, 0.1),
            Err(SettingsError::EmptyRange { .. })
        ));
        assert!(matches!(
            SliderRange::new(2.0, 2.0, 0.1),
            Err(SettingsError::EmptyRange { .. })
        ));
    }

    #[test]
    fn range_rejects_bad_step() {
        assert!(matches!(
            SliderRange::new(0.0, 8.0, 0.0),
            Err(SettingsError::InvalidStep(_))
        ));
        assert!(matches!(
            SliderRange::new(0.0, 8.0, -1.0),
            Err(SettingsError::InvalidStep(_))
        ));
        assert!(matches!(
            SliderRange::new(0.0, f64::INFINITY, 0.1),
            Err(SettingsError::NonFiniteRange)
        ));
    }

    #[test]
    fn slider_state_starts_at_zero() {
        assert_eq!(SliderState::default().value(), 0.0);
    }

    #[test]
    fn parses_form_values() {
        assert_eq!(parse_slider_value("4.5"), Some(4.5));
        assert_eq!(parse_slider_value(" 8 "), Some(8.0));
        assert_eq!(parse_slider_value("0"), Some(0.0));
        assert_eq!(parse_slider_value(""), None);
        assert_eq!(parse_slider_value("dusk"), None);
        assert_eq!(parse_slider_value("NaN"), None);
        assert_eq!(parse_slider_value("inf"), None);
    }

    #[test]
    fn formats_readout() {
        assert_eq!(format_position(0.0), "0.0s");
        assert_eq!(format_position(4.5), "4.5s");
        assert_eq!(format_position(8.0), "8.0s");
    }
}
