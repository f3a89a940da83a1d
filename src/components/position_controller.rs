// Binds the slider value to the playback position of the attached video.
use crate::components::media_handle::{MediaHandle, SeekError};
use crate::components::slider::{parse_slider_value, SliderRange, SliderState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekPhase {
    #[default]
    Idle,
    Seeking,
}

/// Result of applying one slider change to the media handle.
#[derive(Debug, Clone, PartialEq)]
pub enum SeekOutcome {
    Applied,
    /// No media handle attached; only the slider moved.
    Detached,
    Failed(SeekError),
}

pub struct PositionController<M> {
    range: SliderRange,
    slider: SliderState,
    media: Option<M>,
    phase: SeekPhase,
}

impl<M: MediaHandle> PositionController<M> {
    pub fn new(range: SliderRange) -> Self {
        Self {
            range,
            slider: SliderState::default(),
            media: None,
            phase: SeekPhase::Idle,
        }
    }

    pub fn range(&self) -> SliderRange {
        self.range
    }

    pub fn slider_value(&self) -> f64 {
        self.slider.value()
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> SeekPhase {
        self.phase
    }

    pub fn is_attached(&self) -> bool {
        self.media.is_some()
    }

    #[allow(dead_code)]
    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    /// Bind the media handle once the video element is mounted.
    pub fn attach(&mut self, media: M) {
        self.media = Some(media);
    }

    pub fn detach(&mut self) -> Option<M> {
        self.media.take()
    }

    /// Store `new_value` as the slider state and seek the media to it.
    ///
    /// The range input already enforces bounds and step, so the value is
    /// taken as-is. Without an attached handle the seek is skipped and the
    /// slider value is kept.
    pub fn on_slider_change(&mut self, new_value: f64) -> SeekOutcome {
        self.slider.set(new_value);

        let Some(media) = self.media.as_mut() else {
            return SeekOutcome::Detached;
        };

        self.phase = SeekPhase::Seeking;
        let result = media.set_position(new_value);
        self.phase = SeekPhase::Idle;

        match result {
            Ok(()) => SeekOutcome::Applied,
            Err(err) => SeekOutcome::Failed(err),
        }
    }

    /// Form-event entry point. Returns `None` when `raw` is not a number.
    pub fn on_slider_input(&mut self, raw: &str) -> Option<SeekOutcome> {
        let value = parse_slider_value(raw)?;
        Some(self.on_slider_change(value))
    }
}
