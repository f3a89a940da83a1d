use crate::components::SeekOutcome;
use dioxus::logger::tracing::{debug, trace, warn};

#[inline]
pub fn log_seek(value: f64, outcome: &SeekOutcome) {
    match outcome {
        SeekOutcome::Applied => trace!(position = value, "seeked video"),
        SeekOutcome::Detached => debug!(position = value, "no video attached, seek skipped"),
        SeekOutcome::Failed(err) => warn!(position = value, %err, "seek failed"),
    }
}

#[inline]
pub fn log_ignored_input(raw: &str) {
    debug!(raw, "ignoring non-numeric slider value");
}
