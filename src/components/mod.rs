//! The components module contains the day-to-night scrubber and its parts.

mod day_to_night;
mod media_handle;
mod position_controller;
mod slider;

pub use day_to_night::*;
pub use media_handle::*;
pub use position_controller::*;
pub use slider::*;
