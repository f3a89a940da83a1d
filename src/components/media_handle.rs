// Seek access to the video element, one implementation per platform.
#[cfg(not(target_arch = "wasm32"))]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlVideoElement};

/// DOM id of the video element rendered by `DayToNightSlider`.
pub const VIDEO_ELEMENT_ID: &str = "day-to-night-video";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeekError {
    #[error("video element `{element_id}` is no longer in the document")]
    Disconnected { element_id: String },
    #[error("refusing to seek to non-finite position {0}")]
    NonFinite(f64),
}

/// Anything whose playback position can be moved.
pub trait MediaHandle {
    fn set_position(&mut self, seconds: f64) -> Result<(), SeekError>;
}

#[cfg(target_arch = "wasm32")]
pub type PlatformVideo = VideoElementHandle;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformVideo = ScriptedVideoHandle;

/// Direct handle on an `HtmlVideoElement`.
#[cfg(target_arch = "wasm32")]
pub struct VideoElementHandle {
    element_id: String,
    video: HtmlVideoElement,
}

#[cfg(target_arch = "wasm32")]
impl VideoElementHandle {
    /// Look up a mounted video element by id.
    pub fn bind(element_id: &str) -> Option<Self> {
        let document = window()?.document()?;
        let video = document
            .get_element_by_id(element_id)?
            .dyn_into::<HtmlVideoElement>()
            .ok()?;
        Some(Self {
            element_id: element_id.to_string(),
            video,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl MediaHandle for VideoElementHandle {
    fn set_position(&mut self, seconds: f64) -> Result<(), SeekError> {
        if !seconds.is_finite() {
            return Err(SeekError::NonFinite(seconds));
        }
        if !self.video.is_connected() {
            return Err(SeekError::Disconnected {
                element_id: self.element_id.clone(),
            });
        }
        self.video.set_current_time(seconds);
        Ok(())
    }
}

/// Webview handle: seeks by evaluating a script against the element id.
#[cfg(not(target_arch = "wasm32"))]
pub struct ScriptedVideoHandle {
    element_id: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl ScriptedVideoHandle {
    pub fn bind(element_id: &str) -> Option<Self> {
        if element_id.trim().is_empty() {
            return None;
        }
        Some(Self {
            element_id: element_id.to_string(),
        })
    }

    fn seek_script(&self, seconds: f64) -> String {
        let id = serde_json::to_string(&self.element_id).unwrap_or_else(|_| "\"\"".to_string());
        format!(
            r#"(function () {{
                const video = document.getElementById({id});
                if (!video) return false;
                video.currentTime = {seconds};
                return true;
            }})();"#
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaHandle for ScriptedVideoHandle {
    fn set_position(&mut self, seconds: f64) -> Result<(), SeekError> {
        if !seconds.is_finite() {
            return Err(SeekError::NonFinite(seconds));
        }
        // The element may already be gone; the script checks before writing.
        let _ = document::eval(&self.seek_script(seconds));
        Ok(())
    }
}
