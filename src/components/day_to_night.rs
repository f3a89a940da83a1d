use crate::components::{
    format_position, PlatformVideo, PositionController, SliderRange, VIDEO_ELEMENT_ID,
};
use crate::diagnostics::{log_ignored_input, log_seek};
use crate::settings::ScrubberSettings;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

/// Range input that scrubs the day-to-night video.
#[component]
pub fn DayToNightSlider() -> Element {
    let settings = use_context::<Signal<ScrubberSettings>>();
    let mut controller = use_signal(|| {
        let range = settings.peek().slider_range().unwrap_or_else(|err| {
            warn!(%err, "invalid slider settings, using default range");
            SliderRange::default()
        });
        PositionController::<PlatformVideo>::new(range)
    });

    let on_slider_input = move |e: Event<FormData>| {
        let raw = e.value();
        let outcome = controller.write().on_slider_input(&raw);
        match outcome {
            Some(outcome) => log_seek(controller.peek().slider_value(), &outcome),
            None => log_ignored_input(&raw),
        }
    };

    let on_video_mounted = move |_: MountedEvent| match PlatformVideo::bind(VIDEO_ELEMENT_ID) {
        Some(video) => {
            let replaced = controller.peek().is_attached();
            debug!(element_id = VIDEO_ELEMENT_ID, replaced, "video attached");
            controller.write().attach(video);
        }
        None => warn!(element_id = VIDEO_ELEMENT_ID, "video element not found"),
    };

    // The element goes away with the widget; drop our reference to it.
    use_drop(move || {
        if let Ok(mut controller) = controller.try_write() {
            controller.detach();
        }
    });

    let ScrubberSettings {
        video_src,
        video_width,
        muted,
        caption,
        ..
    } = settings();
    let range = controller.read().range();
    let slider_value = controller.read().slider_value();

    rsx! {
        div { class: "day-to-night",
            small { "{caption}" }
            br {}
            div { class: "day-to-night-controls",
                input {
                    class: "slider",
                    r#type: "range",
                    min: "{range.min()}",
                    step: "{range.step()}",
                    max: "{range.max()}",
                    value: "{slider_value}",
                    oninput: on_slider_input,
                }
                span { class: "day-to-night-readout", {format_position(slider_value)} }
            }
            video {
                id: VIDEO_ELEMENT_ID,
                width: "{video_width}",
                muted: muted,
                src: "{video_src}",
                onmounted: on_video_mounted,
            }
        }
    }
}
