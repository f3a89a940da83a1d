use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

mod components;
mod diagnostics;
mod settings;

use components::DayToNightSlider;
use settings::ScrubberSettings;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const SETTINGS_JSON: &str = include_str!("../assets/settings.json");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = use_signal(|| {
        ScrubberSettings::from_json(SETTINGS_JSON).unwrap_or_else(|err| {
            warn!(%err, "falling back to default scrubber settings");
            ScrubberSettings::default()
        })
    });
    use_context_provider(|| settings);

    rsx! {
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Title { "Day to Night" }
        document::Stylesheet { href: APP_CSS }

        DayToNightSlider {}
    }
}
