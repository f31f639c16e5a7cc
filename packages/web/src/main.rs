use dioxus::prelude::*;
use serde::Deserialize;

use ui::{ViewMoreConfig, VIEW_MORE_CSS};
use views::RecordTable;

mod records;
mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DEMO_TOML: &str = include_str!("../demo.toml");

/// Contents of `demo.toml`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
struct DemoConfig {
    details: ViewMoreConfig,
}

impl DemoConfig {
    fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

fn load_details_config() -> ViewMoreConfig {
    match DemoConfig::from_toml(DEMO_TOML) {
        Ok(config) => config.details,
        Err(e) => {
            tracing::error!("Invalid demo.toml, using defaults: {}", e);
            ViewMoreConfig::new("View More")
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let details = use_hook(load_details_config);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Stylesheet { href: VIEW_MORE_CSS }

        main {
            class: "demo",
            h1 { "Records" }
            p {
                class: "demo-hint",
                "Clicking a row selects it. The buttons open the full record without selecting the row."
            }
            RecordTable { records: records::sample(), details }
        }
    }
}
