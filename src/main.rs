mod components;

use color_eyre::Result;
use dioxus::{
    desktop::{self, WindowBuilder},
    prelude::*,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sync_picker::fl;

use components::{Header, StreamList};

const MAIN_CSS: Asset = asset!("/assets/main.css");

const INDEX_HTML: &str = include_str!("../index.html");

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        Header {},

        main {
            class: "card w-9/10 bg-base-100 shadow-sm",

            StreamList {}
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    sync_picker::i18n::init(&sync_picker::i18n::requested_languages());

    dioxus::LaunchBuilder::new()
        .with_cfg(
            desktop::Config::default()
                .with_menu(None)
                .with_window(WindowBuilder::new().with_title(fl!("app-title")))
                .with_custom_index(INDEX_HTML.to_string()),
        )
        .launch(App);

    Ok(())
}
