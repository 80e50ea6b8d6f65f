use dioxus::prelude::*;

use sync_picker::fl;

#[component]
pub fn Header() -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center gap-8 mb-8",

            h1 {
                class: "text-6xl font-mono font-bold",
                {fl!("app-title")}
            }
        }
    }
}
