// NOTE: The `#[component]` macro is deriving `PartialEq`, but not `Eq` (since that's not needed), and clippy is
// complaining about that. This needs to be a module-level `#![expect(...)]` since I can't actually place an
// `#[expect(...)]` inside of the `#[component]` macro
#![expect(clippy::derive_partial_eq_without_eq)]

use dioxus::prelude::*;

use sync_picker::{
    catalog::ConfiguredStream,
    labels::LabeledOption,
    sync_modes::{SyncModeOption, SyncModeValue},
};

use crate::components::{
    pill_select::PillVariant,
    sync_mode_select::SyncModeSelect,
};

#[component]
pub fn StreamRow(
    index: usize,
    configured: ConfiguredStream,
    options: Vec<SyncModeOption>,
    onchange: EventHandler<(usize, SyncModeValue)>,
) -> Element {
    // Red flags a stream the destination can't accept at all; otherwise the pill stays grey until the stream has a
    // full combination picked for it
    let variant = if options.is_empty() {
        PillVariant::Red
    } else if configured.selection.complete().is_some() {
        PillVariant::Green
    } else {
        PillVariant::Grey
    };

    let namespace_badge = configured.stream.namespace.clone().map(|namespace| {
        rsx! {
            span { class: "badge badge-ghost mr-2", {namespace} }
        }
    });

    rsx! {
        li { class: "list-row items-center",
            div { class: "font-mono list-col-grow",
                {namespace_badge}
                {configured.stream.name.clone()}
            }

            SyncModeSelect {
                options,
                value: configured.selection,
                onchange: move |option: LabeledOption<SyncModeValue>| onchange.call((index, option.value)),
                variant,
            }
        }
    }
}
