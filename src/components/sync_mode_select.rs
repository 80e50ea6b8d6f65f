// NOTE: The `#[component]` macro is deriving `PartialEq`, but not `Eq` (since that's not needed), and clippy is
// complaining about that. This needs to be a module-level `#![expect(...)]` since I can't actually place an
// `#[expect(...)]` inside of the `#[component]` macro
#![expect(clippy::derive_partial_eq_without_eq)]

use dioxus::prelude::*;

use sync_picker::{
    labels::{self, LabeledOption},
    sync_modes::{PartialSyncModeValue, SyncModeOption, SyncModeValue},
};

use crate::components::pill_select::{PillSelect, PillVariant};

#[component]
pub fn SyncModeSelect(
    options: ReadOnlySignal<Vec<SyncModeOption>>,
    value: ReadOnlySignal<PartialSyncModeValue>,
    onchange: Option<EventHandler<LabeledOption<SyncModeValue>>>,
    #[props(default)] variant: PillVariant,
) -> Element {
    // The labels only need recomputing when the list of allowed combinations actually changes
    let pill_options = use_memo(move || labels::labeled_options(&options()));

    rsx! {
        PillSelect {
            options: pill_options(),
            selected: value().complete(),
            onselect: move |option: LabeledOption<SyncModeValue>| {
                if let Some(onchange) = onchange {
                    onchange.call(option);
                }
            },
            variant,
        }
    }
}
