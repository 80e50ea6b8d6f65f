// NOTE: The `#[component]` macro is deriving `PartialEq`, but not `Eq` (since that's not needed), and clippy is
// complaining about that. This needs to be a module-level `#![expect(...)]` since I can't actually place an
// `#[expect(...)]` inside of the `#[component]` macro
#![expect(clippy::derive_partial_eq_without_eq)]

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use sync_picker::fl;

const FLASH_DURATION: Duration = Duration::from_secs(3);

#[component]
pub fn UpdateFlash(changes: ReadOnlySignal<usize>) -> Element {
    let mut visible = use_signal(|| false);

    use_effect(move || {
        let count = changes();
        if count == 0 {
            return;
        }

        visible.set(true);
        spawn(async move {
            sleep(FLASH_DURATION).await;
            // NOTE: Only the task spawned by the most recent change gets to hide the badge; without this check, an
            // older task waking up would cut a newer flash short
            if *changes.peek() == count {
                visible.set(false);
            }
        });
    });

    rsx! {
        if visible() {
            span { class: "badge badge-success", {fl!("selection-updated")} }
        }
    }
}
