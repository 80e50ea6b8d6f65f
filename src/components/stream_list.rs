use dioxus::prelude::*;

use sync_picker::{catalog::Catalog, fl, labels, sync_modes::SyncModeValue};

use crate::components::{stream_row::StreamRow, update_flash::UpdateFlash};

const DEMO_CATALOG: &str = include_str!("../../assets/demo_catalog.json");

#[component]
pub fn StreamList() -> Element {
    let catalog = use_hook(|| match Catalog::from_json(DEMO_CATALOG.as_bytes()) {
        Ok(catalog) => catalog,
        Err(error) => {
            tracing::error!("failed to parse the bundled demo catalog: {error}");
            Catalog::default()
        }
    });

    let destination_sync_modes = catalog.supported_destination_sync_modes.clone();
    let mut streams = use_signal(move || catalog.configured_streams());
    let mut changes = use_signal(|| 0_usize);

    let onchange = move |(index, value): (usize, SyncModeValue)| {
        streams.write()[index].select(value);
        changes += 1;
        tracing::debug!("selected `{}` for stream #{index}", labels::label(value));
    };

    rsx! {
        div { class: "flex flex-col card-body",
            div { class: "flex items-center justify-between gap-4 px-4",
                h2 { class: "card-title grow", {fl!("stream-list-title")} }

                UpdateFlash { changes: changes() }
            }

            ol { class: "list bg-base-100 rounded-box",
                for (index , configured) in streams().into_iter().enumerate() {
                    StreamRow {
                        index,
                        options: configured.stream.sync_mode_options(&destination_sync_modes),
                        configured,
                        onchange,
                    }
                }
            }
        }
    }
}
