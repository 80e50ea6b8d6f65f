// Standard Library Imports
use std::io::Read;

// External Crate Imports
use color_eyre::Result;
use serde::{Deserialize, Serialize};

// Local Crate Imports
use crate::sync_modes::{
    DestinationSyncMode, PartialSyncModeValue, SUPPORTED_COMBINATIONS, SyncMode, SyncModeOption, SyncModeValue,
};

// Public API ==========================================================================================================

/// One source stream advertised by a connection's catalog.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Stream {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    // Catalogs that don't say otherwise are assumed to support every source mode
    #[serde(default = "all_sync_modes")]
    pub supported_sync_modes: Vec<SyncMode>,
}

impl Stream {
    /// The combinations this stream may be replicated with: the product-wide list narrowed to what both this stream
    /// and the destination support, in the product-wide order
    #[must_use]
    pub fn sync_mode_options(&self, destination_sync_modes: &[DestinationSyncMode]) -> Vec<SyncModeOption> {
        SUPPORTED_COMBINATIONS
            .into_iter()
            .filter(|value| {
                self.supported_sync_modes.contains(&value.sync_mode)
                    && destination_sync_modes.contains(&value.destination_sync_mode)
            })
            .map(|value| SyncModeOption { value })
            .collect()
    }
}

/// Everything the app needs to know about a connection: its streams and what the destination can do with them.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub streams: Vec<Stream>,
    pub supported_destination_sync_modes: Vec<DestinationSyncMode>,
}

impl Catalog {
    pub fn from_json(json: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(json)?)
    }

    /// One `ConfiguredStream` per stream, in catalog order, with nothing selected yet
    #[must_use]
    pub fn configured_streams(&self) -> Vec<ConfiguredStream> {
        self.streams.iter().cloned().map(ConfiguredStream::new).collect()
    }
}

/// A stream paired with the (possibly still partial) sync mode selection for it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ConfiguredStream {
    pub stream: Stream,
    pub selection: PartialSyncModeValue,
}

impl ConfiguredStream {
    #[must_use]
    pub fn new(stream: Stream) -> Self {
        let selection = PartialSyncModeValue::default();
        Self { stream, selection }
    }

    pub fn select(&mut self, value: SyncModeValue) {
        self.selection = value.into();
    }
}

// Private Helper Code =================================================================================================

fn all_sync_modes() -> Vec<SyncMode> {
    SyncMode::ALL.to_vec()
}

// Unit Tests ==========================================================================================================

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use indoc::indoc;

    use super::*;

    const CATALOG_JSON: &[u8] = indoc! {br#"
        {
          "streams": [
            {
              "name": "users",
              "namespace": "public",
              "supported_sync_modes": ["full_refresh", "incremental"]
            },
            {
              "name": "page_views",
              "supported_sync_modes": ["full_refresh"]
            },
            {
              "name": "audit_log"
            }
          ],
          "supported_destination_sync_modes": ["append", "overwrite"]
        }
        "#};

    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::from_json(CATALOG_JSON).unwrap());

    #[test]
    fn from_json() {
        let streams = &CATALOG.streams;
        assert_eq!(streams.len(), 3);

        assert_eq!(streams[0].name, "users");
        assert_eq!(streams[0].namespace.as_deref(), Some("public"));
        assert_eq!(streams[0].supported_sync_modes, [SyncMode::FullRefresh, SyncMode::Incremental]);

        assert_eq!(streams[1].name, "page_views");
        assert_eq!(streams[1].namespace, None);
        assert_eq!(streams[1].supported_sync_modes, [SyncMode::FullRefresh]);

        // Streams that don't list their supported modes support everything
        assert_eq!(streams[2].supported_sync_modes, SyncMode::ALL);

        assert_eq!(
            CATALOG.supported_destination_sync_modes,
            [DestinationSyncMode::Append, DestinationSyncMode::Overwrite]
        );
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        let missing_streams = br#"{ "supported_destination_sync_modes": [] }"#;
        assert!(Catalog::from_json(&missing_streams[..]).is_err());

        let unknown_mode = br#"{ "streams": [{ "name": "users", "supported_sync_modes": ["sideways"] }],
                                 "supported_destination_sync_modes": [] }"#;
        assert!(Catalog::from_json(&unknown_mode[..]).is_err());

        assert!(Catalog::from_json(&b"not json"[..]).is_err());
    }

    #[test]
    fn sync_mode_options() {
        let combinations = |options: Vec<SyncModeOption>| {
            options
                .into_iter()
                .map(|option| (option.value.sync_mode.as_str(), option.value.destination_sync_mode.as_str()))
                .collect::<Vec<_>>()
        };

        // Everything supported on both ends yields the full product-wide list, in order
        let users = &CATALOG.streams[0];
        assert_eq!(
            combinations(users.sync_mode_options(&DestinationSyncMode::ALL)),
            [
                ("full_refresh", "overwrite"),
                ("full_refresh", "append"),
                ("incremental", "append"),
                ("incremental", "append_dedup"),
            ]
        );

        // The destination narrows the list by its half of each combination
        assert_eq!(
            combinations(users.sync_mode_options(&CATALOG.supported_destination_sync_modes)),
            [("full_refresh", "overwrite"), ("full_refresh", "append"), ("incremental", "append")]
        );

        // And the stream narrows it by the source half
        let page_views = &CATALOG.streams[1];
        assert_eq!(
            combinations(page_views.sync_mode_options(&CATALOG.supported_destination_sync_modes)),
            [("full_refresh", "overwrite"), ("full_refresh", "append")]
        );

        // A destination that can't do anything leaves nothing to offer
        assert!(page_views.sync_mode_options(&[]).is_empty());
    }

    #[test]
    fn configured_streams_start_unselected() {
        let configured = CATALOG.configured_streams();

        assert_eq!(configured.len(), CATALOG.streams.len());
        for (configured, stream) in configured.iter().zip(&CATALOG.streams) {
            assert_eq!(&configured.stream, stream);
            assert_eq!(configured.selection.complete(), None);
        }
    }

    #[test]
    fn select() {
        let mut configured = ConfiguredStream::new(CATALOG.streams[0].clone());
        assert_eq!(configured.selection, PartialSyncModeValue::default());

        let value = SyncModeValue {
            sync_mode: SyncMode::Incremental,
            destination_sync_mode: DestinationSyncMode::Append,
        };
        configured.select(value);

        assert_eq!(configured.selection.complete(), Some(value));
    }
}
