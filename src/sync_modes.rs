// External Crate Imports
use serde::{Deserialize, Serialize};

// Public API ==========================================================================================================

/// How records are read from the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    FullRefresh,
    Incremental,
}

impl SyncMode {
    pub const ALL: [Self; 2] = [Self::FullRefresh, Self::Incremental];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullRefresh => "full_refresh",
            Self::Incremental => "incremental",
        }
    }
}

/// How records are written into the destination.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationSyncMode {
    Append,
    Overwrite,
    AppendDedup,
}

impl DestinationSyncMode {
    pub const ALL: [Self; 3] = [Self::Append, Self::Overwrite, Self::AppendDedup];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Overwrite => "overwrite",
            Self::AppendDedup => "append_dedup",
        }
    }
}

/// One complete source + destination combination.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct SyncModeValue {
    pub sync_mode: SyncMode,
    pub destination_sync_mode: DestinationSyncMode,
}

/// A selection that's still being made: either half can be missing until the user has picked a full combination
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct PartialSyncModeValue {
    pub sync_mode: Option<SyncMode>,
    pub destination_sync_mode: Option<DestinationSyncMode>,
}

impl PartialSyncModeValue {
    #[must_use]
    pub fn complete(self) -> Option<SyncModeValue> {
        Some(SyncModeValue {
            sync_mode: self.sync_mode?,
            destination_sync_mode: self.destination_sync_mode?,
        })
    }
}

impl From<SyncModeValue> for PartialSyncModeValue {
    fn from(value: SyncModeValue) -> Self {
        Self {
            sync_mode: Some(value.sync_mode),
            destination_sync_mode: Some(value.destination_sync_mode),
        }
    }
}

/// An entry in the list of combinations offered to the user. Callers supply these; nothing in this crate creates,
/// filters, or deduplicates them on the way to the screen
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct SyncModeOption {
    pub value: SyncModeValue,
}

/// Every combination the product allows, in display order. Streams and destinations narrow this list down, they never
/// extend it
pub const SUPPORTED_COMBINATIONS: [SyncModeValue; 4] = [
    SyncModeValue {
        sync_mode: SyncMode::FullRefresh,
        destination_sync_mode: DestinationSyncMode::Overwrite,
    },
    SyncModeValue {
        sync_mode: SyncMode::FullRefresh,
        destination_sync_mode: DestinationSyncMode::Append,
    },
    SyncModeValue {
        sync_mode: SyncMode::Incremental,
        destination_sync_mode: DestinationSyncMode::Append,
    },
    SyncModeValue {
        sync_mode: SyncMode::Incremental,
        destination_sync_mode: DestinationSyncMode::AppendDedup,
    },
];

// Unit Tests ==========================================================================================================
