// Local Crate Imports
use crate::{
    i18n::localized,
    sync_modes::{DestinationSyncMode, SyncMode, SyncModeOption, SyncModeValue},
};

// Public API ==========================================================================================================

/// Separates the source half of a combination's label from the destination half
pub const DELIMITER: &str = " | ";

/// A dropdown entry: some payload annotated with the text to display for it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LabeledOption<T> {
    pub label: String,
    pub value: T,
}

#[must_use]
pub fn sync_mode_message_id(sync_mode: SyncMode) -> String {
    format!("sync-mode-{}", sync_mode.as_str())
}

#[must_use]
pub fn destination_sync_mode_message_id(destination_sync_mode: DestinationSyncMode) -> String {
    format!("destination-sync-mode-{}", destination_sync_mode.as_str())
}

#[must_use]
pub fn sync_mode_label(sync_mode: SyncMode) -> String {
    localized(&sync_mode_message_id(sync_mode))
}

#[must_use]
pub fn destination_sync_mode_label(destination_sync_mode: DestinationSyncMode) -> String {
    localized(&destination_sync_mode_message_id(destination_sync_mode))
}

/// The display label for one combination: the localized source mode, then the localized destination mode
#[must_use]
pub fn label(value: SyncModeValue) -> String {
    format!(
        "{}{DELIMITER}{}",
        sync_mode_label(value.sync_mode),
        destination_sync_mode_label(value.destination_sync_mode)
    )
}

/// Annotates each option with its display label. One entry out per entry in, in the same order, with the underlying
/// value untouched; duplicate or otherwise odd combinations supplied by the caller pass straight through
#[must_use]
pub fn labeled_options(options: &[SyncModeOption]) -> Vec<LabeledOption<SyncModeValue>> {
    options
        .iter()
        .map(|&SyncModeOption { value }| LabeledOption {
            label: label(value),
            value,
        })
        .collect()
}

// Unit Tests ==========================================================================================================
