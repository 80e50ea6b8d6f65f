pub mod catalog;
pub mod i18n;
pub mod labels;
pub mod sync_modes;
