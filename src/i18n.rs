//! Internationalization support using fluent

use i18n_embed::{
    DesktopLanguageRequester, LanguageLoader,
    fluent::{FluentLanguageLoader, fluent_language_loader},
};
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let loader = fluent_language_loader!();
    loader
        .load_fallback_language(&Localizations)
        .expect("Failed to load fallback language");
    loader
});

/// Initialize i18n with the given language preferences
pub fn init(requested_languages: &[unic_langid::LanguageIdentifier]) {
    if let Err(e) = i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, requested_languages) {
        tracing::warn!("Failed to load requested languages: {}", e);
    }
}

/// The user's preferred languages, as reported by the desktop environment
#[must_use]
pub fn requested_languages() -> Vec<unic_langid::LanguageIdentifier> {
    DesktopLanguageRequester::requested_languages()
}

/// Look up a message by a key that's only known at runtime. Keys with no message in the loaded bundles render as the
/// raw key itself
#[must_use]
pub fn localized(key: &str) -> String {
    if LANGUAGE_LOADER.has(key) {
        LANGUAGE_LOADER.get(key)
    } else {
        key.to_owned()
    }
}

/// Get a localized string by key
#[macro_export]
macro_rules! fl {
    ($key:expr) => {
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $key)
    };
    ($key:expr, $($arg:tt)*) => {
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $key, $($arg)*)
    };
}

// Unit Tests ==========================================================================================================
