//! English / Tamil display strings.
//!
//! Lookups never fail: a key with no entry in the requested locale resolves
//! to the key itself so untranslated labels stay visible.

pub mod dictionary;
pub mod locale;
pub mod translator;

pub use dictionary::Dictionary;
pub use locale::Locale;
pub use translator::Translator;

use thiserror::Error;

/// Errors raised while building translation catalogs
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Invalid catalog for locale {locale}: {source}")]
    Catalog {
        locale: Locale,
        #[source]
        source: toml::de::Error,
    },

    #[error("Locale {locale} is missing {} key(s): {}", missing.len(), missing.join(", "))]
    MissingKeys { locale: Locale, missing: Vec<String> },
}
