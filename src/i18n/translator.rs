use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use super::{Dictionary, Locale};

/// Translation context handed to whatever renders user-visible text.
///
/// Owns the shared dictionary and the active locale. The locale lives in an
/// atomic cell so one `Translator` can be shared across worker threads and
/// switched from any of them.
#[derive(Debug)]
pub struct Translator {
    dictionary: Arc<Dictionary>,
    active: AtomicU8,
}

impl Translator {
    pub fn new(dictionary: Arc<Dictionary>, locale: Locale) -> Self {
        Self {
            dictionary,
            active: AtomicU8::new(locale as u8),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Display text for `key` under an explicit locale; never fails
    pub fn resolve<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        self.dictionary.resolve(key, locale)
    }

    /// Display text for `key` under the active locale
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.resolve(key, self.locale())
    }

    pub fn locale(&self) -> Locale {
        Locale::from_u8(self.active.load(Ordering::Acquire))
    }

    /// Switch the active locale. Setting the current locale again is a no-op.
    pub fn set_locale(&self, locale: Locale) {
        let previous = Locale::from_u8(self.active.swap(locale as u8, Ordering::AcqRel));
        if previous != locale {
            tracing::info!(from = %previous, to = %locale, "active locale changed");
        }
    }
}
