use std::collections::{BTreeMap, HashMap};

use super::{I18nError, Locale};

const EN_CATALOG: &str = include_str!("../../locales/en.toml");
const TA_CATALOG: &str = include_str!("../../locales/ta.toml");

/// Per-locale key to display-text tables. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl Dictionary {
    /// Build from the catalogs compiled into the crate
    pub fn builtin() -> Result<Self, I18nError> {
        Self::from_sources(&[(Locale::En, EN_CATALOG), (Locale::Ta, TA_CATALOG)])
    }

    /// Build from TOML catalogs of flat `key = "text"` pairs
    pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self, I18nError> {
        let mut tables = HashMap::with_capacity(sources.len());

        for (locale, source) in sources {
            let table: HashMap<String, String> =
                toml::from_str(source).map_err(|source| I18nError::Catalog {
                    locale: *locale,
                    source,
                })?;
            tracing::debug!(locale = %locale, keys = table.len(), "translation catalog loaded");
            tables.insert(*locale, table);
        }

        Ok(Self { tables })
    }

    /// Entry for `key` under `locale`, or `key` itself when the entry is
    /// absent or empty.
    pub fn resolve<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        self.lookup(key, locale).unwrap_or(key)
    }

    /// Entry for `key` under `locale` with no fallback
    pub fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Whole table for a locale, ordered by key
    pub fn entries(&self, locale: Locale) -> BTreeMap<&str, &str> {
        self.tables
            .get(&locale)
            .map(|table| {
                table
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self, locale: Locale) -> usize {
        self.tables.get(&locale).map_or(0, HashMap::len)
    }

    /// Keys present in `from` but missing from `to`, sorted
    pub fn missing_keys(&self, from: Locale, to: Locale) -> Vec<String> {
        let Some(source) = self.tables.get(&from) else {
            return Vec::new();
        };
        let target = self.tables.get(&to);

        let mut missing: Vec<String> = source
            .keys()
            .filter(|key| target.map_or(true, |t| !t.contains_key(*key)))
            .cloned()
            .collect();
        missing.sort();
        missing
    }

    /// Missing keys per locale, measured against the union of all locales.
    /// Locales with full coverage are omitted.
    pub fn parity_report(&self) -> BTreeMap<Locale, Vec<String>> {
        let mut report = BTreeMap::new();

        for target in Locale::ALL {
            let mut missing: Vec<String> = Locale::ALL
                .iter()
                .filter(|source| **source != target)
                .flat_map(|source| self.missing_keys(*source, target))
                .collect();
            missing.sort();
            missing.dedup();

            if !missing.is_empty() {
                report.insert(target, missing);
            }
        }

        report
    }

    /// Fail when any locale lacks a key another locale defines
    pub fn ensure_parity(&self) -> Result<(), I18nError> {
        match self.parity_report().into_iter().next() {
            None => Ok(()),
            Some((locale, missing)) => Err(I18nError::MissingKeys { locale, missing }),
        }
    }
}
