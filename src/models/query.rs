use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` bound used by the age and height filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub min: u16,
    pub max: u16,
}

impl RangeFilter {
    pub fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// A range whose lower bound exceeds its upper bound constrains nothing
    pub fn is_active(&self) -> bool {
        self.min <= self.max
    }

    #[inline]
    pub fn contains(&self, value: u16) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Exact-match filters over categorical profile attributes.
///
/// Values are compared as normalised codes, so `Never Married` and
/// `never-married` are equal. `None`, blank strings and the `all` / `any`
/// select sentinels leave the attribute unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoricalFilters {
    pub gender: Option<String>,
    pub subscription: Option<String>,
    pub status: Option<String>,
    pub marital_status: Option<String>,
    pub religion: Option<String>,
    pub caste: Option<String>,
    pub mother_tongue: Option<String>,
    pub diet: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub location: Option<String>,
    pub family_type: Option<String>,
    pub family_status: Option<String>,
    pub family_values: Option<String>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub physical_status: Option<String>,
}

/// Shortcut filters offered by the favourites view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Compatibility of 85 or more
    HighCompatibility,
    /// Joined within the last seven days
    Recent,
    /// Seen within the last day
    Active,
}

impl Preset {
    /// Parse a preset name; unknown names yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high-compatibility" => Some(Preset::HighCompatibility),
            "recent" => Some(Preset::Recent),
            "active" => Some(Preset::Active),
            _ => None,
        }
    }
}

/// Ordering applied to the filtered profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recently joined first
    #[default]
    Recent,
    /// Highest compatibility first
    Compatibility,
    /// Name, ascending ordinal comparison
    Name,
    /// Youngest first
    Age,
}

impl SortKey {
    /// Parse a sort key, falling back to [`SortKey::Recent`] for anything unrecognised
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "compatibility" => SortKey::Compatibility,
            "name" => SortKey::Name,
            "age" => SortKey::Age,
            _ => SortKey::Recent,
        }
    }
}

/// Search, filter, sort and page state for one list view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileQuery {
    pub search: Option<String>,
    pub filters: CategoricalFilters,
    pub age: Option<RangeFilter>,
    pub height_cm: Option<RangeFilter>,
    pub preset: Option<Preset>,
    pub sort: SortKey,
    /// 1-indexed; zero is treated as the first page
    pub page: u32,
    /// Reference instant for the time-based presets
    pub as_of: Option<DateTime<Utc>>,
}

impl ProfileQuery {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_age(mut self, min: u16, max: u16) -> Self {
        self.age = Some(RangeFilter::new(min, max));
        self
    }

    pub fn with_height(mut self, min: u16, max: u16) -> Self {
        self.height_cm = Some(RangeFilter::new(min, max));
        self
    }

    pub fn with_preset(mut self, preset: Preset, as_of: DateTime<Utc>) -> Self {
        self.preset = Some(preset);
        self.as_of = Some(as_of);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_fallback() {
        assert_eq!(SortKey::parse_lossy("Name"), SortKey::Name);
        assert_eq!(SortKey::parse_lossy("compatibility"), SortKey::Compatibility);
        assert_eq!(SortKey::parse_lossy("distance"), SortKey::Recent);
        assert_eq!(SortKey::parse_lossy(""), SortKey::Recent);
    }

    #[test]
    fn test_inverted_range_is_inactive() {
        assert!(RangeFilter::new(21, 35).is_active());
        assert!(RangeFilter::new(30, 30).is_active());
        assert!(!RangeFilter::new(35, 21).is_active());
    }

    #[test]
    fn test_unknown_preset() {
        assert_eq!(Preset::parse("high-compatibility"), Some(Preset::HighCompatibility));
        assert_eq!(Preset::parse("popular"), None);
    }
}
