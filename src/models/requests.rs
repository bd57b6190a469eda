use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::query::{CategoricalFilters, Preset, ProfileQuery, RangeFilter, SortKey};

/// Query string for the profile list endpoint.
///
/// Numeric fields arrive as raw strings so that malformed values simply
/// leave their filter inactive instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileListRequest {
    #[serde(default, alias = "q")]
    pub search: Option<String>,
    #[serde(default, alias = "lookingFor")]
    pub gender: Option<String>,
    #[serde(default)]
    pub subscription: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub caste: Option<String>,
    #[serde(default)]
    pub mother_tongue: Option<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub family_type: Option<String>,
    #[serde(default)]
    pub family_status: Option<String>,
    #[serde(default)]
    pub family_values: Option<String>,
    #[serde(default)]
    pub smoking: Option<String>,
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(default)]
    pub physical_status: Option<String>,
    #[serde(default)]
    pub age_min: Option<String>,
    #[serde(default)]
    pub age_max: Option<String>,
    #[serde(default)]
    pub height_min: Option<String>,
    #[serde(default)]
    pub height_max: Option<String>,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

fn parse_number<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Range from optional bounds; a single bound leaves the other side open
fn parse_range(min: Option<&str>, max: Option<&str>) -> Option<RangeFilter> {
    match (parse_number::<u16>(min), parse_number::<u16>(max)) {
        (None, None) => None,
        (min, max) => Some(RangeFilter::new(min.unwrap_or(0), max.unwrap_or(u16::MAX))),
    }
}

/// "bride" / "groom" from the search form map onto gender values
fn normalize_gender(value: Option<String>) -> Option<String> {
    value.map(|v| match v.trim().to_ascii_lowercase().as_str() {
        "bride" => "female".to_string(),
        "groom" => "male".to_string(),
        _ => v,
    })
}

impl ProfileListRequest {
    /// Collect decoded query-string pairs. A repeated parameter keeps its
    /// first value and unknown parameters are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut request = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "search" | "q" => &mut request.search,
                "gender" | "lookingFor" => &mut request.gender,
                "subscription" => &mut request.subscription,
                "status" => &mut request.status,
                "maritalStatus" => &mut request.marital_status,
                "religion" => &mut request.religion,
                "caste" => &mut request.caste,
                "motherTongue" => &mut request.mother_tongue,
                "diet" => &mut request.diet,
                "education" => &mut request.education,
                "occupation" => &mut request.occupation,
                "location" => &mut request.location,
                "familyType" => &mut request.family_type,
                "familyStatus" => &mut request.family_status,
                "familyValues" => &mut request.family_values,
                "smoking" => &mut request.smoking,
                "drinking" => &mut request.drinking,
                "physicalStatus" => &mut request.physical_status,
                "ageMin" => &mut request.age_min,
                "ageMax" => &mut request.age_max,
                "heightMin" => &mut request.height_min,
                "heightMax" => &mut request.height_max,
                "preset" => &mut request.preset,
                "sort" => &mut request.sort,
                "page" => &mut request.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        request
    }

    /// Build the engine query; `as_of` anchors the time-based presets
    pub fn into_query(self, as_of: DateTime<Utc>) -> ProfileQuery {
        let page = parse_number::<i64>(self.page.as_deref())
            .map(|p| p.clamp(1, u32::MAX as i64) as u32)
            .unwrap_or(1);

        ProfileQuery {
            age: parse_range(self.age_min.as_deref(), self.age_max.as_deref()),
            height_cm: parse_range(self.height_min.as_deref(), self.height_max.as_deref()),
            preset: self.preset.as_deref().and_then(Preset::parse),
            sort: self
                .sort
                .as_deref()
                .map(SortKey::parse_lossy)
                .unwrap_or_default(),
            page,
            as_of: Some(as_of),
            search: self.search,
            filters: CategoricalFilters {
                gender: normalize_gender(self.gender),
                subscription: self.subscription,
                status: self.status,
                marital_status: self.marital_status,
                religion: self.religion,
                caste: self.caste,
                mother_tongue: self.mother_tongue,
                diet: self.diet,
                education: self.education,
                occupation: self.occupation,
                location: self.location,
                family_type: self.family_type,
                family_status: self.family_status,
                family_values: self.family_values,
                smoking: self.smoking,
                drinking: self.drinking,
                physical_status: self.physical_status,
            },
        }
    }
}

/// Request to switch the active display language
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetLocaleRequest {
    #[validate(length(min = 2, max = 16))]
    pub locale: String,
}
