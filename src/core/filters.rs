use chrono::{DateTime, Duration, Utc};

use crate::models::{CategoricalFilters, Preset, ProfileQuery, ProfileRecord, RangeFilter};

/// Select values that mean "no constraint"
const SENTINELS: [&str; 2] = ["all", "any"];

/// Minimum score for the high-compatibility preset
pub const HIGH_COMPATIBILITY_THRESHOLD: u8 = 85;

/// Returns the trimmed filter value if it constrains anything
#[inline]
pub fn active_value(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    if value.is_empty() || SENTINELS.iter().any(|s| value.eq_ignore_ascii_case(s)) {
        None
    } else {
        Some(value)
    }
}

#[inline]
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Lowercase value code with whitespace, `_` and `-` runs collapsed to one `-`
pub fn normalize_code(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Case-insensitive substring match against name, location and occupation
#[inline]
pub fn matches_search_term(profile: &ProfileRecord, term: Option<&str>) -> bool {
    let term = match term.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return true,
    };

    [
        profile.name.as_str(),
        profile.location.as_str(),
        profile.occupation.as_str(),
    ]
    .iter()
    .any(|field| contains_ignore_case(field, &term))
}

/// Checks one categorical attribute; a missing attribute fails an active filter
#[inline]
fn matches_field(actual: Option<&str>, wanted: Option<&str>) -> bool {
    match active_value(wanted) {
        None => true,
        Some(wanted) => actual.map_or(false, |actual| normalize_code(actual) == normalize_code(wanted)),
    }
}

/// Exact equality on normalised codes for every active categorical filter
pub fn matches_categorical(profile: &ProfileRecord, filters: &CategoricalFilters) -> bool {
    matches_field(Some(profile.gender.as_str()), filters.gender.as_deref())
        && matches_field(Some(profile.subscription.as_str()), filters.subscription.as_deref())
        && matches_field(Some(profile.status.as_str()), filters.status.as_deref())
        && matches_field(profile.marital_status.as_deref(), filters.marital_status.as_deref())
        && matches_field(profile.religion.as_deref(), filters.religion.as_deref())
        && matches_field(profile.caste.as_deref(), filters.caste.as_deref())
        && matches_field(profile.mother_tongue.as_deref(), filters.mother_tongue.as_deref())
        && matches_field(profile.diet.as_deref(), filters.diet.as_deref())
        && matches_field(Some(profile.education.as_str()), filters.education.as_deref())
        && matches_field(Some(profile.occupation.as_str()), filters.occupation.as_deref())
        && matches_field(Some(profile.location.as_str()), filters.location.as_deref())
        && matches_field(profile.family_type.as_deref(), filters.family_type.as_deref())
        && matches_field(profile.family_status.as_deref(), filters.family_status.as_deref())
        && matches_field(profile.family_values.as_deref(), filters.family_values.as_deref())
        && matches_field(profile.smoking.as_deref(), filters.smoking.as_deref())
        && matches_field(profile.drinking.as_deref(), filters.drinking.as_deref())
        && matches_field(profile.physical_status.as_deref(), filters.physical_status.as_deref())
}

#[inline]
fn matches_range(value: Option<u16>, range: Option<&RangeFilter>) -> bool {
    match range {
        Some(range) if range.is_active() => value.map_or(false, |v| range.contains(v)),
        _ => true,
    }
}

/// Inclusive age and height bounds
#[inline]
pub fn matches_ranges(profile: &ProfileRecord, query: &ProfileQuery) -> bool {
    matches_range(Some(profile.age as u16), query.age.as_ref())
        && matches_range(profile.height_cm, query.height_cm.as_ref())
}

/// Favourites-view shortcuts. Time-based presets need a reference instant.
pub fn matches_preset(
    profile: &ProfileRecord,
    preset: Option<Preset>,
    as_of: Option<DateTime<Utc>>,
) -> bool {
    match (preset, as_of) {
        (None, _) => true,
        (Some(Preset::HighCompatibility), _) => {
            profile.compatibility >= HIGH_COMPATIBILITY_THRESHOLD
        }
        (Some(Preset::Recent), Some(now)) => {
            profile.joined_date > (now - Duration::days(7)).date_naive()
        }
        (Some(Preset::Active), Some(now)) => profile
            .last_active
            .map_or(false, |seen| seen > now - Duration::hours(24)),
        (Some(_), None) => true,
    }
}

/// Logical AND of every active filter in the query
#[inline]
pub fn matches_query(profile: &ProfileRecord, query: &ProfileQuery) -> bool {
    matches_search_term(profile, query.search.as_deref())
        && matches_categorical(profile, &query.filters)
        && matches_ranges(profile, query)
        && matches_preset(profile, query.preset, query.as_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, SubscriptionTier};
    use chrono::{NaiveDate, TimeZone};

    fn create_test_profile(name: &str, age: u8, gender: Gender) -> ProfileRecord {
        let mut profile = ProfileRecord::new(
            "test_user",
            name,
            age,
            gender,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        );
        profile.location = "Chennai".to_string();
        profile.occupation = "Software Engineer".to_string();
        profile.height_cm = Some(165);
        profile.religion = Some("Hindu".to_string());
        profile
    }

    #[test]
    fn test_search_matches_occupation() {
        let profile = create_test_profile("Karthik M", 28, Gender::Male);

        assert!(matches_search_term(&profile, Some("eng")));
        assert!(matches_search_term(&profile, Some("CHEN")));
        assert!(!matches_search_term(&profile, Some("madurai")));
    }

    #[test]
    fn test_blank_search_is_inactive() {
        let profile = create_test_profile("Karthik M", 28, Gender::Male);

        assert!(matches_search_term(&profile, None));
        assert!(matches_search_term(&profile, Some("")));
        assert!(matches_search_term(&profile, Some("   ")));
    }

    #[test]
    fn test_categorical_case_insensitive() {
        let profile = create_test_profile("Priya", 27, Gender::Female);
        let filters = CategoricalFilters {
            gender: Some("Female".to_string()),
            religion: Some("hindu".to_string()),
            ..Default::default()
        };

        assert!(matches_categorical(&profile, &filters));
    }

    #[test]
    fn test_sentinel_values_are_inactive() {
        let profile = create_test_profile("Priya", 27, Gender::Female);
        let filters = CategoricalFilters {
            gender: Some("all".to_string()),
            subscription: Some("".to_string()),
            status: Some("ANY".to_string()),
            ..Default::default()
        };

        assert!(matches_categorical(&profile, &filters));
    }

    #[test]
    fn test_missing_optional_field_fails_active_filter() {
        let profile = create_test_profile("Priya", 27, Gender::Female);
        let filters = CategoricalFilters {
            diet: Some("vegetarian".to_string()),
            ..Default::default()
        };

        assert!(!matches_categorical(&profile, &filters));
    }

    #[test]
    fn test_value_codes_match_display_wording() {
        let mut profile = create_test_profile("Priya", 27, Gender::Female);
        profile.marital_status = Some("Never Married".to_string());
        profile.diet = Some("non_vegetarian".to_string());
        let filters = CategoricalFilters {
            marital_status: Some("never-married".to_string()),
            diet: Some("Non-Vegetarian".to_string()),
            ..Default::default()
        };

        assert!(matches_categorical(&profile, &filters));
        assert_eq!(normalize_code("  Upper  Middle "), "upper-middle");
    }

    #[test]
    fn test_family_and_lifestyle_filters() {
        let mut profile = create_test_profile("Priya", 27, Gender::Female);
        profile.family_type = Some("joint".to_string());
        profile.family_values = Some("traditional".to_string());
        profile.smoking = Some("no".to_string());
        profile.physical_status = Some("normal".to_string());

        let matching = CategoricalFilters {
            family_type: Some("Joint".to_string()),
            family_values: Some("traditional".to_string()),
            smoking: Some("no".to_string()),
            physical_status: Some("normal".to_string()),
            ..Default::default()
        };
        assert!(matches_categorical(&profile, &matching));

        let nuclear = CategoricalFilters {
            family_type: Some("nuclear".to_string()),
            ..Default::default()
        };
        assert!(!matches_categorical(&profile, &nuclear));

        // no drinking or family status on record
        let drinking = CategoricalFilters {
            drinking: Some("no".to_string()),
            ..Default::default()
        };
        assert!(!matches_categorical(&profile, &drinking));
        let status = CategoricalFilters {
            family_status: Some("any".to_string()),
            ..Default::default()
        };
        assert!(matches_categorical(&profile, &status));
    }

    #[test]
    fn test_subscription_filter() {
        let mut profile = create_test_profile("Priya", 27, Gender::Female);
        profile.subscription = SubscriptionTier::Green;
        let filters = CategoricalFilters {
            subscription: Some("yellow".to_string()),
            ..Default::default()
        };

        assert!(!matches_categorical(&profile, &filters));
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let profile = create_test_profile("Priya", 27, Gender::Female);

        assert!(matches_ranges(&profile, &ProfileQuery::new().with_age(27, 30)));
        assert!(matches_ranges(&profile, &ProfileQuery::new().with_age(21, 27)));
        assert!(!matches_ranges(&profile, &ProfileQuery::new().with_age(28, 30)));
        assert!(!matches_ranges(&profile, &ProfileQuery::new().with_age(21, 26)));
    }

    #[test]
    fn test_inverted_range_ignored() {
        let profile = create_test_profile("Priya", 27, Gender::Female);

        assert!(matches_ranges(&profile, &ProfileQuery::new().with_age(40, 20)));
    }

    #[test]
    fn test_height_range_requires_height() {
        let mut profile = create_test_profile("Priya", 27, Gender::Female);
        let query = ProfileQuery::new().with_height(150, 170);
        assert!(matches_ranges(&profile, &query));

        profile.height_cm = None;
        assert!(!matches_ranges(&profile, &query));
    }

    #[test]
    fn test_presets() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let mut profile = create_test_profile("Priya", 27, Gender::Female);
        profile.compatibility = 85;
        profile.last_active = Some(now - Duration::hours(2));

        assert!(matches_preset(&profile, Some(Preset::HighCompatibility), None));
        assert!(matches_preset(&profile, Some(Preset::Recent), Some(now)));
        assert!(matches_preset(&profile, Some(Preset::Active), Some(now)));

        profile.compatibility = 84;
        profile.joined_date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        profile.last_active = Some(now - Duration::days(3));

        assert!(!matches_preset(&profile, Some(Preset::HighCompatibility), None));
        assert!(!matches_preset(&profile, Some(Preset::Recent), Some(now)));
        assert!(!matches_preset(&profile, Some(Preset::Active), Some(now)));
        assert!(matches_preset(&profile, Some(Preset::Active), None));
    }
}
