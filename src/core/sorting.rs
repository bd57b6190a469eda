use std::cmp::Ordering;

use crate::models::{ProfileRecord, SortKey};

/// Ordering of two profiles under a single sort key
#[inline]
pub fn compare_profiles(a: &ProfileRecord, b: &ProfileRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Recent => b.joined_date.cmp(&a.joined_date),
        SortKey::Compatibility => b.compatibility.cmp(&a.compatibility),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Age => a.age.cmp(&b.age),
    }
}

/// Stable sort; ties keep their incoming order
pub fn sort_profiles(profiles: &mut [&ProfileRecord], key: SortKey) {
    profiles.sort_by(|a, b| compare_profiles(a, b, key));
}
