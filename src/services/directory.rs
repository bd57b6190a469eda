use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::models::ProfileRecord;

const BUNDLED_PROFILES: &str = include_str!("../../data/profiles.json");

/// Minimum age accepted at registration
pub const MIN_AGE: u8 = 18;

/// Errors that can occur while loading the profile directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
}

/// Read-only, in-memory profile collection
#[derive(Debug, Clone, Default)]
pub struct ProfileDirectory {
    records: Arc<Vec<ProfileRecord>>,
}

impl ProfileDirectory {
    /// Build a directory, rejecting records that break registration rules
    pub fn new(records: Vec<ProfileRecord>) -> Result<Self, DirectoryError> {
        validate(&records)?;
        Ok(Self {
            records: Arc::new(records),
        })
    }

    /// Mock dataset compiled into the crate
    pub fn bundled() -> Result<Self, DirectoryError> {
        Self::from_json(BUNDLED_PROFILES)
    }

    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let records: Vec<ProfileRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loading profiles from {}", path.as_ref().display());
        Self::from_json(&json)
    }

    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ProfileRecord> {
        self.records.iter().find(|profile| profile.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(records: &[ProfileRecord]) -> Result<(), DirectoryError> {
    let mut seen = HashSet::with_capacity(records.len());

    for profile in records {
        let invalid = |reason: String| DirectoryError::InvalidRecord {
            id: profile.id.clone(),
            reason,
        };

        if profile.age < MIN_AGE {
            return Err(invalid(format!("age {} is below {}", profile.age, MIN_AGE)));
        }
        if profile.compatibility > 100 {
            return Err(invalid(format!(
                "compatibility {} exceeds 100",
                profile.compatibility
            )));
        }
        if !seen.insert(profile.id.as_str()) {
            return Err(invalid("duplicate id".to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use chrono::NaiveDate;

    fn record(id: &str, age: u8) -> ProfileRecord {
        ProfileRecord::new(
            id,
            format!("User {}", id),
            age,
            Gender::Female,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let directory = ProfileDirectory::bundled().unwrap();
        assert_eq!(directory.len(), 8);
        assert_eq!(directory.get("2").map(|p| p.name.as_str()), Some("Karthik M"));
        assert!(directory.get("999").is_none());
    }

    #[test]
    fn test_rejects_underage() {
        let err = ProfileDirectory::new(vec![record("1", 17)]).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidRecord { ref id, .. } if id == "1"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = ProfileDirectory::new(vec![record("1", 25), record("1", 30)]).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidRecord { .. }));
    }

    #[test]
    fn test_rejects_bad_compatibility() {
        let mut profile = record("1", 25);
        profile.compatibility = 101;
        assert!(ProfileDirectory::new(vec![profile]).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = ProfileDirectory::from_json("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, DirectoryError::JsonError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ProfileDirectory::from_path("/nonexistent/profiles.json").unwrap_err();
        assert!(matches!(err, DirectoryError::IoError(_)));
    }
}
