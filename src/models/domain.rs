use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Gender as recorded at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "Female")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Subscription tier attached to a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Yellow,
    Green,
    Blue,
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Yellow => "yellow",
            SubscriptionTier::Green => "green",
            SubscriptionTier::Blue => "blue",
        }
    }
}

impl Default for SubscriptionTier {
    fn default() -> Self {
        SubscriptionTier::Yellow
    }
}

/// Moderation status of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Active,
    Pending,
    Blocked,
}

impl ProfileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStatus::Active => "active",
            ProfileStatus::Pending => "pending",
            ProfileStatus::Blocked => "blocked",
        }
    }
}

/// One candidate listing in the matrimony directory
///
/// Records are produced by registration or admin creation and are read-only
/// for everything in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub location: String,
    pub education: String,
    pub occupation: String,
    #[serde(rename = "subscriptionCategory", default)]
    pub subscription: SubscriptionTier,
    pub status: ProfileStatus,
    /// Static compatibility percentage, 0 to 100
    #[serde(default)]
    pub compatibility: u8,
    pub joined_date: NaiveDate,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default)]
    pub height_cm: Option<u16>,
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
    pub about_me: Option<String>,
}

impl ProfileRecord {
    /// Minimal record with the optional descriptive fields left empty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u8,
        gender: Gender,
        joined_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            gender,
            location: String::new(),
            education: String::new(),
            occupation: String::new(),
            subscription: SubscriptionTier::default(),
            status: ProfileStatus::Active,
            compatibility: 0,
            joined_date,
            last_active: None,
            height_cm: None,
            marital_status: None,
            religion: None,
            caste: None,
            mother_tongue: None,
            diet: None,
            family_type: None,
            family_status: None,
            family_values: None,
            smoking: None,
            drinking: None,
            physical_status: None,
            about_me: None,
        }
    }
}
