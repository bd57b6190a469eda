use serde::{Deserialize, Serialize};

use crate::core::CompatibilityBand;
use crate::i18n::Locale;
use crate::models::domain::ProfileRecord;

/// Profile as listed, with its compatibility label in the active locale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    #[serde(flatten)]
    pub profile: ProfileRecord,
    pub compatibility_band: CompatibilityBand,
    pub compatibility_label: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub profiles: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Single resolved label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub key: String,
    pub locale: Locale,
    pub text: String,
}

/// Active display language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleResponse {
    pub locale: Locale,
}
