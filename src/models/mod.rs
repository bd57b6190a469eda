// Model exports
pub mod domain;
pub mod query;
pub mod requests;
pub mod responses;

pub use domain::{Gender, ProfileRecord, ProfileStatus, SubscriptionTier};
pub use query::{CategoricalFilters, Preset, ProfileQuery, RangeFilter, SortKey};
pub use requests::{ProfileListRequest, SetLocaleRequest};
pub use responses::{ErrorResponse, HealthResponse, LocaleResponse, ProfileSummary, TranslationResponse};
