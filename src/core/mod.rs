// Core query pipeline exports
pub mod compatibility;
pub mod engine;
pub mod filters;
pub mod pagination;
pub mod sorting;

pub use compatibility::CompatibilityBand;
pub use engine::{QueryEngine, QueryPage};
pub use filters::{matches_categorical, matches_preset, matches_query, matches_ranges, matches_search_term};
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE};
pub use sorting::{compare_profiles, sort_profiles};
