//! Sri Matrimony - profile browsing core for the Sri Sodeswari matrimony portal
//!
//! Two utilities back the presentation layer:
//! - a translation resolver for English / Tamil labels, and
//! - a profile query engine that filters, sorts and paginates the in-memory
//!   profile directory.

pub mod access;
pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use access::{capabilities, Capabilities, Role};
pub use self::core::{CompatibilityBand, QueryEngine, QueryPage};
pub use i18n::{Dictionary, Locale, Translator};
pub use models::{ProfileQuery, ProfileRecord, SortKey};
pub use services::ProfileDirectory;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let directory = ProfileDirectory::bundled().unwrap();
        let page = QueryEngine::default().query(directory.records(), &ProfileQuery::new());
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_pages, 2);
    }
}
