// Route exports
pub mod errors;
pub mod i18n;
pub mod profiles;

use actix_web::web;

pub use errors::{handle_json_payload_error, handle_query_payload_error};
pub use profiles::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(profiles::configure)
            .configure(i18n::configure),
    );
}

/// Payload extractors that answer malformed input with the JSON error envelope
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error));
}
