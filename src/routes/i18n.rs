use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::i18n::Locale;
use crate::models::{ErrorResponse, LocaleResponse, SetLocaleRequest, TranslationResponse};
use crate::routes::profiles::AppState;

/// Configure translation and locale routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/locale", web::get().to(get_locale))
        .route("/locale", web::put().to(set_locale))
        .route("/i18n/{locale}", web::get().to(get_catalog))
        .route("/i18n/{locale}/{key}", web::get().to(translate));
}

fn unsupported_locale(value: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Unsupported locale".to_string(),
        message: format!("Locale must be one of: en, ta (got {})", value),
        status_code: 400,
    })
}

/// GET /api/v1/locale
async fn get_locale(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(LocaleResponse {
        locale: state.translator.locale(),
    })
}

/// Switch the active locale
///
/// PUT /api/v1/locale
///
/// Request body:
/// ```json
/// { "locale": "ta" }
/// ```
async fn set_locale(
    state: web::Data<AppState>,
    req: web::Json<SetLocaleRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for set_locale request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let Some(locale) = Locale::parse(&req.locale) else {
        return unsupported_locale(&req.locale);
    };

    state.translator.set_locale(locale);
    HttpResponse::Ok().json(LocaleResponse { locale })
}

/// Whole catalog for one locale
///
/// GET /api/v1/i18n/{locale}
async fn get_catalog(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let raw = path.into_inner();
    let Some(locale) = Locale::parse(&raw) else {
        return unsupported_locale(&raw);
    };

    HttpResponse::Ok().json(state.translator.dictionary().entries(locale))
}

/// Resolve a single key; unknown keys come back unchanged
///
/// GET /api/v1/i18n/{locale}/{key}
async fn translate(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (raw, key) = path.into_inner();
    let Some(locale) = Locale::parse(&raw) else {
        return unsupported_locale(&raw);
    };

    let text = state.translator.resolve(&key, locale).to_string();
    HttpResponse::Ok().json(TranslationResponse { key, locale, text })
}
