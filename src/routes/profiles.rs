use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;

use crate::access::{capabilities, Role};
use crate::config::Settings;
use crate::core::{CompatibilityBand, QueryEngine};
use crate::error::StartupError;
use crate::i18n::{Dictionary, Translator};
use crate::models::{ErrorResponse, HealthResponse, ProfileListRequest, ProfileSummary};
use crate::services::ProfileDirectory;

/// Header carrying the caller's role, set by the authentication layer
pub const ROLE_HEADER: &str = "X-Actor-Role";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: ProfileDirectory,
    pub engine: QueryEngine,
    pub translator: Arc<Translator>,
}

impl AppState {
    /// Build the dictionary, directory and engine described by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self, StartupError> {
        let dictionary = Dictionary::builtin()?;
        for (locale, missing) in dictionary.parity_report() {
            tracing::warn!(
                "Locale {} is missing {} translation key(s): {}",
                locale,
                missing.len(),
                missing.join(", ")
            );
        }
        if settings.i18n.strict_parity {
            dictionary.ensure_parity()?;
        }

        let directory = match &settings.directory.seed_path {
            Some(path) => ProfileDirectory::from_path(path)?,
            None => ProfileDirectory::bundled()?,
        };

        Ok(Self {
            directory,
            engine: QueryEngine::new(settings.query.page_size),
            translator: Arc::new(Translator::new(
                Arc::new(dictionary),
                settings.i18n.default_locale,
            )),
        })
    }
}

/// Configure all profile-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profiles", web::get().to(list_profiles))
        .route("/profiles/{id}", web::get().to(get_profile));
}

fn actor_role(req: &HttpRequest) -> Option<Role> {
    req.headers()
        .get(ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(Role::parse)
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        profiles: state.directory.len(),
    })
}

/// List profiles endpoint
///
/// GET /api/v1/profiles?search=eng&gender=female&ageMin=21&ageMax=30&sort=compatibility&page=1
///
/// Subscription and status filters are honoured for admins only.
async fn list_profiles(
    state: web::Data<AppState>,
    params: web::Query<Vec<(String, String)>>,
    req: HttpRequest,
) -> impl Responder {
    let role = actor_role(&req);
    let request = ProfileListRequest::from_pairs(params.into_inner());
    let query = capabilities(role).restrict(request.into_query(chrono::Utc::now()));

    tracing::info!(
        "Listing profiles: role={:?}, sort={:?}, page={}",
        role,
        query.sort,
        query.page
    );

    let locale = state.translator.locale();
    let page = state
        .engine
        .query(state.directory.records(), &query)
        .map(|profile| {
            let band = CompatibilityBand::from_score(profile.compatibility);
            ProfileSummary {
                compatibility_label: state
                    .translator
                    .resolve(band.translation_key(), locale)
                    .to_string(),
                compatibility_band: band,
                profile,
            }
        });

    tracing::debug!(
        "Returning {} of {} matching profiles (page {}/{})",
        page.items.len(),
        page.total_matches,
        page.current_page,
        page.total_pages
    );

    HttpResponse::Ok().json(page)
}

/// Single profile endpoint
///
/// GET /api/v1/profiles/{id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.directory.get(&id) {
        Some(profile) => HttpResponse::Ok().json(profile),
        None => {
            tracing::info!("Profile not found: {}", id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: format!("No profile with id {}", id),
                status_code: 404,
            })
        }
    }
}
