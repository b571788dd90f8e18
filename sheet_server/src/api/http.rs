//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use sheet_core::{Character, CharacterId, CharacterService, DamageRequest, HealRequest, TempHpRequest};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::ApiError;

type AppState = Arc<CharacterService>;

/// Create all HTTP routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/characters", get(list_characters))
        .route("/characters/{id}", get(get_character))
        .route("/characters/{id}/damage", post(deal_damage))
        .route("/characters/{id}/heal", post(heal))
        .route("/characters/{id}/temp-hp", post(set_temp_hp))
}

/// Routes bound to a service, with request tracing and optional CORS.
pub fn router(service: Arc<CharacterService>, cors: Option<CorsLayer>) -> Router {
    let mut router = routes()
        .with_state(service)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors {
        router = router.layer(cors);
    }
    router
}

async fn health() -> &'static str {
    "OK"
}

async fn list_characters(State(service): State<AppState>) -> Result<Json<Vec<Character>>, ApiError> {
    let characters = service.list()?;
    Ok(Json(characters))
}

async fn get_character(
    State(service): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Character>, ApiError> {
    let character = service.get(CharacterId(id))?;
    Ok(Json(character))
}

// =============================================================================
// Hit point operations
// =============================================================================

async fn deal_damage(
    State(service): State<AppState>,
    Path(id): Path<u32>,
    body: Result<Json<DamageRequest>, JsonRejection>,
) -> Result<Json<Character>, ApiError> {
    let Json(request) = body?;
    let (character, _) = service.deal_damage(CharacterId(id), &request)?;
    Ok(Json(character))
}

async fn heal(
    State(service): State<AppState>,
    Path(id): Path<u32>,
    body: Result<Json<HealRequest>, JsonRejection>,
) -> Result<Json<Character>, ApiError> {
    let Json(request) = body?;
    let character = service.heal(CharacterId(id), &request)?;
    Ok(Json(character))
}

async fn set_temp_hp(
    State(service): State<AppState>,
    Path(id): Path<u32>,
    body: Result<Json<TempHpRequest>, JsonRejection>,
) -> Result<Json<Character>, ApiError> {
    let Json(request) = body?;
    let character = service.set_temp_hp(CharacterId(id), &request)?;
    Ok(Json(character))
}
