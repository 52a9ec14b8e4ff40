//! Route table and request handlers. Handlers stay thin: decode, delegate
//! to [crate::service::PokemonService], map misses onto [ApiError].

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::model::{
    CompareRequest, ComparisonResult, FilterRequest, PokemonDetail, PokemonSummary,
};
use crate::server::error::ApiError;
use crate::service::PokemonService;

/// The fixed element type roster exposed by `/api/pokemon/types`.
pub const TYPE_NAMES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

const DEFAULT_LIST_LIMIT: u32 = 20;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PokemonService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/pokemon/list", get(list_pokemon))
        .route("/api/pokemon/search", get(search_pokemon))
        .route("/api/pokemon/types", get(list_types))
        .route("/api/pokemon/type/:type_name", get(pokemon_by_type))
        .route("/api/pokemon/abilities", get(list_abilities))
        .route("/api/pokemon/ability/:ability", get(pokemon_by_ability))
        .route("/api/pokemon/filter", get(filter_pokemon))
        .route("/api/pokemon/compare", post(compare_pokemon))
        .route("/api/pokemon/:name_or_id", get(get_pokemon))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "pokearena-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn get_pokemon(
    State(state): State<AppState>,
    Path(name_or_id): Path<String>,
) -> Result<Json<PokemonDetail>, ApiError> {
    tracing::info!(pokemon = %name_or_id, "fetching pokemon");
    let detail = state.service.pokemon_detail(&name_or_id).await?;
    detail
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Pokemon '{name_or_id}' not found")))
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    name: String,
}

async fn search_pokemon(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PokemonSummary>>, ApiError> {
    if params.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Search term required".to_string()));
    }
    Ok(Json(state.service.search(&params.name).await?))
}

async fn list_types() -> Json<Vec<&'static str>> {
    Json(TYPE_NAMES.to_vec())
}

async fn pokemon_by_type(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Result<Json<Vec<PokemonSummary>>, ApiError> {
    tracing::info!(type_name = %type_name, "fetching pokemon by type");
    let summaries = state.service.pokemon_by_type(&type_name).await?;
    if summaries.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No Pokemon found for type '{type_name}'"
        )));
    }
    Ok(Json(summaries))
}

#[derive(Debug, Default, Deserialize)]
struct PageParams {
    limit: Option<u32>,
    offset: Option<u32>,
}

async fn list_pokemon(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<PokemonSummary>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let offset = params.offset.unwrap_or(0);
    tracing::info!(limit, offset, "fetching pokemon list");
    Ok(Json(state.service.pokemon_list(limit, offset).await?))
}

async fn compare_pokemon(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ComparisonResult>, ApiError> {
    if request.pokemon1.trim().is_empty() || request.pokemon2.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Both Pokemon names are required".to_string(),
        ));
    }
    tracing::info!(
        pokemon1 = %request.pokemon1,
        pokemon2 = %request.pokemon2,
        "comparing pokemon"
    );
    let result = state
        .service
        .compare(&request.pokemon1, &request.pokemon2)
        .await?;
    Ok(Json(result))
}

async fn pokemon_by_ability(
    State(state): State<AppState>,
    Path(ability): Path<String>,
) -> Result<Json<Vec<PokemonSummary>>, ApiError> {
    tracing::info!(ability = %ability, "fetching pokemon by ability");
    let summaries = state.service.pokemon_by_ability(&ability).await?;
    if summaries.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No Pokemon found for ability '{ability}'"
        )));
    }
    Ok(Json(summaries))
}

async fn list_abilities(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    tracing::info!("fetching all abilities");
    let abilities = state.service.all_abilities().await?;
    if abilities.is_empty() {
        return Err(ApiError::NotFound("No abilities found".to_string()));
    }
    Ok(Json(abilities))
}

/// Query-string form of [FilterRequest]: abilities arrive as one
/// comma-separated parameter.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterParams {
    min_height: Option<u32>,
    max_height: Option<u32>,
    min_weight: Option<u32>,
    max_weight: Option<u32>,
    min_hp: Option<u32>,
    max_hp: Option<u32>,
    min_attack: Option<u32>,
    max_attack: Option<u32>,
    min_defense: Option<u32>,
    max_defense: Option<u32>,
    min_special_attack: Option<u32>,
    max_special_attack: Option<u32>,
    min_special_defense: Option<u32>,
    max_special_defense: Option<u32>,
    min_speed: Option<u32>,
    max_speed: Option<u32>,
    min_total: Option<u32>,
    max_total: Option<u32>,
    #[serde(rename = "type")]
    type_name: Option<String>,
    abilities: Option<String>,
}

impl From<FilterParams> for FilterRequest {
    fn from(params: FilterParams) -> Self {
        let abilities = params.abilities.map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });
        FilterRequest {
            min_height: params.min_height,
            max_height: params.max_height,
            min_weight: params.min_weight,
            max_weight: params.max_weight,
            min_hp: params.min_hp,
            max_hp: params.max_hp,
            min_attack: params.min_attack,
            max_attack: params.max_attack,
            min_special_attack: params.min_special_attack,
            max_special_attack: params.max_special_attack,
            min_special_defense: params.min_special_defense,
            max_special_defense: params.max_special_defense,
            min_defense: params.min_defense,
            max_defense: params.max_defense,
            min_speed: params.min_speed,
            max_speed: params.max_speed,
            min_total: params.min_total,
            max_total: params.max_total,
            type_name: params.type_name,
            abilities,
        }
    }
}

async fn filter_pokemon(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<PokemonSummary>>, ApiError> {
    let filter = FilterRequest::from(params);
    tracing::info!(?filter, "filtering pokemon");
    let summaries = state.service.filter_pokemon(&filter).await?;
    if summaries.is_empty() {
        return Err(ApiError::NotFound(
            "No Pokemon found matching the filter criteria".to_string(),
        ));
    }
    Ok(Json(summaries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_params_split_abilities_on_commas() {
        let params = FilterParams {
            abilities: Some("static, lightning rod ,".to_string()),
            ..FilterParams::default()
        };
        let filter = FilterRequest::from(params);
        assert_eq!(
            filter.abilities,
            Some(vec!["static".to_string(), "lightning rod".to_string()])
        );
    }

    #[test]
    fn type_roster_is_complete() {
        assert_eq!(TYPE_NAMES.len(), 18);
        assert!(TYPE_NAMES.contains(&"fairy"));
    }
}
