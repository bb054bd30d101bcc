use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use pl_analytics::{find_possible_duplicates, CharFrequencies, ThresholdSettings};
use pl_core::Person;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn people_routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/char_frequencies", get(email_char_frequencies))
        .route("/people/duplicates", get(possible_duplicate_emails))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_people(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let people = state.people.list_people().await?;
    Ok(Json(json!({ "people": people })))
}

async fn email_char_frequencies(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let people = state.people.list_people().await?;
    let emails = email_addresses(&people);
    let frequencies = CharFrequencies::count_all(&emails, Some(&state.ignore)).sorted();
    Ok(Json(json!({ "frequencies": frequencies })))
}

/// Optional threshold overrides for the duplicates endpoint. Both default
/// to 1 (one edit, one character of length difference).
#[derive(Debug, Default, Deserialize)]
struct DuplicateParams {
    distance: Option<usize>,
    length: Option<usize>,
}

async fn possible_duplicate_emails(
    State(state): State<AppState>,
    Query(params): Query<DuplicateParams>,
) -> Result<Json<Value>, ApiError> {
    let settings = ThresholdSettings {
        distance_threshold: params.distance.unwrap_or(state.settings.distance_threshold),
        length_threshold: params.length.unwrap_or(state.settings.length_threshold),
    };
    let people = state.people.list_people().await?;
    let emails = email_addresses(&people);
    let groups = find_possible_duplicates(&emails, &settings);
    Ok(Json(json!({ "possibleDuplicates": groups })))
}

fn email_addresses(people: &[Person]) -> Vec<String> {
    people
        .iter()
        .filter_map(|p| p.email_address.clone())
        .collect()
}
