//! Community petitions for signs, fencing and wildlife overpasses.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use roadsafe_core::{CreatePetitionRequest, Petition};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::state::AppState;

pub async fn create_petition(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreatePetitionRequest>,
) -> Result<(StatusCode, Json<Petition>), ApiError> {
    let petition = Petition::from_request(Uuid::new_v4().to_string(), req, Utc::now())?;
    state.add_petition(petition.clone());
    tracing::info!(
        "Petition {} for {:?} in '{}'",
        petition.id,
        petition.types,
        petition.area
    );
    Ok((StatusCode::CREATED, Json(petition)))
}

/// List petitions, newest first.
pub async fn list_petitions(State(state): State<Arc<AppState>>) -> Json<Vec<Petition>> {
    Json(state.get_petitions())
}
