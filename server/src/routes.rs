use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use meeting::SessionGrant;
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Deserialize)]
pub struct JoinParams {
    owner_contact: Option<String>,
}

pub async fn join_conference_handler(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
    Query(params): Query<JoinParams>,
) -> Result<Json<SessionGrant>, AppError> {
    let grant = state
        .validator
        .evaluate(&room, params.owner_contact.as_deref())
        .await?;

    Ok(Json(grant))
}
