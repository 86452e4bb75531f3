use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::controllers::poll_controllers::models::VoteResponse;
use crate::core::votes;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn cast_vote(
    Path(choice_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<VoteResponse>)> {
    let vote = votes::record_vote(state.store.as_ref(), &choice_id).await?;

    Ok((StatusCode::CREATED, Json(VoteResponse::from(vote))))
}
