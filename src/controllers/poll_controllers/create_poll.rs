use axum::{extract::State, http::StatusCode, Json};

use crate::controllers::poll_controllers::models::{CreatePollRequest, PollResponse};
use crate::core::polls;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn create_poll(
    State(state): State<AppState>,
    Json(payload): Json<CreatePollRequest>,
) -> AppResult<(StatusCode, Json<PollResponse>)> {
    let poll = polls::create_poll(
        state.store.as_ref(),
        &payload.title,
        payload.expire_at.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(PollResponse::from(poll))))
}
