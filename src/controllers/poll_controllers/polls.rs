use axum::{extract::State, Json};

use crate::controllers::poll_controllers::models::PollResponse;
use crate::core::polls;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_all_polls(State(state): State<AppState>) -> AppResult<Json<Vec<PollResponse>>> {
    let polls = polls::list_polls(state.store.as_ref()).await?;

    Ok(Json(polls.into_iter().map(PollResponse::from).collect()))
}
