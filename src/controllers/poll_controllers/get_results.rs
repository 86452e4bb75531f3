use axum::{
    extract::{Path, State},
    Json,
};

use crate::controllers::poll_controllers::models::PollResultResponse;
use crate::core::results;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_results(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<PollResultResponse>> {
    let result = results::poll_result(state.store.as_ref(), &poll_id).await?;

    Ok(Json(PollResultResponse::from(result)))
}
