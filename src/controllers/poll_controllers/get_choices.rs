use axum::{
    extract::{Path, State},
    Json,
};

use crate::controllers::poll_controllers::models::ChoiceResponse;
use crate::core::polls;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_choices(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ChoiceResponse>>> {
    let choices = polls::list_choices(state.store.as_ref(), &poll_id).await?;

    Ok(Json(choices.into_iter().map(ChoiceResponse::from).collect()))
}
