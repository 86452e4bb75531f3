use axum::{extract::State, http::StatusCode, Json};

use crate::controllers::poll_controllers::models::{ChoiceResponse, CreateChoiceRequest};
use crate::core::polls;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn create_choice(
    State(state): State<AppState>,
    Json(payload): Json<CreateChoiceRequest>,
) -> AppResult<(StatusCode, Json<ChoiceResponse>)> {
    let choice =
        polls::create_choice(state.store.as_ref(), &payload.title, &payload.poll_id).await?;

    Ok((StatusCode::CREATED, Json(ChoiceResponse::from(choice))))
}
