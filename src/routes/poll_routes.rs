use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::poll_controllers::{
    cast_vote, create_choice, create_poll, get_choices, get_results, polls,
};
use crate::state::AppState;

pub fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/poll", post(create_poll::create_poll).get(polls::get_all_polls))
        .route("/poll/:poll_id/choice", get(get_choices::get_choices))
        .route("/poll/:poll_id/result", get(get_results::get_results))
        .route("/choice", post(create_choice::create_choice))
        .route("/choice/:choice_id/vote", post(cast_vote::cast_vote))
}
