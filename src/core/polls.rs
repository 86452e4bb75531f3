use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::models::choice_models::Choice;
use crate::models::poll_models::Poll;
use crate::store::PollStore;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::{parse_object_id, validate_choice_input, validate_poll_input};

/// Creates a poll with a normalized expiry and returns the persisted
/// document.
pub async fn create_poll(
    store: &dyn PollStore,
    title: &str,
    expire_at: Option<&str>,
) -> AppResult<Poll> {
    let expire_at = validate_poll_input(title, expire_at, Utc::now())?;

    let poll = Poll {
        id: ObjectId::new(),
        title: title.to_string(),
        expire_at,
    };
    store.insert_poll(&poll).await?;

    Ok(poll)
}

pub async fn list_polls(store: &dyn PollStore) -> AppResult<Vec<Poll>> {
    store.list_polls().await
}

/// Creates a choice under a poll. The checks run in a fixed order because
/// callers observe it through the error kind: unknown poll first, then
/// duplicate title, then expiry.
pub async fn create_choice(
    store: &dyn PollStore,
    title: &str,
    poll_id: &str,
) -> AppResult<Choice> {
    validate_choice_input(title, poll_id)?;
    let poll_id = parse_object_id(poll_id, "poll")?;

    let poll = store
        .find_poll(poll_id)
        .await?
        .ok_or_else(|| AppError::PollNotFound(poll_id.to_hex()))?;

    let existing = store.list_choices(poll_id).await?;
    if existing.iter().any(|c| c.title == title) {
        return Err(AppError::DuplicateChoice(format!(
            "Choice \"{}\" already exists for this poll",
            title
        )));
    }

    if poll.is_expired(Utc::now()) {
        return Err(AppError::PollExpired(
            "Poll is closed, choices can no longer be added".to_string(),
        ));
    }

    let choice = Choice {
        id: ObjectId::new(),
        title: title.to_string(),
        poll_id,
    };
    store.insert_choice(&choice).await?;

    Ok(choice)
}

pub async fn list_choices(store: &dyn PollStore, poll_id: &str) -> AppResult<Vec<Choice>> {
    let poll_id = parse_object_id(poll_id, "poll")?;

    store
        .find_poll(poll_id)
        .await?
        .ok_or_else(|| AppError::PollNotFound(poll_id.to_hex()))?;

    store.list_choices(poll_id).await
}
