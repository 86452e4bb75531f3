use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::models::vote_models::Vote;
use crate::store::PollStore;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::parse_object_id;

/// Records an anonymous vote for a choice. There is no per-voter dedup:
/// unlimited repeat voting is intended behavior, not an oversight.
pub async fn record_vote(store: &dyn PollStore, choice_id: &str) -> AppResult<Vote> {
    let choice_id = parse_object_id(choice_id, "choice")?;

    let choice = store
        .find_choice(choice_id)
        .await?
        .ok_or_else(|| AppError::ChoiceNotFound(choice_id.to_hex()))?;

    // A choice whose poll has vanished is reported as a missing poll
    // rather than letting the expiry check blow up.
    let poll = store
        .find_poll(choice.poll_id)
        .await?
        .ok_or_else(|| AppError::PollNotFound(choice.poll_id.to_hex()))?;

    if poll.is_expired(Utc::now()) {
        return Err(AppError::PollExpired(
            "Poll is closed, voting is no longer allowed".to_string(),
        ));
    }

    let vote = Vote {
        id: ObjectId::new(),
        choice_id,
        created_at: Utc::now(),
    };
    store.insert_vote(&vote).await?;

    Ok(vote)
}
