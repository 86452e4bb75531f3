use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::results::PollResult;
use crate::models::choice_models::Choice;
use crate::models::poll_models::Poll;
use crate::models::vote_models::Vote;
use crate::utils::time::format_expire_at;

#[derive(Deserialize, Debug)]
pub struct CreatePollRequest {
    #[serde(default)]
    pub title: String,
    /// Distinguishes an absent field (rejected) from an empty string
    /// (thirty-day default).
    pub expire_at: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CreateChoiceRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poll_id: String,
}

#[derive(Serialize, Debug)]
pub struct PollResponse {
    pub id: String,
    pub title: String,
    pub expire_at: String,
    pub is_open: bool,
}

impl From<Poll> for PollResponse {
    fn from(poll: Poll) -> Self {
        let is_open = !poll.is_expired(Utc::now());
        Self {
            id: poll.id.to_hex(),
            title: poll.title,
            expire_at: format_expire_at(poll.expire_at),
            is_open,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ChoiceResponse {
    pub id: String,
    pub title: String,
    pub poll_id: String,
}

impl From<Choice> for ChoiceResponse {
    fn from(choice: Choice) -> Self {
        Self {
            id: choice.id.to_hex(),
            title: choice.title,
            poll_id: choice.poll_id.to_hex(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct VoteResponse {
    pub id: String,
    pub choice_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Vote> for VoteResponse {
    fn from(vote: Vote) -> Self {
        Self {
            id: vote.id.to_hex(),
            choice_id: vote.choice_id.to_hex(),
            created_at: vote.created_at,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct LeadingChoiceResponse {
    pub title: String,
    pub votes: u64,
}

#[derive(Serialize, Debug)]
pub struct PollResultResponse {
    pub id: String,
    pub title: String,
    pub expire_at: String,
    /// `null` for a poll that has no choices yet.
    pub result: Option<LeadingChoiceResponse>,
}

impl From<PollResult> for PollResultResponse {
    fn from(result: PollResult) -> Self {
        Self {
            id: result.poll.id.to_hex(),
            title: result.poll.title,
            expire_at: format_expire_at(result.poll.expire_at),
            result: result.leading.map(|leading| LeadingChoiceResponse {
                title: leading.title,
                votes: leading.votes,
            }),
        }
    }
}
