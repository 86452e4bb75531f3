use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::choice_models::Choice;
use crate::models::poll_models::Poll;
use crate::models::vote_models::Vote;
use crate::utils::error::AppResult;

pub mod mongo;

#[cfg(test)]
pub mod memory;

/// Document-store contract the core works against. Handlers receive an
/// implementation through `AppState` rather than a process-wide handle.
///
/// The store enforces nothing beyond per-document atomicity; every
/// invariant (non-empty titles, duplicate choices, expiry gates) lives in
/// the core. No method retries: a driver fault comes back as
/// `StorageFailure` and ends the request.
#[async_trait]
pub trait PollStore: Send + Sync {
    async fn insert_poll(&self, poll: &Poll) -> AppResult<ObjectId>;
    async fn find_poll(&self, id: ObjectId) -> AppResult<Option<Poll>>;
    /// All polls, unfiltered, in store-native order.
    async fn list_polls(&self) -> AppResult<Vec<Poll>>;

    async fn insert_choice(&self, choice: &Choice) -> AppResult<ObjectId>;
    async fn find_choice(&self, id: ObjectId) -> AppResult<Option<Choice>>;
    async fn list_choices(&self, poll_id: ObjectId) -> AppResult<Vec<Choice>>;

    async fn insert_vote(&self, vote: &Vote) -> AppResult<ObjectId>;
    async fn count_votes(&self, choice_id: ObjectId) -> AppResult<u64>;
}
