use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::choice_models::Choice;
use crate::models::poll_models::Poll;
use crate::models::vote_models::Vote;
use crate::store::PollStore;
use crate::utils::error::{AppError, AppResult};

/// In-memory stand-in for the document store. Collections are plain `Vec`s
/// so store-native order is insertion order, which the aggregator's
/// tie-break tests rely on.
#[derive(Default)]
pub struct MemoryStore {
    polls: Mutex<Vec<Poll>>,
    choices: Mutex<Vec<Choice>>,
    votes: Mutex<Vec<Vote>>,
    fail: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent store call fail, to exercise the
    /// `StorageFailure` path.
    pub fn fail_all(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> AppResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::StorageFailure("simulated outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PollStore for MemoryStore {
    async fn insert_poll(&self, poll: &Poll) -> AppResult<ObjectId> {
        self.check()?;
        self.polls.lock().unwrap().push(poll.clone());
        Ok(poll.id)
    }

    async fn find_poll(&self, id: ObjectId) -> AppResult<Option<Poll>> {
        self.check()?;
        Ok(self
            .polls
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_polls(&self) -> AppResult<Vec<Poll>> {
        self.check()?;
        Ok(self.polls.lock().unwrap().clone())
    }

    async fn insert_choice(&self, choice: &Choice) -> AppResult<ObjectId> {
        self.check()?;
        self.choices.lock().unwrap().push(choice.clone());
        Ok(choice.id)
    }

    async fn find_choice(&self, id: ObjectId) -> AppResult<Option<Choice>> {
        self.check()?;
        Ok(self
            .choices
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list_choices(&self, poll_id: ObjectId) -> AppResult<Vec<Choice>> {
        self.check()?;
        Ok(self
            .choices
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.poll_id == poll_id)
            .cloned()
            .collect())
    }

    async fn insert_vote(&self, vote: &Vote) -> AppResult<ObjectId> {
        self.check()?;
        self.votes.lock().unwrap().push(vote.clone());
        Ok(vote.id)
    }

    async fn count_votes(&self, choice_id: ObjectId) -> AppResult<u64> {
        self.check()?;
        Ok(self
            .votes
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.choice_id == choice_id)
            .count() as u64)
    }
}
