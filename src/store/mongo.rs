use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use crate::models::choice_models::Choice;
use crate::models::poll_models::Poll;
use crate::models::vote_models::Vote;
use crate::store::PollStore;
use crate::utils::error::AppResult;

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn polls(&self) -> Collection<Poll> {
        self.db.collection::<Poll>("polls")
    }

    fn choices(&self) -> Collection<Choice> {
        self.db.collection::<Choice>("choices")
    }

    fn votes(&self) -> Collection<Vote> {
        self.db.collection::<Vote>("votes")
    }
}

#[async_trait]
impl PollStore for MongoStore {
    async fn insert_poll(&self, poll: &Poll) -> AppResult<ObjectId> {
        self.polls().insert_one(poll).await?;
        Ok(poll.id)
    }

    async fn find_poll(&self, id: ObjectId) -> AppResult<Option<Poll>> {
        Ok(self.polls().find_one(doc! { "_id": id }).await?)
    }

    async fn list_polls(&self) -> AppResult<Vec<Poll>> {
        let cursor = self.polls().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_choice(&self, choice: &Choice) -> AppResult<ObjectId> {
        self.choices().insert_one(choice).await?;
        Ok(choice.id)
    }

    async fn find_choice(&self, id: ObjectId) -> AppResult<Option<Choice>> {
        Ok(self.choices().find_one(doc! { "_id": id }).await?)
    }

    async fn list_choices(&self, poll_id: ObjectId) -> AppResult<Vec<Choice>> {
        let cursor = self.choices().find(doc! { "poll_id": poll_id }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_vote(&self, vote: &Vote) -> AppResult<ObjectId> {
        self.votes().insert_one(vote).await?;
        Ok(vote.id)
    }

    async fn count_votes(&self, choice_id: ObjectId) -> AppResult<u64> {
        Ok(self
            .votes()
            .count_documents(doc! { "choice_id": choice_id })
            .await?)
    }
}
