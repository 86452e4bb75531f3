use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Poll {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub expire_at: DateTime<Utc>,
}

impl Poll {
    /// A poll is expired once its expiry is strictly before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expire_at < now
    }
}
