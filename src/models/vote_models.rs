use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Vote {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub choice_id: ObjectId,

    pub created_at: DateTime<Utc>,
}
