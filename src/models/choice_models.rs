use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Choice {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub poll_id: ObjectId,
}
