use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A movie document as stored in the `movies` collection.
///
/// Field names on the wire follow the collection's existing layout:
/// `_id` and camelCase (`directorId`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub genre: String,
    pub watched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<i32>,
    // Dangling references are allowed; nothing cascades on director removal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_id: Option<ObjectId>,
}

/// A director document as stored in the `directors` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub age: i32,
}
