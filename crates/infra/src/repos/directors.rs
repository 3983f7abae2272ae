use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::error::Result;
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use crate::db::Db;
use crate::models::DirectorDoc;

const COLLECTION: &str = "directors";

fn collection(db: &Db) -> Collection<DirectorDoc> {
    db.collection(COLLECTION)
}

#[derive(Debug, Clone)]
pub struct CreateDirectorData {
    pub name: String,
    pub age: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateDirectorData {
    pub name: String,
    pub age: i32,
}

pub async fn list(db: &Db) -> Result<Vec<DirectorDoc>> {
    collection(db).find(doc! {}).await?.try_collect().await
}

pub async fn find_by_id(db: &Db, id: ObjectId) -> Result<Option<DirectorDoc>> {
    collection(db).find_one(doc! { "_id": id }).await
}

/// Batch lookup for the director dataloader.
pub async fn list_by_ids(db: &Db, ids: &[ObjectId]) -> Result<Vec<DirectorDoc>> {
    collection(db)
        .find(doc! { "_id": { "$in": ids.to_vec() } })
        .await?
        .try_collect()
        .await
}

/// Insert a new director with a freshly generated id and return it.
pub async fn create(db: &Db, data: CreateDirectorData) -> Result<DirectorDoc> {
    let director = DirectorDoc {
        id: ObjectId::new(),
        name: data.name,
        age: data.age,
    };

    collection(db).insert_one(&director).await?;

    Ok(director)
}

/// Replace name/age and return the post-update document, or `None` when no
/// director matches the id.
pub async fn update(db: &Db, id: ObjectId, data: UpdateDirectorData) -> Result<Option<DirectorDoc>> {
    collection(db)
        .find_one_and_update(
            doc! { "_id": id },
            doc! { "$set": { "name": data.name.as_str(), "age": data.age } },
        )
        .return_document(ReturnDocument::After)
        .await
}

/// Remove a director and return the removed document, or `None` when absent.
///
/// Movies referencing the director are left in place.
pub async fn remove(db: &Db, id: ObjectId) -> Result<Option<DirectorDoc>> {
    collection(db).find_one_and_delete(doc! { "_id": id }).await
}
