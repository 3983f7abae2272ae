use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::error::Result;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, IndexModel};

use crate::db::Db;
use crate::models::MovieDoc;

const COLLECTION: &str = "movies";

fn collection(db: &Db) -> Collection<MovieDoc> {
    db.collection(COLLECTION)
}

#[derive(Debug, Clone)]
pub struct CreateMovieData {
    pub name: String,
    pub genre: String,
    pub rate: Option<i32>,
    pub watched: bool,
    pub director_id: Option<ObjectId>,
}

#[derive(Debug, Clone)]
pub struct UpdateMovieData {
    pub name: String,
    pub genre: String,
    pub rate: Option<i32>,
    pub watched: bool,
    pub director_id: Option<ObjectId>,
}

pub async fn list(db: &Db) -> Result<Vec<MovieDoc>> {
    collection(db).find(doc! {}).await?.try_collect().await
}

pub async fn find_by_id(db: &Db, id: ObjectId) -> Result<Option<MovieDoc>> {
    collection(db).find_one(doc! { "_id": id }).await
}

/// All movies referencing the given director, in collection order.
pub async fn list_by_director(db: &Db, director_id: ObjectId) -> Result<Vec<MovieDoc>> {
    collection(db)
        .find(doc! { "directorId": director_id })
        .await?
        .try_collect()
        .await
}

/// Insert a new movie with a freshly generated id and return it.
///
/// The referenced director (if any) is not checked for existence.
pub async fn create(db: &Db, data: CreateMovieData) -> Result<MovieDoc> {
    let movie = MovieDoc {
        id: ObjectId::new(),
        name: data.name,
        genre: data.genre,
        watched: data.watched,
        rate: data.rate,
        director_id: data.director_id,
    };

    collection(db).insert_one(&movie).await?;

    Ok(movie)
}

/// Replace the listed fields and return the post-update document, or `None`
/// when no movie matches the id. Absent optionals leave the stored fields
/// untouched.
pub async fn update(db: &Db, id: ObjectId, data: UpdateMovieData) -> Result<Option<MovieDoc>> {
    collection(db)
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": set_document(&data) })
        .return_document(ReturnDocument::After)
        .await
}

/// Remove a movie and return the removed document, or `None` when absent.
pub async fn remove(db: &Db, id: ObjectId) -> Result<Option<MovieDoc>> {
    collection(db).find_one_and_delete(doc! { "_id": id }).await
}

/// Index on `directorId` backing the director→movies scan. Idempotent,
/// called once at startup.
pub async fn ensure_indexes(db: &Db) -> Result<()> {
    let index = IndexModel::builder().keys(doc! { "directorId": 1 }).build();

    collection(db).create_index(index).await?;

    Ok(())
}

fn set_document(data: &UpdateMovieData) -> Document {
    let mut set = doc! {
        "name": data.name.as_str(),
        "genre": data.genre.as_str(),
        "watched": data.watched,
    };

    if let Some(rate) = data.rate {
        set.insert("rate", rate);
    }
    if let Some(director_id) = data.director_id {
        set.insert("directorId", director_id);
    }

    set
}
