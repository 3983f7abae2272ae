use async_graphql::dataloader::Loader;
use infra::{db::Db, models::DirectorDoc, repos::directors};
use mongodb::bson::oid::ObjectId;
use std::{collections::HashMap, future::Future, sync::Arc};

// DirectorLoader - batch load directors by ID for Movie.director resolution
#[derive(Clone)]
pub struct DirectorLoader {
    db: Db,
}

impl DirectorLoader {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl Loader<ObjectId> for DirectorLoader {
    type Value = DirectorDoc;
    type Error = Arc<mongodb::error::Error>;

    fn load(
        &self,
        keys: &[ObjectId],
    ) -> impl Future<Output = std::result::Result<HashMap<ObjectId, Self::Value>, Self::Error>> + Send
    {
        let db = self.db.clone();
        let ids: Vec<ObjectId> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let docs = directors::list_by_ids(&db, &ids).await.map_err(Arc::new)?;

            Ok(docs.into_iter().map(|d| (d.id, d)).collect())
        }
    }
}
