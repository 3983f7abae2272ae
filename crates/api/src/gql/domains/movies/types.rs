use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use mongodb::bson::oid::ObjectId;

use crate::gql::domains::directors::Director;
use crate::gql::error::GqlError;
use crate::gql::loaders::DirectorLoader;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Movie {
    pub id: ID,
    pub name: String,
    pub genre: String,
    pub watched: bool,
    pub rate: Option<i32>,
    // The raw reference stays internal; clients read the `director` field.
    #[graphql(skip)]
    pub director_id: Option<ObjectId>,
}

#[ComplexObject]
impl Movie {
    /// The movie's director. Null when the movie has no directorId or the
    /// referenced document no longer exists.
    async fn director(&self, ctx: &Context<'_>) -> Result<Option<Director>> {
        let Some(director_id) = self.director_id else {
            return Ok(None);
        };

        let loader = ctx.data::<DataLoader<DirectorLoader>>()?;
        let doc = loader
            .load_one(director_id)
            .await
            .map_err(GqlError::from)?;

        Ok(doc.map(Director::from))
    }
}

impl From<infra::models::MovieDoc> for Movie {
    fn from(doc: infra::models::MovieDoc) -> Self {
        Self {
            id: doc.id.to_hex().into(),
            name: doc.name,
            genre: doc.genre,
            watched: doc.watched,
            rate: doc.rate,
            director_id: doc.director_id,
        }
    }
}
