use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use mongodb::bson::oid::ObjectId;

use crate::gql::domains::movies::Movie;
use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::repos::movies;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Director {
    pub id: ID,
    pub name: String,
    pub age: i32,
}

#[ComplexObject]
impl Director {
    /// Movies referencing this director, in collection order. Empty when no
    /// movie points at it.
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let state = ctx.data::<AppState>()?;
        let director_id = ObjectId::parse_str(self.id.as_str()).gql_err("Invalid director ID")?;

        let docs = movies::list_by_director(&state.db, director_id)
            .await
            .map_err(GqlError::from)?;

        Ok(docs.into_iter().map(Movie::from).collect())
    }
}

impl From<infra::models::DirectorDoc> for Director {
    fn from(doc: infra::models::DirectorDoc) -> Self {
        Self {
            id: doc.id.to_hex().into(),
            name: doc.name,
            age: doc.age,
        }
    }
}
