use async_graphql::{Context, Object, Result, ID};
use mongodb::bson::oid::ObjectId;

use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::repos::directors::{self, CreateDirectorData, UpdateDirectorData};

use super::types::Director;

#[derive(Default)]
pub struct DirectorQuery;

#[Object]
impl DirectorQuery {
    /// Get a single director by ID
    async fn director(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Director>> {
        let state = ctx.data::<AppState>()?;
        let director_id = ObjectId::parse_str(id.as_str()).gql_err("Invalid director ID")?;

        let doc = directors::find_by_id(&state.db, director_id)
            .await
            .map_err(GqlError::from)?;

        Ok(doc.map(Director::from))
    }

    async fn directors(&self, ctx: &Context<'_>) -> Result<Vec<Director>> {
        let state = ctx.data::<AppState>()?;
        let docs = directors::list(&state.db).await.map_err(GqlError::from)?;

        Ok(docs.into_iter().map(Director::from).collect())
    }
}

#[derive(Default)]
pub struct DirectorMutation;

#[Object]
impl DirectorMutation {
    async fn add_director(&self, ctx: &Context<'_>, name: String, age: i32) -> Result<Director> {
        let state = ctx.data::<AppState>()?;

        let doc = directors::create(&state.db, CreateDirectorData { name, age })
            .await
            .map_err(GqlError::from)?;

        Ok(doc.into())
    }

    /// Delete a director; returns the removed director, or null if none
    /// matched. Dependent movies keep their directorId.
    async fn delete_director(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Director>> {
        let state = ctx.data::<AppState>()?;
        let director_id = ObjectId::parse_str(id.as_str()).gql_err("Invalid director ID")?;

        let doc = directors::remove(&state.db, director_id)
            .await
            .map_err(GqlError::from)?;

        Ok(doc.map(Director::from))
    }

    /// Update a director's name and age; returns the post-update director,
    /// or null if none matched.
    async fn update_director(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        age: i32,
    ) -> Result<Option<Director>> {
        let state = ctx.data::<AppState>()?;
        let director_id = ObjectId::parse_str(id.as_str()).gql_err("Invalid director ID")?;

        let doc = directors::update(&state.db, director_id, UpdateDirectorData { name, age })
            .await
            .map_err(GqlError::from)?;

        Ok(doc.map(Director::from))
    }
}
