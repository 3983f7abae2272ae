use async_graphql::{Context, Object, Result, ID};
use mongodb::bson::oid::ObjectId;

use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::repos::movies::{self, CreateMovieData, UpdateMovieData};

use super::types::Movie;

#[derive(Default)]
pub struct MovieQuery;

#[Object]
impl MovieQuery {
    /// Get a single movie by ID
    async fn movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        let state = ctx.data::<AppState>()?;
        let movie_id = ObjectId::parse_str(id.as_str()).gql_err("Invalid movie ID")?;

        let doc = movies::find_by_id(&state.db, movie_id)
            .await
            .map_err(GqlError::from)?;

        Ok(doc.map(Movie::from))
    }

    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let state = ctx.data::<AppState>()?;
        let docs = movies::list(&state.db).await.map_err(GqlError::from)?;

        Ok(docs.into_iter().map(Movie::from).collect())
    }
}

#[derive(Default)]
pub struct MovieMutation;

#[Object]
impl MovieMutation {
    /// Create a movie. The directorId is stored as given; its existence is
    /// not checked.
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        rate: Option<i32>,
        watched: bool,
        director_id: Option<ID>,
    ) -> Result<Movie> {
        let state = ctx.data::<AppState>()?;
        let director_id = director_id
            .map(|id| ObjectId::parse_str(id.as_str()))
            .transpose()
            .gql_err("Invalid director ID")?;

        let doc = movies::create(
            &state.db,
            CreateMovieData {
                name,
                genre,
                rate,
                watched,
                director_id,
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(doc.into())
    }

    /// Delete a movie; returns the removed movie, or null if none matched.
    async fn delete_movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        let state = ctx.data::<AppState>()?;
        let movie_id = ObjectId::parse_str(id.as_str()).gql_err("Invalid movie ID")?;

        let doc = movies::remove(&state.db, movie_id)
            .await
            .map_err(GqlError::from)?;

        Ok(doc.map(Movie::from))
    }

    /// Update a movie's fields; returns the post-update movie, or null if
    /// none matched. Omitted rate/directorId are left unchanged.
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        genre: String,
        rate: Option<i32>,
        watched: bool,
        director_id: Option<ID>,
    ) -> Result<Option<Movie>> {
        let state = ctx.data::<AppState>()?;
        let movie_id = ObjectId::parse_str(id.as_str()).gql_err("Invalid movie ID")?;
        let director_id = director_id
            .map(|id| ObjectId::parse_str(id.as_str()))
            .transpose()
            .gql_err("Invalid director ID")?;

        let doc = movies::update(
            &state.db,
            movie_id,
            UpdateMovieData {
                name,
                genre,
                rate,
                watched,
                director_id,
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(doc.map(Movie::from))
    }
}
