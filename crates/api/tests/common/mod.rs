use std::env;

use api::gql::AppSchema;
use api::AppState;
use async_graphql::{Request, Variables};
use mongodb::bson::oid::ObjectId;

use infra::repos::directors::{self, CreateDirectorData};
use infra::repos::movies::{self, CreateMovieData};

pub async fn setup_test_db() -> AppState {
    let uri = env::var("MONGODB_TEST_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    // Fresh database per test so collections start empty
    let db_name = format!("movies_test_{}", ObjectId::new().to_hex());

    let db = infra::db::connect(&uri, &db_name, 5)
        .await
        .expect("Failed to connect to test database");

    AppState::new(db)
}

/// Helper function to execute GraphQL queries and mutations
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Create a test director through the repo layer and return its id
#[allow(dead_code)]
pub async fn create_test_director(app_state: &AppState, name: &str, age: i32) -> ObjectId {
    let doc = directors::create(
        &app_state.db,
        CreateDirectorData {
            name: name.to_string(),
            age,
        },
    )
    .await
    .expect("Failed to create test director");

    doc.id
}

/// Create a test movie through the repo layer and return its id
#[allow(dead_code)]
pub async fn create_test_movie(
    app_state: &AppState,
    name: &str,
    genre: &str,
    rate: Option<i32>,
    director_id: Option<ObjectId>,
) -> ObjectId {
    let doc = movies::create(
        &app_state.db,
        CreateMovieData {
            name: name.to_string(),
            genre: genre.to_string(),
            rate,
            watched: false,
            director_id,
        },
    )
    .await
    .expect("Failed to create test movie");

    doc.id
}
