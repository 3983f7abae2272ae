use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::gql::build_schema;
use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    // Configure connection pool with appropriate limits
    let max_pool_size: u32 = std::env::var("MONGODB_MAX_POOL_SIZE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(30);

    let uri =
        std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
    let db_name = std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "movies".into());

    let db = infra::db::connect(&uri, &db_name, max_pool_size).await?;
    tracing::info!(
        "Connected to MongoDB database '{}' with max pool size {}",
        db_name,
        max_pool_size
    );

    infra::repos::movies::ensure_indexes(&db).await?;
    tracing::info!("Collection indexes ensured");

    let state = AppState::new(db);

    // Build GraphQL schema from the gql module
    let schema = build_schema(state.clone());

    let app = build_router(state, schema);

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
