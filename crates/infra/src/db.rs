use std::time::Duration;

use mongodb::bson::doc;
use mongodb::error::Result;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Handle to the backing document database, cloned into resolvers and loaders.
pub type Db = Database;

/// Connect to MongoDB and return a handle to the named database.
///
/// Pings the server once so a bad URI or unreachable host surfaces at
/// startup instead of on the first query.
pub async fn connect(uri: &str, database: &str, max_pool_size: u32) -> Result<Db> {
    let mut options = ClientOptions::parse(uri).await?;
    options.max_pool_size = Some(max_pool_size);
    options.server_selection_timeout = Some(Duration::from_secs(3));

    let client = Client::with_options(options)?;
    let db = client.database(database);

    db.run_command(doc! { "ping": 1 }).await?;

    Ok(db)
}
