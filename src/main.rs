use clap::Parser;
use mongodb::bson::oid::ObjectId;
use tracing::info;

use mflix::config::Config;
use mflix::db::Database;
use mflix::runner;

/// Runs a fixed sequence of CRUD and aggregation queries against the
/// sample_mflix dataset.
#[derive(Parser, Debug)]
#[command(name = "mflix", version, about)]
struct Args {
    /// MongoDB connection string; overrides MONGO_URI
    #[arg(long)]
    uri: Option<String>,

    /// Database to run against; overrides MFLIX_DATABASE
    #[arg(long)]
    database: Option<String>,

    /// Comment id for the single-comment delete; overrides MFLIX_COMMENT_ID
    #[arg(long)]
    comment_id: Option<ObjectId>,

    /// Movie id for the bulk comment delete; overrides MFLIX_MOVIE_ID
    #[arg(long)]
    movie_id: Option<ObjectId>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(uri) = args.uri {
        config.mongo_uri = uri;
    }
    if let Some(database) = args.database {
        config.database = database;
    }
    if let Some(id) = args.comment_id {
        config.comment_id = id;
    }
    if let Some(id) = args.movie_id {
        config.movie_ref_id = id;
    }

    let db = Database::connect(&config.mongo_uri, &config.database).await?;
    runner::run_database_queries(&db, &config).await?;
    info!("All queries completed");

    Ok(())
}
