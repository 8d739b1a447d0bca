use anyhow::Result;
use mongodb::{bson::doc, Client, Collection};
use tracing::info;

use crate::models::{Comment, Movie, User};

pub mod comments;
pub mod movies;
pub(crate) mod queries;
pub mod users;

/// Handle to one named database on a MongoDB deployment. Cheap to clone;
/// passed by reference into the query runner.
#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Connects to the deployment and verifies it is reachable. A bad URI
    /// or unreachable server fails here rather than on first use.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB, using database '{}'", database);
        Ok(Self { db })
    }

    pub fn database(&self) -> &mongodb::Database {
        &self.db
    }

    fn movies(&self) -> Collection<Movie> {
        self.db.collection("movies")
    }

    fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }

    fn comments(&self) -> Collection<Comment> {
        self.db.collection("comments")
    }
}
