use anyhow::{Context, Result};
use mongodb::bson::oid::ObjectId;

use crate::models::User;

use super::Database;

impl Database {
    /// Inserts the user and returns the server-generated id.
    pub async fn insert_user(&self, user: &User) -> Result<ObjectId> {
        let result = self.users().insert_one(user).await?;
        result
            .inserted_id
            .as_object_id()
            .context("insert_one returned a non-ObjectId id")
    }
}
