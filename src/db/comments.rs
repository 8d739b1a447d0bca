use anyhow::Result;
use mongodb::bson::oid::ObjectId;

use super::{queries, Database};

impl Database {
    /// Removes one comment by id. Returns the number of documents deleted.
    pub async fn delete_comment(&self, id: ObjectId) -> Result<u64> {
        let result = self.comments().delete_one(queries::comment_by_id(id)).await?;
        Ok(result.deleted_count)
    }

    /// Removes every comment referencing the given movie.
    pub async fn delete_comments_for_movie(&self, movie_id: ObjectId) -> Result<u64> {
        let result = self
            .comments()
            .delete_many(queries::comments_for_movie(movie_id))
            .await?;
        Ok(result.deleted_count)
    }
}
