use anyhow::Result;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc};

use crate::models::{DirectorAverage, Movie, MovieSummary, YearCount};

use super::{queries, Database};

impl Database {
    pub async fn movies_directed_by(&self, director: &str) -> Result<Vec<Movie>> {
        let cursor = self.movies().find(queries::directed_by(director)).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Movies carrying the genre, newest release first.
    pub async fn movies_with_genre(&self, genre: &str) -> Result<Vec<Movie>> {
        let cursor = self
            .movies()
            .find(queries::has_genre(genre))
            .sort(doc! { "year": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Movies rated above the threshold, projected to title and imdb only.
    pub async fn highly_rated_movies(&self, min_rating: f64) -> Result<Vec<MovieSummary>> {
        let cursor = self
            .movies()
            .clone_with_type::<MovieSummary>()
            .find(queries::rating_above(min_rating))
            .projection(doc! { "title": 1, "imdb": 1, "_id": 0 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn movies_starring_all(&self, cast: &[&str]) -> Result<Vec<Movie>> {
        let cursor = self.movies().find(queries::starring_all(cast)).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn movies_starring_exactly(&self, cast: &[&str]) -> Result<Vec<Movie>> {
        let cursor = self.movies().find(queries::starring_exactly(cast)).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn movies_by_genre_and_director(
        &self,
        genre: &str,
        director: &str,
    ) -> Result<Vec<Movie>> {
        let cursor = self
            .movies()
            .find(queries::genre_and_director(genre, director))
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Sets `available_on` on the first movie with the given title.
    /// Returns the number of documents modified.
    pub async fn set_availability(&self, title: &str, service: &str) -> Result<u64> {
        let result = self
            .movies()
            .update_one(
                queries::title_is(title),
                doc! { "$set": { "available_on": service } },
            )
            .await?;
        Ok(result.modified_count)
    }

    pub async fn bump_metacritic(&self, title: &str, by: i32) -> Result<u64> {
        let result = self
            .movies()
            .update_one(queries::title_is(title), doc! { "$inc": { "metacritic": by } })
            .await?;
        Ok(result.modified_count)
    }

    /// Adds the genre to every movie released in `year`. `$addToSet` keeps
    /// the operation idempotent.
    pub async fn tag_year_with_genre(&self, year: i32, genre: &str) -> Result<u64> {
        let result = self
            .movies()
            .update_many(
                queries::released_in(year),
                doc! { "$addToSet": { "genres": genre } },
            )
            .await?;
        Ok(result.modified_count)
    }

    /// Raises `imdb.rating` by `by` on every movie rated below the
    /// threshold. No ceiling: repeated runs can push ratings past 10.
    pub async fn boost_low_ratings(&self, below: f64, by: f64) -> Result<u64> {
        let result = self
            .movies()
            .update_many(
                queries::rating_below(below),
                doc! { "$inc": { "imdb.rating": by } },
            )
            .await?;
        Ok(result.modified_count)
    }

    pub async fn delete_movies_without_genres(&self) -> Result<u64> {
        let result = self.movies().delete_many(queries::empty_genres()).await?;
        Ok(result.deleted_count)
    }

    /// Count of movies per release year, ascending by year.
    pub async fn movies_per_year(&self) -> Result<Vec<YearCount>> {
        let mut cursor = self
            .movies()
            .aggregate(queries::movies_per_year_pipeline())
            .await?;
        let mut rows = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            rows.push(bson::from_document(document)?);
        }
        Ok(rows)
    }

    /// Average rating and movie count per director, best-rated first.
    pub async fn average_rating_by_director(&self) -> Result<Vec<DirectorAverage>> {
        let mut cursor = self
            .movies()
            .aggregate(queries::rating_by_director_pipeline())
            .await?;
        let mut rows = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            rows.push(bson::from_document(document)?);
        }
        Ok(rows)
    }

    /// The `limit` best-rated movies above `min_rating`, projected to
    /// title, year and rating.
    pub async fn top_rated_movies(&self, min_rating: f64, limit: i64) -> Result<Vec<Movie>> {
        let cursor = self
            .movies()
            .find(queries::rating_above(min_rating))
            .projection(doc! { "title": 1, "year": 1, "imdb.rating": 1 })
            .sort(doc! { "imdb.rating": -1 })
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
