use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// A document from the `movies` collection. Everything except the id is
/// optional because the hosted dataset is schema-flexible; fields this
/// program never touches are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<Imdb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metacritic: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Imdb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<i64>,
}

/// The shape produced by the title/imdb projection read; the projection
/// excludes `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    pub title: Option<String>,
    pub imdb: Option<Imdb>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub movie_id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,
}

/// Row emitted by the movies-per-year aggregation. Documents with no year
/// group under a null key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearCount {
    #[serde(rename = "_id")]
    pub year: Option<i32>,
    pub count: i64,
}

/// Row emitted by the average-rating-per-director aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorAverage {
    #[serde(rename = "_id")]
    pub director: String,
    pub average_rating: f64,
    pub movie_count: i64,
}
