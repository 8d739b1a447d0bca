//! Filter documents and aggregation pipelines for the query sequence, kept
//! as plain constructors so their shapes can be asserted in unit tests.

use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

pub(crate) fn directed_by(director: &str) -> Document {
    doc! { "directors": director }
}

pub(crate) fn has_genre(genre: &str) -> Document {
    doc! { "genres": genre }
}

pub(crate) fn rating_above(threshold: f64) -> Document {
    doc! { "imdb.rating": { "$gt": threshold } }
}

pub(crate) fn rating_below(threshold: f64) -> Document {
    doc! { "imdb.rating": { "$lt": threshold } }
}

pub(crate) fn starring_all(cast: &[&str]) -> Document {
    doc! { "cast": { "$all": cast.to_vec() } }
}

/// Matches movies whose cast is exactly the given names, in any order.
pub(crate) fn starring_exactly(cast: &[&str]) -> Document {
    doc! { "cast": { "$all": cast.to_vec(), "$size": cast.len() as i32 } }
}

pub(crate) fn genre_and_director(genre: &str, director: &str) -> Document {
    doc! { "genres": genre, "directors": director }
}

pub(crate) fn title_is(title: &str) -> Document {
    doc! { "title": title }
}

pub(crate) fn released_in(year: i32) -> Document {
    doc! { "year": year }
}

/// Movies that carry a `genres` field holding an empty array. Movies with
/// no `genres` field at all are left alone.
pub(crate) fn empty_genres() -> Document {
    doc! { "genres": { "$exists": true, "$size": 0 } }
}

pub(crate) fn comment_by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

pub(crate) fn comments_for_movie(movie_id: ObjectId) -> Document {
    doc! { "movie_id": movie_id }
}

pub(crate) fn movies_per_year_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$year", "count": { "$sum": 1 } } },
        doc! { "$sort": { "_id": 1 } },
    ]
}

pub(crate) fn rating_by_director_pipeline() -> Vec<Document> {
    vec![
        doc! { "$match": { "imdb.rating": { "$ne": Bson::Null } } },
        doc! { "$unwind": "$directors" },
        doc! { "$group": {
            "_id": "$directors",
            "average_rating": { "$avg": "$imdb.rating" },
            "movie_count": { "$sum": 1 },
        } },
        doc! { "$sort": { "average_rating": -1 } },
    ]
}
