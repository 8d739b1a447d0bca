#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, oid::ObjectId, Bson};

    use crate::db::queries;

    #[test]
    fn directed_by_matches_against_the_directors_array() {
        assert_eq!(
            queries::directed_by("Christopher Nolan"),
            doc! { "directors": "Christopher Nolan" }
        );
    }

    #[test]
    fn has_genre_is_a_membership_match() {
        assert_eq!(queries::has_genre("Action"), doc! { "genres": "Action" });
    }

    #[test]
    fn rating_above_uses_gt_on_the_nested_field() {
        assert_eq!(
            queries::rating_above(8.0),
            doc! { "imdb.rating": { "$gt": 8.0 } }
        );
    }

    #[test]
    fn rating_below_uses_lt_on_the_nested_field() {
        assert_eq!(
            queries::rating_below(5.0),
            doc! { "imdb.rating": { "$lt": 5.0 } }
        );
    }

    #[test]
    fn starring_all_requires_every_name() {
        assert_eq!(
            queries::starring_all(&["Tom Hanks", "Tim Allen"]),
            doc! { "cast": { "$all": ["Tom Hanks", "Tim Allen"] } }
        );
    }

    #[test]
    fn starring_exactly_also_pins_the_cast_size() {
        assert_eq!(
            queries::starring_exactly(&["Tom Hanks", "Tim Allen"]),
            doc! { "cast": { "$all": ["Tom Hanks", "Tim Allen"], "$size": 2 } }
        );
    }

    #[test]
    fn genre_and_director_is_a_compound_filter() {
        assert_eq!(
            queries::genre_and_director("Comedy", "Steven Spielberg"),
            doc! { "genres": "Comedy", "directors": "Steven Spielberg" }
        );
    }

    #[test]
    fn empty_genres_requires_the_field_to_exist() {
        assert_eq!(
            queries::empty_genres(),
            doc! { "genres": { "$exists": true, "$size": 0 } }
        );
    }

    #[test]
    fn comment_filters_target_id_and_movie_reference() {
        let id = ObjectId::parse_str("573a1393f29313caabcd9e5b").unwrap();
        assert_eq!(queries::comment_by_id(id), doc! { "_id": id });
        assert_eq!(queries::comments_for_movie(id), doc! { "movie_id": id });
    }

    #[test]
    fn movies_per_year_groups_then_sorts_ascending() {
        let pipeline = queries::movies_per_year_pipeline();
        assert_eq!(pipeline.len(), 2);
        assert_eq!(
            pipeline[0],
            doc! { "$group": { "_id": "$year", "count": { "$sum": 1 } } }
        );
        assert_eq!(pipeline[1], doc! { "$sort": { "_id": 1 } });
    }

    #[test]
    fn rating_by_director_excludes_null_ratings_before_unwinding() {
        let pipeline = queries::rating_by_director_pipeline();
        assert_eq!(pipeline.len(), 4);
        assert_eq!(
            pipeline[0],
            doc! { "$match": { "imdb.rating": { "$ne": Bson::Null } } }
        );
        assert_eq!(pipeline[1], doc! { "$unwind": "$directors" });
        assert_eq!(
            pipeline[2],
            doc! { "$group": {
                "_id": "$directors",
                "average_rating": { "$avg": "$imdb.rating" },
                "movie_count": { "$sum": 1 },
            } }
        );
        assert_eq!(pipeline[3], doc! { "$sort": { "average_rating": -1 } });
    }
}
