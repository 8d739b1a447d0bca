#[cfg(test)]
mod tests {
    use mongodb::bson::{self, doc, oid::ObjectId, Bson};

    use crate::models::{DirectorAverage, Movie, User, YearCount};

    #[test]
    fn movie_deserializes_with_most_fields_absent() {
        let id = ObjectId::new();
        let movie: Movie =
            bson::from_document(doc! { "_id": id, "title": "The Matrix" }).unwrap();
        assert_eq!(movie.id, id);
        assert_eq!(movie.title.as_deref(), Some("The Matrix"));
        assert!(movie.year.is_none());
        assert!(movie.imdb.is_none());
        assert!(movie.available_on.is_none());
    }

    #[test]
    fn movie_ignores_fields_this_program_never_touches() {
        let document = doc! {
            "_id": ObjectId::new(),
            "title": "Inception",
            "plot": "A thief who steals corporate secrets...",
            "runtime": 148,
        };
        let movie: Movie = bson::from_document(document).unwrap();
        assert_eq!(movie.title.as_deref(), Some("Inception"));
    }

    #[test]
    fn movie_serializes_without_absent_fields() {
        let movie = Movie {
            id: ObjectId::new(),
            title: Some("The Matrix".to_string()),
            year: None,
            genres: None,
            directors: None,
            cast: None,
            imdb: None,
            metacritic: None,
            available_on: None,
        };
        let document = bson::to_document(&movie).unwrap();
        assert!(document.contains_key("title"));
        assert!(!document.contains_key("year"));
        assert!(!document.contains_key("genres"));
    }

    #[test]
    fn new_user_serializes_without_an_id() {
        let user = User {
            id: None,
            name: "Becca Rutila".to_string(),
            email: "becca_rutila42@example.com".to_string(),
        };
        let document = bson::to_document(&user).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("name").unwrap(), "Becca Rutila");
    }

    #[test]
    fn year_count_reads_the_group_key_from_id() {
        let row: YearCount = bson::from_document(doc! { "_id": 1997, "count": 12 }).unwrap();
        assert_eq!(row.year, Some(1997));
        assert_eq!(row.count, 12);
    }

    #[test]
    fn year_count_tolerates_a_null_year_group() {
        let row: YearCount =
            bson::from_document(doc! { "_id": Bson::Null, "count": 3 }).unwrap();
        assert_eq!(row.year, None);
        assert_eq!(row.count, 3);
    }

    #[test]
    fn director_average_reads_driver_shaped_rows() {
        let document = doc! {
            "_id": "Christopher Nolan",
            "average_rating": 8.25,
            "movie_count": 8,
        };
        let row: DirectorAverage = bson::from_document(document).unwrap();
        assert_eq!(row.director, "Christopher Nolan");
        assert!((row.average_rating - 8.25).abs() < f64::EPSILON);
        assert_eq!(row.movie_count, 8);
    }
}
