use anyhow::Result;
use rand::Rng;
use tracing::info;

use crate::config::Config;
use crate::db::Database;
use crate::models::{Movie, User};

/// Runs the fixed operation sequence against the injected handle. Steps are
/// independent: no step branches on the outcome of an earlier one, and the
/// first error aborts the remainder.
pub async fn run_database_queries(db: &Database, config: &Config) -> Result<()> {
    // Create
    let user = User {
        id: None,
        name: "Becca Rutila".to_string(),
        email: synthesized_email("becca_rutila"),
    };
    let user_id = db.insert_user(&user).await?;
    info!("Inserted user: {}", user_id);
    info!("Inserted user: {} <{}>", user.name, user.email);

    // Read
    let nolan_movies = db.movies_directed_by("Christopher Nolan").await?;
    info!("Christopher Nolan movies: {}", nolan_movies.len());
    for movie in &nolan_movies {
        info!("  {}", serde_json::to_string(movie)?);
    }

    let action_movies = db.movies_with_genre("Action").await?;
    info!("Action movies, newest first: {}", action_movies.len());
    for movie in &action_movies {
        info!("  {}", describe(movie));
    }

    let high_rated = db.highly_rated_movies(8.0).await?;
    info!("Movies rated above 8 on IMDb: {}", high_rated.len());
    for movie in &high_rated {
        let rating = movie
            .imdb
            .as_ref()
            .and_then(|imdb| imdb.rating)
            .map_or_else(|| "?".to_string(), |r| format!("{:.1}", r));
        info!(
            "  {} (rating {})",
            movie.title.as_deref().unwrap_or("<untitled>"),
            rating
        );
    }

    let hanks_and_allen = db
        .movies_starring_all(&["Tom Hanks", "Tim Allen"])
        .await?;
    info!("Movies with Tom Hanks and Tim Allen: {}", hanks_and_allen.len());
    for movie in &hanks_and_allen {
        info!("  {}", describe(movie));
    }

    let only_hanks_and_allen = db
        .movies_starring_exactly(&["Tom Hanks", "Tim Allen"])
        .await?;
    info!(
        "Movies with only Tom Hanks and Tim Allen: {}",
        only_hanks_and_allen.len()
    );
    for movie in &only_hanks_and_allen {
        info!("  {}", describe(movie));
    }

    let spielberg_comedies = db
        .movies_by_genre_and_director("Comedy", "Steven Spielberg")
        .await?;
    info!(
        "Comedy movies directed by Steven Spielberg: {}",
        spielberg_comedies.len()
    );
    for movie in &spielberg_comedies {
        info!("  {}", describe(movie));
    }

    // Update
    let modified = db.set_availability("The Matrix", "Sflix").await?;
    info!("Set available_on for The Matrix: {}", outcome_label(modified));

    let modified = db.bump_metacritic("The Matrix", 1).await?;
    info!(
        "Incremented The Matrix metacritic: {}",
        outcome_label(modified)
    );

    let tagged = db.tag_year_with_genre(1997, "Gen Z").await?;
    info!("Added \"Gen Z\" genre to {} movies from 1997", tagged);

    let boosted = db.boost_low_ratings(5.0, 1.0).await?;
    info!("Raised IMDb rating on {} movies rated below 5", boosted);

    // Delete
    let deleted = db.delete_comment(config.comment_id).await?;
    info!(
        "Deleted comment {}: {}",
        config.comment_id,
        outcome_label(deleted)
    );

    let deleted = db.delete_comments_for_movie(config.movie_ref_id).await?;
    info!(
        "Deleted {} comments for movie {}",
        deleted, config.movie_ref_id
    );

    let deleted = db.delete_movies_without_genres().await?;
    info!("Deleted {} movies with an empty genre list", deleted);

    // Aggregate
    let per_year = db.movies_per_year().await?;
    info!("Movies released per year:");
    for row in &per_year {
        match row.year {
            Some(year) => info!("  Year: {}, Count: {}", year, row.count),
            None => info!("  Year: unknown, Count: {}", row.count),
        }
    }

    let by_director = db.average_rating_by_director().await?;
    info!("Average IMDb rating by director:");
    for row in &by_director {
        info!(
            "  Director: {}, Avg Rating: {:.2}, Movies: {}",
            row.director, row.average_rating, row.movie_count
        );
    }

    let top_rated = db.top_rated_movies(8.0, 5).await?;
    info!("Top {} IMDb-rated movies:", top_rated.len());
    for movie in &top_rated {
        let rating = movie
            .imdb
            .as_ref()
            .and_then(|imdb| imdb.rating)
            .map_or_else(|| "?".to_string(), |r| format!("{:.1}", r));
        info!("  {} (rating {})", describe(movie), rating);
    }

    Ok(())
}

/// Appends a random numeric suffix so repeated runs do not collide on a
/// unique email index.
pub(crate) fn synthesized_email(base: &str) -> String {
    let suffix = rand::thread_rng().gen_range(0..1000);
    format!("{}{}@example.com", base, suffix)
}

pub(crate) fn outcome_label(count: u64) -> &'static str {
    if count == 1 {
        "Success"
    } else {
        "Failed"
    }
}

pub(crate) fn describe(movie: &Movie) -> String {
    let title = movie.title.as_deref().unwrap_or("<untitled>");
    match movie.year {
        Some(year) => format!("{} ({})", title, year),
        None => title.to_string(),
    }
}
