use mongodb::bson::oid::ObjectId;
use std::env;

use crate::errors::ConfigError;

pub const DEFAULT_DATABASE: &str = "sample_mflix";

// Ids from the stock sample_mflix dump; override when running against a
// differently-seeded deployment.
const DEFAULT_COMMENT_ID: &str = "573a1393f29313caabcd9e5b";
const DEFAULT_MOVIE_ID: &str = "573a1393f29313caabcd9e5b";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_uri: String,
    pub database: String,
    /// Target of the single-comment delete step.
    pub comment_id: ObjectId,
    /// Movie whose comments the bulk delete step removes.
    pub movie_ref_id: ObjectId,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            mongo_uri: env::var("MONGO_URI").map_err(|_| ConfigError::MissingVar("MONGO_URI"))?,
            database: env::var("MFLIX_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
            comment_id: object_id_var("MFLIX_COMMENT_ID", DEFAULT_COMMENT_ID)?,
            movie_ref_id: object_id_var("MFLIX_MOVIE_ID", DEFAULT_MOVIE_ID)?,
        })
    }
}

fn object_id_var(var: &'static str, default: &str) -> Result<ObjectId, ConfigError> {
    let hex = env::var(var).unwrap_or_else(|_| default.to_string());
    ObjectId::parse_str(&hex).map_err(|source| ConfigError::InvalidObjectId { var, source })
}
