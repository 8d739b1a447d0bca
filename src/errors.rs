use thiserror::Error;

/// Errors produced while assembling the process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("{var} is not a valid ObjectId: {source}")]
    InvalidObjectId {
        var: &'static str,
        #[source]
        source: mongodb::bson::oid::Error,
    },
}
