//! Error Types
//!
//! `RetrievalError` is the only failure a collection read can surface.
//! `ConfigError` covers the embedded site configuration.

use thiserror::Error;

/// A collection read that did not produce records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RetrievalError {
    /// The request never completed (network, CORS, aborted fetch)
    #[error("request for `{collection}` failed: {message}")]
    Transport { collection: String, message: String },

    /// The service answered with a non-success status
    #[error("`{collection}` query returned HTTP {status}: {message}")]
    Status {
        collection: String,
        status: u16,
        message: String,
    },

    /// The response or one of its documents could not be decoded
    #[error("malformed data in `{collection}`: {message}")]
    Malformed { collection: String, message: String },
}

impl RetrievalError {
    pub fn transport(collection: &str, message: impl ToString) -> Self {
        RetrievalError::Transport {
            collection: collection.to_string(),
            message: message.to_string(),
        }
    }

    pub fn malformed(collection: &str, message: impl ToString) -> Self {
        RetrievalError::Malformed {
            collection: collection.to_string(),
            message: message.to_string(),
        }
    }

    /// Collection the failed read targeted
    pub fn collection(&self) -> &str {
        match self {
            RetrievalError::Transport { collection, .. }
            | RetrievalError::Status { collection, .. }
            | RetrievalError::Malformed { collection, .. } => collection,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("site config is not valid TOML: {0}")]
    Parse(String),

    #[error("invalid value for `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
