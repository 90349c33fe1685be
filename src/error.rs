use thiserror::Error;

/// Errors raised while parsing or applying definition documents and projection settings.
///
/// Only the startup phase can fail; lookups never return these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color '{text}' for {context}")]
    InvalidColor { text: String, context: String },

    #[error("block id {0} is outside the block table (0..=511)")]
    BlockIdOutOfRange(i32),

    #[error("unknown translation table '{0}'")]
    UnknownTable(String),

    #[error("invalid projection settings: {0}")]
    Projection(String),
}
