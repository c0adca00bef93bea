//! Error types for store access

use thiserror::Error;

/// Errors raised while talking to the restaurant store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store client could not be created from the connection string
    #[error("Connection error: {0}")]
    Connection(String),

    /// A query was sent but failed
    #[error("Query error: {0}")]
    Query(String),

    /// A stored document did not match the restaurant shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// The store refused to serve requests
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match *err.kind {
            ErrorKind::BsonDeserialization(ref e) => StoreError::Decode(e.to_string()),
            ErrorKind::InvalidArgument { ref message, .. } => {
                StoreError::Connection(message.clone())
            }
            ErrorKind::ServerSelection { ref message, .. } => {
                StoreError::Unavailable(message.clone())
            }
            _ => StoreError::Query(err.to_string()),
        }
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Query("cursor killed".to_string());
        assert_eq!(err.to_string(), "Query error: cursor killed");

        let err = StoreError::Unavailable("no primary".to_string());
        assert_eq!(err.to_string(), "Store unavailable: no primary");
    }
}
