//! Pricing table error types.

use std::path::PathBuf;

/// Errors that can occur when loading a pricing table.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// The pricing file could not be read
    #[error("failed to read pricing file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pricing file is not a valid table
    #[error("invalid pricing table: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PricingError::Json {
            message: "expected u64".into(),
        };
        assert_eq!(err.to_string(), "invalid pricing table: expected u64");

        let err = PricingError::Io {
            path: PathBuf::from("/tmp/prices.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/prices.json"));
        assert!(err.to_string().contains("gone"));
    }
}
