//! Error types for mulled
//!
//! Every failure the catalog client can hit is a variant of [`MulledError`].
//! Transport, status, decode and validation errors are fatal to a run; a
//! [`MulledError::DateFormat`] only affects the table row it came from.

use thiserror::Error;


/// Main error type for mulled operations
#[derive(Error, Debug)]
pub enum MulledError {
    /// Network-related errors (connection, timeout, DNS, unexpected status)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Resource not found errors (404)
    #[error("{resource_type} not found: {name}")]
    NotFound { resource_type: String, name: String },

    /// Server errors (5xx)
    #[error("Server error (status: {status_code}): {message}")]
    Server { message: String, status_code: u16 },

    /// Response body is not valid JSON or does not fit the expected shape
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A version date that is not an RFC 3339 timestamp
    #[error("invalid date \"{value}\": {source}")]
    DateFormat {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Validation errors (bad endpoint URL and similar input problems)
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Result type alias for mulled operations
pub type Result<T> = std::result::Result<T, MulledError>;

impl MulledError {
    /// Creates a new network error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmulled::error::MulledError;
    ///
    /// let err = MulledError::network("connection refused");
    /// assert!(matches!(err, MulledError::Network { .. }));
    /// ```
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error with a source error.
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new not found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmulled::error::MulledError;
    ///
    /// let err = MulledError::not_found("image", "samtools");
    /// assert_eq!(err.to_string(), "image not found: samtools");
    /// ```
    pub fn not_found<S: Into<String>>(resource_type: S, name: S) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Creates a new server error.
    pub fn server<S: Into<String>>(message: S, status_code: u16) -> Self {
        Self::Server {
            message: message.into(),
            status_code,
        }
    }

    /// Creates a new decode error with the underlying parser error attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmulled::error::MulledError;
    ///
    /// let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
    /// let err = MulledError::decode_with_source("Failed to decode builders", json_err);
    /// assert!(matches!(err, MulledError::Decode { .. }));
    /// ```
    pub fn decode_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new date format error for the given raw value.
    pub fn date_format<S: Into<String>>(value: S, source: chrono::ParseError) -> Self {
        Self::DateFormat {
            value: value.into(),
            source,
        }
    }

    /// Creates a new validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmulled::error::MulledError;
    ///
    /// let err = MulledError::validation("Endpoint URL cannot be empty");
    /// assert!(matches!(err, MulledError::Validation { .. }));
    /// ```
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
