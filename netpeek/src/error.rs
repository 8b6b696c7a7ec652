//! Error types for netpeek.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Main error type for netpeek operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Device settings, filter or client configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Device session errors reported by the session collaborator
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Reply text could not be decoded
    #[error("Reply error: {0}")]
    Reply(#[from] ReplyError),

    /// Reply structure does not match what the parser expects
    #[error("Shape mismatch: {0}")]
    Shape(#[from] ShapeError),

    /// Parser registry errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Aggregated output failed to encode or decode
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration errors (device settings, filters, client inputs).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required device fields are absent or empty
    #[error("Missing field(s){}: {}", host_suffix(.host), .fields)]
    MissingFields { host: Option<String>, fields: String },

    /// A boolean option holds text other than true/false
    #[error("Invalid boolean value '{value}' for device option '{option}'")]
    InvalidBoolean { option: &'static str, value: String },

    /// Device settings document could not be interpreted
    #[error("Invalid device settings: {message}")]
    InvalidSettings { message: String },

    /// Settings or filter file could not be read
    #[error("Unable to read '{}': {}", .path.display(), .source)]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Filter text is neither inline XML nor a file holding XML
    #[error("No valid XML found in filter '{filter}'")]
    InvalidXmlFilter { filter: String },

    /// XPath filter expression is malformed
    #[error("Invalid XPath filter '{filter}'")]
    InvalidXPathFilter { filter: String },

    /// Device list is empty
    #[error("No devices configured")]
    NoDevices,

    /// Device settings were never provided to the client
    #[error("Device settings not set")]
    DevicesNotSet,

    /// No filter was provided to the client
    #[error("Filter not set - call set_xml_filter() or set_xpath_filter() first")]
    FilterNotSet,
}

fn host_suffix(host: &Option<String>) -> String {
    match host {
        Some(host) => format!(" for host '{host}'"),
        None => String::new(),
    }
}

/// Session collaborator errors (connection, authentication, query).
#[derive(Error, Debug)]
pub enum SessionError {
    /// Failed to connect to host
    #[error("Connection failed to {host}:{port}: {message}")]
    ConnectionFailed {
        host: String,
        port: u16,
        message: String,
    },

    /// Authentication failed
    #[error("Authentication failed for user '{user}'")]
    AuthenticationFailed { user: String },

    /// Operation timed out
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// The device answered the query with an rpc-error
    #[error("RPC failed: {message}")]
    Rpc { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reply decoding errors.
#[derive(Error, Debug)]
pub enum ReplyError {
    /// Reply text is not well-formed XML
    #[error("Malformed XML at byte {position}: {message}")]
    MalformedXml { position: u64, message: String },

    /// Reply text holds no root element
    #[error("Reply contains no XML element")]
    Empty,
}

/// Errors raised when a reply diverges from the structure a parser expects.
#[derive(Error, Debug, PartialEq)]
pub enum ShapeError {
    /// Expected path segment is absent
    #[error("Missing path '{path}'")]
    MissingPath { path: String },

    /// Node exists but has the wrong type
    #[error("Expected {expected} at '{path}'")]
    UnexpectedType { path: String, expected: &'static str },

    /// Counter text is not a decimal integer
    #[error("Non-numeric value '{value}' at '{path}'")]
    NotNumeric { path: String, value: String },

    /// A ratio's denominator is zero
    #[error("Zero denominator at '{path}'")]
    ZeroDenominator { path: String },
}

/// Parser registry errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A parser is already registered under this filter id
    #[error("Parser already registered for filter '{filter_id}'")]
    AlreadyRegistered { filter_id: String },
}

/// Result type alias using netpeek's Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = ConfigError::MissingFields {
            host: Some("10.0.0.1".to_string()),
            fields: "'Password', 'Username'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing field(s) for host '10.0.0.1': 'Password', 'Username'"
        );

        let err = ConfigError::MissingFields {
            host: None,
            fields: "'Host'".to_string(),
        };
        assert_eq!(err.to_string(), "Missing field(s): 'Host'");
    }

    #[test]
    fn test_layer_conversion() {
        let err: Error = ShapeError::MissingPath {
            path: "data/interfaces".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Shape(_)));
        assert_eq!(
            err.to_string(),
            "Shape mismatch: Missing path 'data/interfaces'"
        );
    }
}
