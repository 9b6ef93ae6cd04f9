//! Application error types using thiserror
//!
//! Error hierarchy:
//! - RegistryError: Issues with Clojars registry communication and metadata extraction
//! - ToolError: Issues with an inbound tool call (unknown tool, malformed arguments)
//! - ConfigError: Issues with CLI configuration

use thiserror::Error;

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Registry answered 404 for the metadata document
    #[error("dependency '{dependency}' not found on {registry}")]
    NotFound {
        dependency: String,
        registry: String,
    },

    /// Registry answered with a non-success status other than 404
    #[error("Request failed with status code {status}")]
    HttpStatus { dependency: String, status: u16 },

    /// Network request failed before a response arrived
    #[error("{message}")]
    Network { dependency: String, message: String },

    /// Request exceeded the configured timeout
    #[error("{message}")]
    Timeout { dependency: String, message: String },

    /// Response body could not be read
    #[error("failed to read response body: {message}")]
    InvalidResponse { dependency: String, message: String },

    /// Metadata carried neither a release nor a latest marker
    #[error("no release or latest version found in metadata for '{dependency}'")]
    MissingVersion { dependency: String },
}

/// Errors raised while handling a single tool call
#[derive(Error, Debug)]
pub enum ToolError {
    /// Requested tool is not part of the catalog
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Arguments did not match the tool's expected shape
    #[error("{message}")]
    InvalidArguments { message: String },

    /// Registry lookup failed
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Base URL is not an http(s) URL
    #[error("invalid base URL '{value}': expected an http:// or https:// URL")]
    InvalidBaseUrl { value: String },

    /// Timeout is zero
    #[error("invalid timeout '{value}': must be at least 1 second")]
    InvalidTimeout { value: u64 },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

impl RegistryError {
    /// Creates a new NotFound error
    pub fn not_found(dependency: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::NotFound {
            dependency: dependency.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(dependency: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Network {
            dependency: dependency.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(dependency: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Timeout {
            dependency: dependency.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingVersion error
    pub fn missing_version(dependency: impl Into<String>) -> Self {
        RegistryError::MissingVersion {
            dependency: dependency.into(),
        }
    }

    /// Returns true if the failure happened at the HTTP layer.
    ///
    /// HTTP-layer failures are reported to the caller as tool results; anything
    /// else aborts the call as a protocol error.
    pub fn is_http_layer(&self) -> bool {
        !matches!(self, RegistryError::MissingVersion { .. })
    }
}

impl ToolError {
    /// Creates a new InvalidArguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        ToolError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Creates a new UnknownTool error
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        ToolError::UnknownTool { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_not_found() {
        let err = RegistryError::not_found("metosin/reitit", "Clojars");
        let msg = format!("{}", err);
        assert!(msg.contains("'metosin/reitit' not found"));
        assert!(msg.contains("Clojars"));
    }

    #[test]
    fn test_registry_error_http_status() {
        let err = RegistryError::HttpStatus {
            dependency: "metosin/reitit".to_string(),
            status: 503,
        };
        assert_eq!(format!("{}", err), "Request failed with status code 503");
    }

    #[test]
    fn test_registry_error_network_keeps_message() {
        let err = RegistryError::network("metosin/reitit", "connection refused");
        assert_eq!(format!("{}", err), "connection refused");
    }

    #[test]
    fn test_registry_error_missing_version() {
        let err = RegistryError::missing_version("org.clojure/clojure");
        let msg = format!("{}", err);
        assert!(msg.contains("no release or latest version"));
        assert!(msg.contains("org.clojure/clojure"));
    }

    #[test]
    fn test_is_http_layer() {
        assert!(RegistryError::not_found("a/b", "Clojars").is_http_layer());
        assert!(RegistryError::timeout("a/b", "timed out").is_http_layer());
        assert!(RegistryError::network("a/b", "refused").is_http_layer());
        assert!(!RegistryError::missing_version("a/b").is_http_layer());
    }

    #[test]
    fn test_tool_error_unknown_tool() {
        let err = ToolError::unknown_tool("get_npm_version");
        assert_eq!(format!("{}", err), "Unknown tool: get_npm_version");
    }

    #[test]
    fn test_tool_error_from_registry_error() {
        let tool_err: ToolError = RegistryError::missing_version("a/b").into();
        assert!(matches!(
            tool_err,
            ToolError::Registry(RegistryError::MissingVersion { .. })
        ));
    }

    #[test]
    fn test_config_error_invalid_base_url() {
        let err = ConfigError::InvalidBaseUrl {
            value: "ftp://example.com".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("invalid base URL"));
        assert!(msg.contains("ftp://example.com"));
    }

    #[test]
    fn test_config_error_conflicting_options() {
        let err = ConfigError::ConflictingOptions {
            message: "--quiet and --verbose cannot be used together".to_string(),
        };
        assert!(format!("{}", err).contains("conflicting options"));
    }
}
