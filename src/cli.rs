//! CLI argument parsing module for clojars-deps-server

use crate::error::ConfigError;
use clap::Parser;
use std::time::Duration;
use tracing::Level;

/// MCP server exposing Clojars dependency lookups over stdio
#[derive(Parser, Debug, Clone)]
#[command(
    name = "clojars-deps-server",
    version,
    about = "MCP server for Clojars dependency versions"
)]
pub struct CliArgs {
    /// Clojars repository root used for metadata lookups
    #[arg(long, env = "CLOJARS_BASE_URL", default_value = crate::registry::CLOJARS_REPO_URL)]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "CLOJARS_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Enable verbose (debug) logging
    #[arg(long)]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long)]
    pub quiet: bool,
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl CliArgs {
    /// Validate the arguments into a runtime configuration
    pub fn to_config(&self) -> Result<ServerConfig, ConfigError> {
        if self.verbose && self.quiet {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }

        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }

        if self.timeout == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: self.timeout,
            });
        }

        Ok(ServerConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(self.timeout),
        })
    }

    /// Log level selected by the flags
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::try_parse_from(["clojars-deps-server"]).unwrap();
        if std::env::var_os("CLOJARS_BASE_URL").is_none() {
            assert_eq!(args.base_url, "https://repo.clojars.org");
        }
        if std::env::var_os("CLOJARS_TIMEOUT").is_none() {
            assert_eq!(args.timeout, 30);
        }
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert_eq!(args.log_level(), Level::INFO);
    }

    #[test]
    fn test_custom_base_url_and_timeout() {
        let args = CliArgs::parse_from([
            "clojars-deps-server",
            "--base-url",
            "http://localhost:8080",
            "--timeout",
            "5",
        ]);
        let config = args.to_config().unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::parse_from(["clojars-deps-server", "--verbose"]);
        assert_eq!(args.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["clojars-deps-server", "-q"]);
        assert_eq!(args.log_level(), Level::ERROR);
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let args = CliArgs::parse_from(["clojars-deps-server", "--quiet", "--verbose"]);
        assert!(matches!(
            args.to_config(),
            Err(ConfigError::ConflictingOptions { .. })
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        let args = CliArgs::parse_from(["clojars-deps-server", "--base-url", "repo.clojars.org"]);
        assert!(matches!(
            args.to_config(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_zero_timeout() {
        let args = CliArgs::parse_from(["clojars-deps-server", "--timeout", "0"]);
        assert!(matches!(
            args.to_config(),
            Err(ConfigError::InvalidTimeout { value: 0 })
        ));
    }

    #[test]
    fn test_non_numeric_timeout_rejected() {
        let result = CliArgs::try_parse_from(["clojars-deps-server", "--timeout", "soon"]);
        assert!(result.is_err());
    }
}
