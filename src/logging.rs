//! Logging setup
//!
//! stdout carries the MCP stream, so every log line goes to stderr.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set, otherwise the given level for this crate.
pub fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,clojars_deps_server={}", level.as_str().to_lowercase()))
    })
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_uses_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_filter(Level::DEBUG);
        assert!(filter.to_string().contains("clojars_deps_server=debug"));
    }

    #[test]
    fn test_init_twice() {
        init(Level::INFO);
        init(Level::INFO);
    }
}
