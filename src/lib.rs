//! clojars-deps-server - Clojars dependency lookups over MCP
//!
//! This library provides the building blocks of the server:
//! - Dependency references and lookup results (domain)
//! - Clojars metadata fetching and extraction (registry)
//! - The MCP tool catalog and handler (server)

pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod registry;
pub mod server;
