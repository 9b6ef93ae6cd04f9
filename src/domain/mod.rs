//! Core domain models
//!
//! This module contains the transient values of a single lookup:
//! - Dependency references parsed from `group/artifact` strings
//! - Lookup results rendered back to the caller

mod dependency;
mod lookup;

pub use dependency::DependencyRef;
pub use lookup::{LatestVersion, VersionCheck};
