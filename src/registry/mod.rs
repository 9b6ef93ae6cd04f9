//! Registry adapters for fetching artifact version information
//!
//! This module provides:
//! - HTTP client shared foundation
//! - `maven-metadata.xml` field extraction
//! - Clojars repository adapter

mod client;
mod clojars;
mod metadata;

pub use client::{HttpClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use clojars::{ClojarsAdapter, CLOJARS_REPO_URL};
pub use metadata::MavenMetadata;

use crate::domain::{DependencyRef, LatestVersion, VersionCheck};
use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for registry adapters
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the metadata document for an artifact
    async fn fetch_metadata(
        &self,
        dependency: &DependencyRef,
    ) -> Result<MavenMetadata, RegistryError>;

    /// Look up the release (or, failing that, latest) version of an artifact
    async fn latest_version(
        &self,
        dependency: &DependencyRef,
    ) -> Result<LatestVersion, RegistryError> {
        let metadata = self.fetch_metadata(dependency).await?;
        let version = metadata
            .preferred_version()
            .ok_or_else(|| RegistryError::missing_version(dependency.to_string()))?;
        Ok(LatestVersion::new(dependency, version))
    }

    /// Check whether the artifact's metadata lists `version`
    async fn check_version(
        &self,
        dependency: &DependencyRef,
        version: &str,
    ) -> Result<VersionCheck, RegistryError> {
        let metadata = self.fetch_metadata(dependency).await?;
        Ok(VersionCheck::new(
            dependency,
            version,
            metadata.has_version(version),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adapter serving a fixed document
    struct StaticAdapter(&'static str);

    #[async_trait]
    impl RegistryAdapter for StaticAdapter {
        fn registry_name(&self) -> &'static str {
            "static"
        }

        async fn fetch_metadata(
            &self,
            _dependency: &DependencyRef,
        ) -> Result<MavenMetadata, RegistryError> {
            Ok(MavenMetadata::new(self.0))
        }
    }

    #[tokio::test]
    async fn test_latest_version_prefers_release() {
        let adapter = StaticAdapter("<release>1.2.3</release><latest>1.2.4</latest>");
        let dep = DependencyRef::new("metosin", "reitit");
        let result = adapter.latest_version(&dep).await.unwrap();
        assert_eq!(result.dependency, "metosin/reitit");
        assert_eq!(result.latest_version, "1.2.3");
    }

    #[tokio::test]
    async fn test_latest_version_missing_markers() {
        let adapter = StaticAdapter("<metadata></metadata>");
        let dep = DependencyRef::new("metosin", "reitit");
        let err = adapter.latest_version(&dep).await.unwrap_err();
        assert!(matches!(err, RegistryError::MissingVersion { .. }));
        assert!(!err.is_http_layer());
    }

    #[tokio::test]
    async fn test_check_version() {
        let adapter = StaticAdapter("<version>1.0.0</version><version>1.1.0</version>");
        let dep = DependencyRef::new("org.clojure", "clojure");

        let found = adapter.check_version(&dep, "1.1.0").await.unwrap();
        assert!(found.exists);
        assert_eq!(found.version, "1.1.0");

        let missing = adapter.check_version(&dep, "9.9.9").await.unwrap();
        assert!(!missing.exists);
        assert_eq!(missing.dependency, "org.clojure/clojure");
    }
}
