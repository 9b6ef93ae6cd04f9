//! Clojars repository adapter
//!
//! Fetches artifact metadata from the Clojars Maven repository.
//! Endpoint: https://repo.clojars.org/{group/as/path}/{artifact}/maven-metadata.xml

use crate::domain::DependencyRef;
use crate::error::RegistryError;
use crate::registry::{HttpClient, MavenMetadata, RegistryAdapter};
use async_trait::async_trait;
use tracing::debug;

/// Clojars repository base URL
pub const CLOJARS_REPO_URL: &str = "https://repo.clojars.org";

/// Clojars adapter
pub struct ClojarsAdapter {
    client: HttpClient,
    base_url: String,
}

impl ClojarsAdapter {
    /// Create a new Clojars adapter against the public repository
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, CLOJARS_REPO_URL)
    }

    /// Create a new Clojars adapter against a custom repository root
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Repository root this adapter queries
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the metadata URL for a dependency
    fn build_url(&self, dependency: &DependencyRef) -> String {
        format!("{}{}", self.base_url, dependency.metadata_path())
    }
}

#[async_trait]
impl RegistryAdapter for ClojarsAdapter {
    fn registry_name(&self) -> &'static str {
        "Clojars"
    }

    async fn fetch_metadata(
        &self,
        dependency: &DependencyRef,
    ) -> Result<MavenMetadata, RegistryError> {
        let url = self.build_url(dependency);
        debug!(%url, "fetching metadata");

        let body = self
            .client
            .get_text(&url, &dependency.to_string(), self.registry_name())
            .await?;

        Ok(MavenMetadata::new(body))
    }
}
