//! Lookup result structures returned to the caller as JSON

use super::DependencyRef;
use serde::Serialize;

/// Result of a latest-version lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestVersion {
    /// Dependency in `group/artifact` form
    pub dependency: String,
    /// Release version, or the latest version when no release is published
    pub latest_version: String,
}

impl LatestVersion {
    pub fn new(dependency: &DependencyRef, latest_version: impl Into<String>) -> Self {
        Self {
            dependency: dependency.to_string(),
            latest_version: latest_version.into(),
        }
    }
}

/// Result of a version-existence check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    /// Dependency in `group/artifact` form
    pub dependency: String,
    /// Version that was asked for
    pub version: String,
    /// Whether the metadata lists the version
    pub exists: bool,
}

impl VersionCheck {
    pub fn new(dependency: &DependencyRef, version: impl Into<String>, exists: bool) -> Self {
        Self {
            dependency: dependency.to_string(),
            version: version.into(),
            exists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_version_json_shape() {
        let dep = DependencyRef::new("metosin", "reitit");
        let result = LatestVersion::new(&dep, "0.7.2");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["dependency"], "metosin/reitit");
        assert_eq!(json["latest_version"], "0.7.2");
    }

    #[test]
    fn test_version_check_pretty_output() {
        let dep = DependencyRef::new("org.clojure", "clojure");
        let result = VersionCheck::new(&dep, "1.12.0", true);
        let text = serde_json::to_string_pretty(&result).unwrap();
        assert_eq!(
            text,
            "{\n  \"dependency\": \"org.clojure/clojure\",\n  \"version\": \"1.12.0\",\n  \"exists\": true\n}"
        );
    }
}
