//! Dependency reference structures

use std::fmt;

/// Name of the metadata document published for every artifact
const METADATA_FILE: &str = "maven-metadata.xml";

/// A `group/artifact` coordinate on Clojars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    /// Group (namespace) portion, dot-separated
    pub group: String,
    /// Artifact name
    pub artifact: String,
}

impl DependencyRef {
    /// Creates a new dependency reference
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// Parses a `group/artifact` string.
    ///
    /// Returns `None` when the string has no `/`. Only the first two
    /// segments are used; segment content is not validated.
    pub fn parse(value: &str) -> Option<Self> {
        let mut segments = value.split('/');
        let group = segments.next()?;
        let artifact = segments.next()?;
        Some(Self::new(group, artifact))
    }

    /// Group with every `.` replaced by `/`
    pub fn group_path(&self) -> String {
        self.group.replace('.', "/")
    }

    /// Path of the artifact's metadata document, relative to the repository root
    pub fn metadata_path(&self) -> String {
        format!(
            "/{}/{}/{}",
            self.group_path(),
            self.artifact,
            METADATA_FILE
        )
    }
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.artifact)
    }
}
