//! `maven-metadata.xml` field extraction
//!
//! The document is scanned with patterns rather than parsed as XML:
//! - `<release>` and `<latest>` give the current version pointers
//! - every `<version>` element is collected in document order

use regex::Regex;
use std::sync::LazyLock;

static RELEASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<release>(.*?)</release>").unwrap());

static LATEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<latest>(.*?)</latest>").unwrap());

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<version>(.*?)</version>").unwrap());

/// Raw metadata document for one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenMetadata {
    body: String,
}

impl MavenMetadata {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Value of the first `<release>` element
    pub fn release(&self) -> Option<&str> {
        first_capture(&RELEASE_RE, &self.body)
    }

    /// Value of the first `<latest>` element
    pub fn latest(&self) -> Option<&str> {
        first_capture(&LATEST_RE, &self.body)
    }

    /// Release if present and non-empty, otherwise latest
    pub fn preferred_version(&self) -> Option<&str> {
        self.release()
            .filter(|v| !v.is_empty())
            .or_else(|| self.latest().filter(|v| !v.is_empty()))
    }

    /// All `<version>` values in document order, duplicates kept
    pub fn versions(&self) -> Vec<&str> {
        VERSION_RE
            .captures_iter(&self.body)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Exact string membership in the version list
    pub fn has_version(&self, version: &str) -> bool {
        self.versions().iter().any(|v| *v == version)
    }
}

fn first_capture<'a>(re: &Regex, body: &'a str) -> Option<&'a str> {
    re.captures(body).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}
