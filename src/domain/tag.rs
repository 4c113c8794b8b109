use crate::domain::Version;
use crate::error::Result;

/// A repository tag as reported by the hosting API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub commit_sha: String,
}

impl Tag {
    /// Create a new tag
    pub fn new(name: impl Into<String>, commit_sha: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            commit_sha: commit_sha.into(),
        }
    }

    /// Parse the semantic version this tag names (e.g., "v1.2.3" -> 1.2.3)
    pub fn version(&self) -> Result<Version> {
        Version::parse(&self.name)
    }
}
