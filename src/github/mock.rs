use crate::domain::Tag;
use crate::error::Result;
use crate::github::{RawCommit, Release, ReleaseHost, ReleaseQuery};
use chrono::{DateTime, Utc};

/// In-memory host for testing without network access
#[derive(Debug, Default)]
pub struct MockHost {
    tags: Vec<Tag>,
    commits: Vec<RawCommit>,
    releases: Vec<Release>,
    total_count: Option<u64>,
}

impl MockHost {
    /// Create a new empty mock host
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag pointing at a commit sha
    pub fn add_tag(&mut self, name: impl Into<String>, commit_sha: impl Into<String>) {
        self.tags.push(Tag::new(name, commit_sha));
    }

    /// Add a commit; commits are served in insertion order (newest first)
    pub fn add_commit(&mut self, sha: impl Into<String>, message: impl Into<String>) {
        self.commits.push(RawCommit::new(sha, message));
    }

    /// Add a release; releases are served in insertion order (newest first)
    pub fn add_release(
        &mut self,
        tag_name: impl Into<String>,
        created_at: DateTime<Utc>,
        description: impl Into<String>,
    ) {
        let tag_name = tag_name.into();
        self.releases.push(Release {
            name: tag_name.clone(),
            tag_name,
            created_at,
            description: description.into(),
        });
    }

    /// Override the reported total release count
    pub fn set_total_count(&mut self, total_count: u64) {
        self.total_count = Some(total_count);
    }
}

impl ReleaseHost for MockHost {
    fn list_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn list_commits(&self) -> Result<Vec<RawCommit>> {
        Ok(self.commits.clone())
    }

    fn query_releases(&self) -> Result<ReleaseQuery> {
        Ok(ReleaseQuery {
            total_count: self
                .total_count
                .unwrap_or(self.releases.len() as u64),
            releases: self.releases.clone(),
        })
    }
}
