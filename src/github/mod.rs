//! GitHub hosting API abstraction layer
//!
//! This module provides a trait-based abstraction over the repository data
//! the pipelines consume, allowing for a real REST client and an in-memory
//! implementation for testing.
//!
//! Most code should depend on the [ReleaseHost] trait rather than concrete
//! implementations. The trait deliberately carries no retry or pagination
//! logic; callers get whatever window the host returns.

pub mod client;
pub mod mock;

pub use client::GithubClient;
pub use mock::MockHost;

use crate::domain::Tag;
use crate::error::{GhReleaseError, Result};
use chrono::{DateTime, Utc};

/// A commit as returned by the hosting API, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    pub sha: String,
    pub message: String,
}

impl RawCommit {
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        RawCommit {
            sha: sha.into(),
            message: message.into(),
        }
    }
}

/// A published release with its free-text description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
}

/// Release listing together with the host-reported total count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseQuery {
    pub total_count: u64,
    pub releases: Vec<Release>,
}

/// Coordinates of the repository being released
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
    pub url: String,
}

impl RepoRef {
    /// Create a repo reference with an explicit web URL
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, url: impl Into<String>) -> Self {
        RepoRef {
            owner: owner.into(),
            repo: repo.into(),
            url: url.into(),
        }
    }

    /// Parse an "owner/name" slug, deriving the github.com web URL
    pub fn from_slug(slug: &str) -> Result<Self> {
        let (owner, repo) = slug
            .split_once('/')
            .filter(|(o, r)| !o.is_empty() && !r.is_empty())
            .ok_or_else(|| {
                GhReleaseError::config(format!("Invalid repository slug '{}', expected owner/name", slug))
            })?;
        let url = format!("https://github.com/{}/{}", owner, repo);
        Ok(RepoRef::new(owner, repo, url))
    }
}

/// Read-only access to the repository data the release pipelines consume.
///
/// Implementations must be `Send + Sync` to allow safe sharing across threads.
///
/// - [GithubClient]: real implementation against the GitHub REST API
/// - [MockHost]: in-memory implementation for tests
pub trait ReleaseHost: Send + Sync {
    /// List repository tags with the commit sha each one points at
    fn list_tags(&self) -> Result<Vec<Tag>>;

    /// List commits, newest first
    fn list_commits(&self) -> Result<Vec<RawCommit>>;

    /// Query published releases, newest first, with the total release count
    fn query_releases(&self) -> Result<ReleaseQuery>;
}
