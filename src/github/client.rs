use crate::domain::Tag;
use crate::error::{GhReleaseError, Result};
use crate::github::{RawCommit, Release, ReleaseHost, ReleaseQuery, RepoRef};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// GitHub REST API implementation of [ReleaseHost].
///
/// Issues blocking requests against `/repos/{owner}/{repo}/...`. Retrying and
/// pagination are out of scope; the API's default listing window is consumed
/// as-is.
pub struct GithubClient {
    http: reqwest::blocking::Client,
    api_base: String,
    owner: String,
    repo: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct TagPayload {
    name: String,
    commit: CommitRef,
}

#[derive(Deserialize)]
struct CommitRef {
    sha: String,
}

#[derive(Deserialize)]
struct CommitPayload {
    sha: String,
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    message: String,
}

#[derive(Deserialize)]
struct ReleasePayload {
    name: Option<String>,
    tag_name: String,
    created_at: DateTime<Utc>,
    body: Option<String>,
}

impl GithubClient {
    /// Create a client for a repository, with an optional bearer token
    pub fn new(api_base: impl Into<String>, repo: &RepoRef, token: Option<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("gh-release/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GithubClient {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            owner: repo.owner.clone(),
            repo: repo.repo.clone(),
            token,
        })
    }

    fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!(
            "{}/repos/{}/{}/{}",
            self.api_base, self.owner, self.repo, path
        );

        let mut request = self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        if !response.status().is_success() {
            return Err(GhReleaseError::api(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }

        Ok(response.json()?)
    }
}

impl ReleaseHost for GithubClient {
    fn list_tags(&self) -> Result<Vec<Tag>> {
        let tags: Vec<TagPayload> = self.get("tags")?;
        Ok(tags
            .into_iter()
            .map(|t| Tag::new(t.name, t.commit.sha))
            .collect())
    }

    fn list_commits(&self) -> Result<Vec<RawCommit>> {
        let commits: Vec<CommitPayload> = self.get("commits")?;
        Ok(commits
            .into_iter()
            .map(|c| RawCommit::new(c.sha, c.commit.message))
            .collect())
    }

    fn query_releases(&self) -> Result<ReleaseQuery> {
        let releases: Vec<ReleasePayload> = self.get("releases")?;
        let releases: Vec<Release> = releases
            .into_iter()
            .map(|r| Release {
                name: r.name.unwrap_or_else(|| r.tag_name.clone()),
                tag_name: r.tag_name,
                created_at: r.created_at,
                description: r.body.unwrap_or_default(),
            })
            .collect();

        Ok(ReleaseQuery {
            total_count: releases.len() as u64,
            releases,
        })
    }
}
