use crate::error::{GhReleaseError, Result};
use crate::github::{Release, ReleaseHost, RepoRef};
use regex::Regex;
use serde::Serialize;
use std::fmt::Write;

/// Combined changelog document assembled from release descriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogResult {
    pub total_count: u64,
    pub markdown: String,
}

/// Rewrites GitHub-flavored release descriptions into markdown that is safe
/// to render outside the source repository.
///
/// Bare commit hashes and `#N` issue references are turned into absolute
/// links against the target repository; text that is already a markdown link
/// passes through unchanged.
pub struct ChangelogRewriter {
    repo_url: String,
    sha_re: Regex,
    issue_re: Regex,
}

impl ChangelogRewriter {
    /// Create a rewriter targeting the given repository's web URL
    pub fn new(repo: &RepoRef) -> Result<Self> {
        Ok(ChangelogRewriter {
            repo_url: repo.url.trim_end_matches('/').to_string(),
            sha_re: Regex::new(r"[0-9a-f]{40}")
                .map_err(|e| GhReleaseError::config(e.to_string()))?,
            issue_re: Regex::new(r"#(\d+)")
                .map_err(|e| GhReleaseError::config(e.to_string()))?,
        })
    }

    /// Rewrite one release description
    pub fn rewrite_description(&self, text: &str) -> String {
        let text = self.rewrite_commit_shas(text);
        self.rewrite_issue_refs(&text)
    }

    /// Link bare 40-hex commit shas to the target repository.
    ///
    /// A sha that is part of a URL (preceded by `/`) or embedded in a longer
    /// hex run is left alone; everything else is linked at the target repo
    /// regardless of where the commit actually lives.
    fn rewrite_commit_shas(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for m in self.sha_re.find_iter(text) {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();

            let inside_url = before == Some('/');
            let longer_hex_run = before.is_some_and(|c| c.is_ascii_hexdigit())
                || after.is_some_and(|c| c.is_ascii_hexdigit());
            if inside_url || longer_hex_run {
                continue;
            }

            let sha = m.as_str();
            out.push_str(&text[last..m.start()]);
            let _ = write!(out, "[`{}`]({}/commit/{})", &sha[..7], self.repo_url, sha);
            last = m.end();
        }

        out.push_str(&text[last..]);
        out
    }

    /// Link `#N` references not already inside a markdown link.
    ///
    /// The trailing `}` in the generated URL reproduces the exact wire format
    /// downstream consumers render verbatim.
    fn rewrite_issue_refs(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for m in self.issue_re.find_iter(text) {
            if text[..m.start()].chars().next_back() == Some('[') {
                continue;
            }

            let number = &m.as_str()[1..];
            out.push_str(&text[last..m.start()]);
            let _ = write!(out, "[#{}]({}/issues/{}}})", number, self.repo_url, number);
            last = m.end();
        }

        out.push_str(&text[last..]);
        out
    }

    /// Render the combined markdown document, newest release first.
    ///
    /// Descriptions are preserved byte-for-byte apart from link rewriting;
    /// no blank-line normalization is applied.
    pub fn render(&self, releases: &[Release]) -> String {
        let mut markdown = String::new();

        for release in releases {
            let _ = write!(
                markdown,
                "\n## [{tag}]({url}/releases/tag/{tag}) - {date}\n{body}",
                tag = release.tag_name,
                url = self.repo_url,
                date = release.created_at.format("%Y-%m-%d"),
                body = self.rewrite_description(&release.description),
            );
        }

        markdown
    }
}

/// Assemble the changelog for a repository from its published releases.
///
/// `total_count` is passed through from the host's release metadata, not
/// recomputed from the returned list.
pub fn extract_changelog_from_github<H: ReleaseHost>(
    host: &H,
    repo: &RepoRef,
) -> Result<ChangelogResult> {
    let query = host.query_releases()?;
    let rewriter = ChangelogRewriter::new(repo)?;

    Ok(ChangelogResult {
        total_count: query.total_count,
        markdown: rewriter.render(&query.releases),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> ChangelogRewriter {
        let repo = RepoRef::from_slug("owner/test").unwrap();
        ChangelogRewriter::new(&repo).unwrap()
    }

    #[test]
    fn test_bare_sha_linked_at_target_repo() {
        let text = "yes 919b378a3d01a3ff7ab1952c9ab792b84e0234be";
        assert_eq!(
            rewriter().rewrite_description(text),
            "yes [`919b378`](https://github.com/owner/test/commit/919b378a3d01a3ff7ab1952c9ab792b84e0234be)"
        );
    }

    #[test]
    fn test_sha_inside_existing_link_untouched() {
        let text =
            "another fix [`919b378`](https://github.com/some/repo/commit/919b378a3d01a3ff7ab1952c9ab792b84e0234be)";
        assert_eq!(rewriter().rewrite_description(text), text);
    }

    #[test]
    fn test_sha_embedded_in_longer_hex_run_untouched() {
        let text = "checksum 919b378a3d01a3ff7ab1952c9ab792b84e0234be0";
        assert_eq!(rewriter().rewrite_description(text), text);
    }

    #[test]
    fn test_issue_refs_rewritten_with_brace_quirk() {
        let text = "fix something cool (#9, #10)";
        assert_eq!(
            rewriter().rewrite_description(text),
            "fix something cool ([#9](https://github.com/owner/test/issues/9}), [#10](https://github.com/owner/test/issues/10}))"
        );
    }

    #[test]
    fn test_already_linked_issue_ref_untouched() {
        let text = "see [#9](https://github.com/owner/test/issues/9) for details";
        assert_eq!(rewriter().rewrite_description(text), text);
    }

    #[test]
    fn test_render_block_format() {
        use chrono::TimeZone;

        let release = Release {
            name: "v0.0.1".to_string(),
            tag_name: "v0.0.1".to_string(),
            created_at: chrono::Utc.with_ymd_and_hms(2022, 7, 26, 12, 0, 0).unwrap(),
            description: "- first release".to_string(),
        };

        assert_eq!(
            rewriter().render(&[release]),
            "\n## [v0.0.1](https://github.com/owner/test/releases/tag/v0.0.1) - 2022-07-26\n- first release"
        );
    }

    #[test]
    fn test_render_empty_releases() {
        assert_eq!(rewriter().render(&[]), "");
    }
}
