//! Analysis engine for determining version bumps from commit history

pub mod bump_analyzer;

pub use bump_analyzer::{resolve_prior_version, BumpAnalysis, BumpAnalyzer, BumpResult, ResolvedPrior};

use crate::config::Config;
use crate::error::Result;
use crate::github::ReleaseHost;

/// Compute the next version and grouped release notes for a repository.
///
/// Fetches tags and commits once from the host and folds them through the
/// classifier. Malformed data degrades to a "none" bump, never an error;
/// only transport failures surface here.
pub fn get_next_version_and_release_notes<H: ReleaseHost>(
    host: &H,
    config: &Config,
) -> Result<BumpAnalysis> {
    let tags = host.list_tags()?;
    let commits = host.list_commits()?;

    let analyzer = BumpAnalyzer::new(&config.classifier)?;
    Ok(analyzer.analyze(&tags, &commits))
}
