pub mod analyzer;
pub mod boundary;
pub mod changelog;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod github;
pub mod ui;

pub use analyzer::{get_next_version_and_release_notes, BumpAnalysis, BumpResult};
pub use changelog::{extract_changelog_from_github, ChangelogResult};
pub use error::{GhReleaseError, Result};
