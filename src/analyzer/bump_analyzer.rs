use crate::boundary::BoundaryWarning;
use crate::classifier::CommitClassifier;
use crate::config::ClassifierConfig;
use crate::domain::{BumpType, NoteRule, ReleaseNotes, Tag, Version};
use crate::github::RawCommit;
use serde::Serialize;

/// Note text used for the very first release of a repository
const INITIAL_RELEASE_NOTE: &str = "🎉 Initial release";

/// Version assigned when no prior release exists
const BOOTSTRAP_VERSION: &str = "0.0.1";

/// Outcome of the bump computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BumpResult {
    pub bump_type: BumpType,
    pub next_version: String,
    pub commit_messages_by_note_rule: ReleaseNotes,
}

/// Bump result together with any non-fatal diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpAnalysis {
    pub result: BumpResult,
    pub warnings: Vec<BoundaryWarning>,
}

/// The highest previously released version, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrior {
    pub version: Option<Version>,
    pub tag_name: Option<String>,
    pub boundary_sha: Option<String>,
    pub is_stable: bool,
    pub warnings: Vec<BoundaryWarning>,
}

/// Pick the tag naming the numerically greatest version, not the most
/// recently listed one. Unparseable tags are skipped with a warning.
pub fn resolve_prior_version(tags: &[Tag]) -> ResolvedPrior {
    let mut warnings = Vec::new();
    let mut best: Option<(Version, &Tag)> = None;

    for tag in tags {
        match tag.version() {
            Ok(version) => {
                if best.map_or(true, |(v, _)| version > v) {
                    best = Some((version, tag));
                }
            }
            Err(e) => warnings.push(BoundaryWarning::UnparsableTag {
                tag: tag.name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    match best {
        Some((version, tag)) => ResolvedPrior {
            version: Some(version),
            tag_name: Some(tag.name.clone()),
            boundary_sha: Some(tag.commit_sha.clone()),
            is_stable: version.is_stable(),
            warnings,
        },
        None => ResolvedPrior {
            version: None,
            tag_name: None,
            boundary_sha: None,
            is_stable: false,
            warnings,
        },
    }
}

/// Folds classified commits into one overall bump decision.
pub struct BumpAnalyzer {
    classifier: CommitClassifier,
}

impl BumpAnalyzer {
    /// Create a new analyzer from the configured classification rules
    pub fn new(config: &ClassifierConfig) -> crate::error::Result<Self> {
        Ok(BumpAnalyzer {
            classifier: CommitClassifier::new(config)?,
        })
    }

    /// Determine the next version and grouped release notes.
    ///
    /// `commits` must be newest first; consumption stops at the boundary
    /// tag's commit, which is itself excluded along with everything older.
    pub fn analyze(&self, tags: &[Tag], commits: &[RawCommit]) -> BumpAnalysis {
        let prior = resolve_prior_version(tags);
        let mut warnings = prior.warnings;

        let Some(prior_version) = prior.version else {
            // First-ever release: fixed bootstrap result, whatever the commits say
            let mut notes = ReleaseNotes::default();
            notes.push(NoteRule::RawOverride, INITIAL_RELEASE_NOTE.to_string());
            return BumpAnalysis {
                result: BumpResult {
                    bump_type: BumpType::None,
                    next_version: BOOTSTRAP_VERSION.to_string(),
                    commit_messages_by_note_rule: notes,
                },
                warnings,
            };
        };

        let mut notes = ReleaseNotes::default();
        let mut weight: u8 = 0;
        let mut window_len = 0usize;

        for commit in commits {
            if prior.boundary_sha.as_deref() == Some(commit.sha.as_str()) {
                break;
            }
            window_len += 1;

            for note in self.classifier.classify(&commit.message) {
                weight = weight.max(note.rule.weight());
                // on a 0.x line a breaking note is re-labeled, not duplicated
                let rule = if !prior.is_stable && note.rule == NoteRule::Major {
                    NoteRule::Minor
                } else {
                    note.rule
                };
                notes.push(rule, note.text);
            }
        }

        if window_len == 0 {
            if let Some(tag_name) = &prior.tag_name {
                warnings.push(BoundaryWarning::NoNewCommits {
                    latest_tag: tag_name.clone(),
                });
            }
        }

        // pre-1.0 lines get one level less severity: major -> minor, minor -> patch
        if !prior.is_stable && weight > 1 {
            weight -= 1;
        }

        let bump_type = BumpType::from_weight(weight);
        let next_version = prior_version.bump(bump_type);

        BumpAnalysis {
            result: BumpResult {
                bump_type,
                next_version: next_version.to_string(),
                commit_messages_by_note_rule: notes,
            },
            warnings,
        }
    }
}
