use serde::{Deserialize, Serialize};

/// Rule a classified release note falls under.
///
/// `RawOverride` is only emitted by the bootstrap path when a repository has
/// no release history at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoteRule {
    Major,
    Minor,
    Patch,
    RawOverride,
}

impl NoteRule {
    /// Severity weight used to pick the overall version bump
    pub fn weight(&self) -> u8 {
        match self {
            NoteRule::Major => 3,
            NoteRule::Minor => 2,
            NoteRule::Patch => 1,
            NoteRule::RawOverride => 0,
        }
    }
}

/// A single note extracted from a commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedNote {
    pub rule: NoteRule,
    pub text: String,
}

impl ClassifiedNote {
    pub fn new(rule: NoteRule, text: impl Into<String>) -> Self {
        ClassifiedNote {
            rule,
            text: text.into(),
        }
    }
}

/// Release notes grouped by rule, in the order they were encountered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseNotes {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub major: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minor: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub patch: Vec<String>,

    #[serde(rename = "rawOverride", skip_serializing_if = "Vec::is_empty")]
    pub raw_override: Vec<String>,
}

impl ReleaseNotes {
    /// Append a note under the given rule
    pub fn push(&mut self, rule: NoteRule, text: String) {
        match rule {
            NoteRule::Major => self.major.push(text),
            NoteRule::Minor => self.minor.push(text),
            NoteRule::Patch => self.patch.push(text),
            NoteRule::RawOverride => self.raw_override.push(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.major.is_empty()
            && self.minor.is_empty()
            && self.patch.is_empty()
            && self.raw_override.is_empty()
    }
}
