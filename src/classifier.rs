use crate::config::ClassifierConfig;
use crate::domain::{ClassifiedNote, NoteRule};
use crate::error::{GhReleaseError, Result};
use regex::Regex;

/// Classifies commit messages into release notes.
///
/// A message is scanned line by line. A recognized `type:` / `type(scope):`
/// prefix starts a new note, an unrecognized prefix drops the current note
/// together with its continuation lines, and a `BREAKING` line upgrades the
/// current note to a major one. Unmatched text never fails classification, it
/// is silently ignored.
pub struct CommitClassifier {
    rules: Vec<(String, NoteRule)>,
    breaking_marker: String,
    prefix_re: Regex,
    closing_re: Option<Regex>,
}

/// A note being accumulated while scanning a message
struct OpenNote {
    rule: NoteRule,
    lines: Vec<String>,
    refs: Vec<String>,
}

impl CommitClassifier {
    /// Build a classifier from the configured prefix rules
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let prefix_re = Regex::new(r"^([a-z]+)(?:\(([^)]*)\))?:\s*(.*)$")
            .map_err(|e| GhReleaseError::config(e.to_string()))?;

        let closing_re = if config.closing_keywords.is_empty() {
            None
        } else {
            let keywords: Vec<String> = config
                .closing_keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect();
            let pattern = format!(r"(?i)\b(?:{})\s+#(\d+)", keywords.join("|"));
            Some(Regex::new(&pattern).map_err(|e| GhReleaseError::config(e.to_string()))?)
        };

        Ok(CommitClassifier {
            rules: config
                .prefixes
                .iter()
                .map(|p| (p.prefix.clone(), p.rule))
                .collect(),
            breaking_marker: config.breaking_marker.clone(),
            prefix_re,
            closing_re,
        })
    }

    /// Extract every release note from a single commit message.
    ///
    /// One message may yield multiple notes across multiple rules (e.g. a
    /// `fix:` line and a `feat:` line in the same commit).
    pub fn classify(&self, message: &str) -> Vec<ClassifiedNote> {
        let mut notes = Vec::new();
        let mut current: Option<OpenNote> = None;

        for raw in message.lines() {
            let line = raw.trim_end();

            if let Some(caps) = self.prefix_re.captures(line) {
                flush(&mut current, &mut notes);

                // scope (capture 2) does not gate matching and is discarded
                let Some(rule) = self.rule_for(&caps[1]) else {
                    continue;
                };

                let mut refs = Vec::new();
                let text =
                    self.collect_refs(caps.get(3).map_or("", |m| m.as_str()), &mut refs);
                current = Some(OpenNote {
                    rule,
                    lines: vec![text],
                    refs,
                });
                continue;
            }

            if let Some(rest) = line.strip_prefix(&self.breaking_marker) {
                let text = rest.trim_start().to_string();
                match current.as_mut() {
                    Some(note) => {
                        note.rule = NoteRule::Major;
                        note.lines.push(text);
                    }
                    None => {
                        current = Some(OpenNote {
                            rule: NoteRule::Major,
                            lines: vec![text],
                            refs: Vec::new(),
                        });
                    }
                }
                continue;
            }

            let Some(note) = current.as_mut() else {
                continue;
            };

            if line.trim().is_empty() {
                note.lines.push(String::new());
                continue;
            }

            let kept = self.collect_refs(line, &mut note.refs);
            if !kept.is_empty() {
                note.lines.push(kept);
            }
        }

        flush(&mut current, &mut notes);
        notes
    }

    fn rule_for(&self, prefix: &str) -> Option<NoteRule> {
        self.rules
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, rule)| *rule)
    }

    /// Collect issue-closing references out of a line, returning what remains.
    ///
    /// References are deduplicated while preserving first-seen order. A line
    /// consisting solely of references collapses to an empty string.
    fn collect_refs(&self, text: &str, refs: &mut Vec<String>) -> String {
        let Some(re) = &self.closing_re else {
            return text.trim().to_string();
        };

        for caps in re.captures_iter(text) {
            let issue = format!("#{}", &caps[1]);
            if !refs.contains(&issue) {
                refs.push(issue);
            }
        }

        let kept = re.replace_all(text, "");
        kept.trim().trim_matches(',').trim().to_string()
    }
}

/// Finish the note under construction, if any, and append it to `notes`.
fn flush(current: &mut Option<OpenNote>, notes: &mut Vec<ClassifiedNote>) {
    let Some(mut note) = current.take() else {
        return;
    };

    while note.lines.last().is_some_and(|l| l.is_empty()) {
        note.lines.pop();
    }
    while note.lines.first().is_some_and(|l| l.is_empty()) {
        note.lines.remove(0);
    }
    if note.lines.is_empty() {
        return;
    }

    // continuation lines keep a single leading space; blank lines stay blank
    let mut text = note.lines[0].clone();
    for line in &note.lines[1..] {
        text.push('\n');
        if !line.is_empty() {
            text.push(' ');
            text.push_str(line);
        }
    }

    if !note.refs.is_empty() {
        text.push_str(&format!(" ({})", note.refs.join(", ")));
    }

    notes.push(ClassifiedNote::new(note.rule, text));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> CommitClassifier {
        CommitClassifier::new(&ClassifierConfig::default()).unwrap()
    }

    #[test]
    fn test_classify_fix() {
        let notes = classifier().classify("fix: resolve login issue");
        assert_eq!(
            notes,
            vec![ClassifiedNote::new(NoteRule::Patch, "resolve login issue")]
        );
    }

    #[test]
    fn test_classify_feat_with_scope() {
        let notes = classifier().classify("feat(auth): add login");
        assert_eq!(notes, vec![ClassifiedNote::new(NoteRule::Minor, "add login")]);
    }

    #[test]
    fn test_classify_multiple_notes_in_one_message() {
        let notes = classifier().classify("fix: fix serious issue\nfeat: add new feature");
        assert_eq!(
            notes,
            vec![
                ClassifiedNote::new(NoteRule::Patch, "fix serious issue"),
                ClassifiedNote::new(NoteRule::Minor, "add new feature"),
            ]
        );
    }

    #[test]
    fn test_classify_breaking_upgrades_current_note() {
        let notes = classifier().classify("feat: add new feature\nBREAKING config was removed");
        assert_eq!(
            notes,
            vec![ClassifiedNote::new(
                NoteRule::Major,
                "add new feature\n config was removed"
            )]
        );
    }

    #[test]
    fn test_classify_breaking_standalone() {
        let notes = classifier().classify("BREAKING removed the old API");
        assert_eq!(
            notes,
            vec![ClassifiedNote::new(NoteRule::Major, "removed the old API")]
        );
    }

    #[test]
    fn test_classify_unrecognized_prefix_ignored() {
        let notes = classifier().classify("test: Fix tests\nTests were hard to fix");
        assert!(notes.is_empty());
    }

    #[test]
    fn test_classify_unrecognized_prefix_terminates_note() {
        let notes = classifier().classify("fix: a fix\ntest: not this\nnor this line");
        assert_eq!(notes, vec![ClassifiedNote::new(NoteRule::Patch, "a fix")]);
    }

    #[test]
    fn test_classify_plain_prose_ignored() {
        let notes = classifier().classify("Updated stuff\nMerge branch 'main'");
        assert!(notes.is_empty());
    }

    #[test]
    fn test_classify_trailing_closing_ref_stripped() {
        let notes = classifier().classify("fix: This rare bug was finally fixed closes #33343");
        assert_eq!(
            notes,
            vec![ClassifiedNote::new(
                NoteRule::Patch,
                "This rare bug was finally fixed (#33343)"
            )]
        );
    }

    #[test]
    fn test_classify_ref_only_lines_collected_and_deduplicated() {
        let message = "fix: finally fixed fixes #33343\n\nfixes #453\nfixes #33343\nSome background goes here...";
        let notes = classifier().classify(message);
        assert_eq!(
            notes,
            vec![ClassifiedNote::new(
                NoteRule::Patch,
                "finally fixed\n\n Some background goes here... (#33343, #453)"
            )]
        );
    }

    #[test]
    fn test_classify_body_with_blank_line_preserved() {
        let message = "\nfix: finally fixed closes #33343\n\nSome background goes here...\nfeat: Add new feature within commit\nDescription";
        let notes = classifier().classify(message);
        assert_eq!(
            notes,
            vec![
                ClassifiedNote::new(
                    NoteRule::Patch,
                    "finally fixed\n\n Some background goes here... (#33343)"
                ),
                ClassifiedNote::new(
                    NoteRule::Minor,
                    "Add new feature within commit\n Description"
                ),
            ]
        );
    }

    #[test]
    fn test_classify_empty_message() {
        assert!(classifier().classify("").is_empty());
    }

    #[test]
    fn test_classify_custom_prefix_table() {
        let config = ClassifierConfig {
            prefixes: vec![crate::config::PrefixRule {
                prefix: "perf".to_string(),
                rule: NoteRule::Patch,
            }],
            ..ClassifierConfig::default()
        };
        let classifier = CommitClassifier::new(&config).unwrap();

        let notes = classifier.classify("perf: faster lookups\nfeat: not configured");
        assert_eq!(
            notes,
            vec![ClassifiedNote::new(NoteRule::Patch, "faster lookups")]
        );
    }
}
