use crate::domain::NoteRule;
use crate::error::{GhReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for gh-release.
///
/// Contains the GitHub API endpoint and the commit classification rules.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Configuration for reaching the GitHub REST API.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GithubConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_base: default_api_base(),
        }
    }
}

/// Maps a conventional-commit prefix to the note rule it produces.
///
/// Rules are evaluated in declaration order, so earlier entries win when
/// prefixes overlap.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PrefixRule {
    pub prefix: String,
    pub rule: NoteRule,
}

/// Returns the default prefix-to-rule mapping.
fn default_prefixes() -> Vec<PrefixRule> {
    vec![
        PrefixRule {
            prefix: "feat".to_string(),
            rule: NoteRule::Minor,
        },
        PrefixRule {
            prefix: "fix".to_string(),
            rule: NoteRule::Patch,
        },
    ]
}

/// Returns the default breaking-change line marker.
fn default_breaking_marker() -> String {
    "BREAKING".to_string()
}

/// Returns the default issue-closing keywords stripped from note bodies.
fn default_closing_keywords() -> Vec<String> {
    vec![
        "closes".to_string(),
        "fixes".to_string(),
        "resolves".to_string(),
    ]
}

/// Configuration for commit message classification.
///
/// Defines the recognized prefixes, the breaking-change marker, and the
/// keywords used to collect issue references out of note bodies.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClassifierConfig {
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<PrefixRule>,

    #[serde(default = "default_breaking_marker")]
    pub breaking_marker: String,

    #[serde(default = "default_closing_keywords")]
    pub closing_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            prefixes: default_prefixes(),
            breaking_marker: default_breaking_marker(),
            closing_keywords: default_closing_keywords(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            github: GithubConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `ghrelease.toml` in current directory
/// 3. `~/.config/.ghrelease.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./ghrelease.toml").exists() {
        fs::read_to_string("./ghrelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".ghrelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| GhReleaseError::config(format!("Invalid config file: {}", e)))?;
    Ok(config)
}
