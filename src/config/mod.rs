//! Verification configuration: which repository, which file, and the rules
//! the file and its history must satisfy.
//!
//! The configuration is strongly typed and resolved once at startup. With no
//! `--config` flag the embedded grading configuration is used; a TOML file
//! with the same shape can be supplied instead.

mod env;

pub use env::{load_credentials, Credentials, ENV_FILE};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default number of recent commits to scan for a matching message.
pub const DEFAULT_MAX_COMMITS: u32 = 10;

/// Target repository, file, and the checks to run against it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerificationConfig {
    /// Repository name under the configured organization.
    pub target_repo: String,

    /// File to fetch and verify.
    pub target_file: TargetFile,

    /// Strings that must appear verbatim in the file (headings, table
    /// headers, markers).
    #[serde(default)]
    pub required_structures: Vec<String>,

    /// Content checks evaluated in order against the fetched file.
    #[serde(default)]
    pub content_rules: Vec<ContentRule>,

    /// Optional commit-history check. Absent means the commit stage
    /// auto-passes without a network call.
    pub commit_verification: Option<CommitVerification>,
}

/// Location of the file to verify.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TargetFile {
    pub path: String,

    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_branch() -> String {
    "main".to_string()
}

/// A single content check. The `target` field on regex and text rules is a
/// label carried into failure messages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentRule {
    /// The first line containing `target` must carry `expected` as its
    /// first numeric token, compared as text.
    StatMatch { target: String, expected: String },

    /// `expected`, interpreted as a regex, must match somewhere in the
    /// content.
    RegexMatch { target: String, expected: String },

    /// `expected` must appear verbatim in the content.
    TextMatch { target: String, expected: String },
}

impl ContentRule {
    /// Label used in progress and failure reporting.
    pub fn target(&self) -> &str {
        match self {
            ContentRule::StatMatch { target, .. }
            | ContentRule::RegexMatch { target, .. }
            | ContentRule::TextMatch { target, .. } => target,
        }
    }

    /// The expected value or pattern for this rule.
    pub fn expected(&self) -> &str {
        match self {
            ContentRule::StatMatch { expected, .. }
            | ContentRule::RegexMatch { expected, .. }
            | ContentRule::TextMatch { expected, .. } => expected,
        }
    }
}

/// Commit-history check: a message pattern searched case-insensitively
/// within the most recent commits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitVerification {
    pub msg_pattern: String,

    #[serde(default = "default_max_commits")]
    pub max_commits: u32,
}

fn default_max_commits() -> u32 {
    DEFAULT_MAX_COMMITS
}

impl VerificationConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// The embedded grading configuration used when no config file is given.
    pub fn builtin() -> Self {
        Self {
            target_repo: "example-repo".to_string(),
            target_file: TargetFile {
                path: "docs/analysis-report.md".to_string(),
                branch: "main".to_string(),
            },
            required_structures: vec![
                "# 项目分析报告".to_string(),
                "## 执行摘要".to_string(),
                "## 详细分析".to_string(),
                "| 指标 | 数值 |".to_string(),
                "## 结论".to_string(),
            ],
            content_rules: vec![
                ContentRule::StatMatch {
                    target: "总用户数：".to_string(),
                    expected: "1000".to_string(),
                },
                ContentRule::RegexMatch {
                    target: "报告日期".to_string(),
                    expected: r"\d{4}-\d{2}-\d{2}".to_string(),
                },
                ContentRule::TextMatch {
                    target: "审核状态".to_string(),
                    expected: "审核状态：已批准".to_string(),
                },
            ],
            commit_verification: Some(CommitVerification {
                msg_pattern: "更新分析报告".to_string(),
                max_commits: DEFAULT_MAX_COMMITS,
            }),
        }
    }
}
