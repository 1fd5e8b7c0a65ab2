//! Commit-history search.

use colored::Colorize;
use regex::RegexBuilder;
use serde::Deserialize;

use super::GithubClient;

/// Entry in the commit list returned by the commits endpoint.
#[derive(Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    message: String,
}

impl GithubClient {
    /// Search the most recent commits for a message matching `pattern` as
    /// a case-insensitive regex.
    ///
    /// A failed call, an unparseable payload, or an invalid pattern all
    /// yield false.
    pub fn search_recent_commits(&self, pattern: &str, max_commits: u32) -> bool {
        let Some(payload) = self.fetch_json(&format!("commits?per_page={max_commits}")) else {
            return false;
        };

        let commits: Vec<CommitEntry> = match serde_json::from_value(payload) {
            Ok(commits) => commits,
            Err(e) => {
                eprintln!("  {} commits: unexpected payload shape: {e}", "✗".red());
                return false;
            }
        };

        let regex = match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(e) => {
                eprintln!("  {} invalid commit pattern '{pattern}': {e}", "✗".red());
                return false;
            }
        };

        commits.iter().any(|c| regex.is_match(&c.commit.message))
    }
}
