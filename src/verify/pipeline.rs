//! The four-stage verification pipeline.
//!
//! Stages run in order and the pipeline stops at the first failure. Stage 2
//! (structure) reports every missing item at once; stage 3 (content rules)
//! stops at the first failing rule.

use colored::Colorize;

use crate::config::VerificationConfig;
use crate::github::GithubClient;

use super::content::evaluate_rule;
use super::result::{Stage, StageResult, VerifyOutcome};
use super::structure::missing_structures;

/// Run the full verification pipeline against the configured repository.
///
/// Stage 1 fetches the target file; its content is the read-only input to
/// stages 2 and 3. Stage 4 is skipped (auto-pass, no network call) when no
/// commit verification is configured.
pub fn run_verification(config: &VerificationConfig, client: &GithubClient) -> VerifyOutcome {
    let mut stages = Vec::new();

    let Some(content) = verify_file_existence(config, client, &mut stages) else {
        return failed(stages);
    };

    if !verify_structure(&content, config, &mut stages) {
        return failed(stages);
    }

    if !verify_content(&content, config, &mut stages) {
        return failed(stages);
    }

    if !verify_commit_record(config, client, &mut stages) {
        return failed(stages);
    }

    VerifyOutcome::AllPassed { stages }
}

/// Print the closing summary after a full pass.
pub fn print_summary(config: &VerificationConfig, client: &GithubClient, outcome: &VerifyOutcome) {
    println!();
    println!(
        "{} All verification stages passed ({}/4)",
        "✓".green().bold(),
        outcome.passed_count()
    );
    println!("  File:       {}", config.target_file.path);
    println!("  Repository: {}", client.slug());
    println!("  Branch:     {}", config.target_file.branch);
    if let Some(commit) = &config.commit_verification {
        println!("  Commit:     {}", commit.msg_pattern);
    }
}

fn failed(stages: Vec<StageResult>) -> VerifyOutcome {
    let failures = stages
        .iter()
        .filter(|s| !s.passed)
        .map(|s| s.detail.clone())
        .collect();
    VerifyOutcome::Failed { stages, failures }
}

fn announce(stage: Stage, detail: &str) {
    println!(
        "{} [{}/4] Verifying {}: {detail}",
        "→".blue(),
        stage.ordinal(),
        stage.label()
    );
}

fn announce_skip(stage: Stage, reason: &str) {
    println!(
        "{} [{}/4] Skipping {} ({reason})",
        "→".blue(),
        stage.ordinal(),
        stage.label()
    );
}

fn pass(stages: &mut Vec<StageResult>, stage: Stage, detail: String) {
    println!("  {} {detail}", "✓".green().bold());
    stages.push(StageResult::pass(stage, detail));
}

fn fail(stages: &mut Vec<StageResult>, stage: Stage, detail: String) {
    eprintln!("  {} {detail}", "✗".red().bold());
    stages.push(StageResult::fail(stage, detail));
}

fn verify_file_existence(
    config: &VerificationConfig,
    client: &GithubClient,
    stages: &mut Vec<StageResult>,
) -> Option<String> {
    let path = &config.target_file.path;
    let branch = &config.target_file.branch;
    announce(Stage::FileExists, &format!("{path} (branch: {branch})"));

    match client.fetch_file_content(path, branch) {
        Some(content) if !content.is_empty() => {
            pass(stages, Stage::FileExists, format!("File {path} exists"));
            Some(content)
        }
        _ => {
            fail(
                stages,
                Stage::FileExists,
                format!("File {path} not found on branch {branch}"),
            );
            None
        }
    }
}

fn verify_structure(
    content: &str,
    config: &VerificationConfig,
    stages: &mut Vec<StageResult>,
) -> bool {
    let required = &config.required_structures;
    announce(
        Stage::Structure,
        &format!("{} required structure(s)", required.len()),
    );

    let missing = missing_structures(content, required);
    if missing.is_empty() {
        pass(
            stages,
            Stage::Structure,
            "All required structures present".to_string(),
        );
        true
    } else {
        fail(
            stages,
            Stage::Structure,
            format!("Missing required structures: {}", missing.join(", ")),
        );
        false
    }
}

fn verify_content(
    content: &str,
    config: &VerificationConfig,
    stages: &mut Vec<StageResult>,
) -> bool {
    let rules = &config.content_rules;
    if rules.is_empty() {
        announce_skip(Stage::Content, "no content rules configured");
        stages.push(StageResult::pass(
            Stage::Content,
            "No content rules configured",
        ));
        return true;
    }

    announce(Stage::Content, &format!("{} rule(s)", rules.len()));

    // The first failing rule ends the stage; remaining rules are not
    // evaluated.
    for rule in rules {
        if let Err(detail) = evaluate_rule(content, rule) {
            fail(stages, Stage::Content, detail);
            return false;
        }
    }

    pass(
        stages,
        Stage::Content,
        "All content rules satisfied".to_string(),
    );
    true
}

fn verify_commit_record(
    config: &VerificationConfig,
    client: &GithubClient,
    stages: &mut Vec<StageResult>,
) -> bool {
    let Some(commit) = &config.commit_verification else {
        announce_skip(Stage::CommitRecord, "no commit verification configured");
        stages.push(StageResult::pass(
            Stage::CommitRecord,
            "No commit verification configured",
        ));
        return true;
    };

    announce(
        Stage::CommitRecord,
        &format!(
            "'{}' within the last {} commit(s)",
            commit.msg_pattern, commit.max_commits
        ),
    );

    if client.search_recent_commits(&commit.msg_pattern, commit.max_commits) {
        pass(
            stages,
            Stage::CommitRecord,
            "Matching commit found".to_string(),
        );
        true
    } else {
        fail(
            stages,
            Stage::CommitRecord,
            format!("No commit matching '{}' found", commit.msg_pattern),
        );
        false
    }
}
