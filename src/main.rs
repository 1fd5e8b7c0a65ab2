use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use vouch::config::{self, VerificationConfig};
use vouch::github::GithubClient;
use vouch::verify;

#[derive(Parser)]
#[command(name = "vouch")]
#[command(about = "GitHub asset verification CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML verification config (defaults to the built-in
    /// grading config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dotenv file holding MCP_GITHUB_TOKEN and GITHUB_EVAL_ORG
    #[arg(long, default_value = config::ENV_FILE)]
    env_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            process::exit(1);
        }
    }
}

/// Run the pipeline. `Ok(false)` is a verification failure (exit 1, no
/// error trace); `Err` is a fatal pre-flight error.
fn execute(cli: &Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => VerificationConfig::load(path)?,
        None => VerificationConfig::builtin(),
    };

    // Credentials are resolved before any network activity; a missing
    // token or org fails the run here.
    let credentials = config::load_credentials(&cli.env_file)?;
    let client = GithubClient::new(&credentials, &config.target_repo)?;

    println!("Target repository: {}", client.slug().bold());
    println!();

    let outcome = verify::run_verification(&config, &client);
    if outcome.all_passed() {
        verify::print_summary(&config, &client, &outcome);
        Ok(true)
    } else {
        eprintln!(
            "\n{} Verification failed ({}/4 stage(s) passed)",
            "✗".red().bold(),
            outcome.passed_count()
        );
        for failure in outcome.failures() {
            eprintln!("  {} {failure}", "→".dimmed());
        }
        Ok(false)
    }
}
