//! Credential loading from the dotenv environment file.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;

/// Default dotenv file consulted for credentials.
pub const ENV_FILE: &str = ".mcp_env";

const TOKEN_VAR: &str = "MCP_GITHUB_TOKEN";
const ORG_VAR: &str = "GITHUB_EVAL_ORG";

/// GitHub credentials resolved once at startup and injected into the client.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Bearer token for the GitHub API.
    pub token: String,
    /// Organization or user that owns the target repository.
    pub org: String,
}

/// Load credentials from `env_file` and the process environment.
///
/// The file is optional and never overrides variables already present in
/// the environment. Fails before any network activity if either variable
/// is missing or empty.
pub fn load_credentials(env_file: &Path) -> Result<Credentials> {
    if env_file.exists() {
        dotenvy::from_path(env_file)
            .with_context(|| format!("Failed to parse env file: {}", env_file.display()))?;
    }

    let token = require_var(TOKEN_VAR, env_file)?;
    let org = require_var(ORG_VAR, env_file)?;

    Ok(Credentials { token, org })
}

fn require_var(name: &str, env_file: &Path) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!(
            "{name} is not set (configure it in {} or the environment)",
            env_file.display()
        ),
    }
}
