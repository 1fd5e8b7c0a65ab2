//! Fetching and decoding repository file contents.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use colored::Colorize;

use super::GithubClient;

impl GithubClient {
    /// Fetch a file's decoded UTF-8 content at `path` on `branch`.
    ///
    /// The contents endpoint returns the `content` field base64-encoded
    /// with embedded line breaks, so whitespace is stripped before
    /// decoding. Any decode failure is treated the same as a missing file.
    pub fn fetch_file_content(&self, path: &str, branch: &str) -> Option<String> {
        let payload = self.fetch_json(&format!("contents/{path}?ref={branch}"))?;

        let encoded = payload
            .get("content")
            .and_then(|v| v.as_str())
            .unwrap_or("");
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        let bytes = match STANDARD.decode(compact.as_bytes()) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("  {} {path}: invalid base64 content: {e}", "✗".red());
                return None;
            }
        };

        match String::from_utf8(bytes) {
            Ok(text) => Some(text),
            Err(e) => {
                eprintln!("  {} {path}: content is not valid UTF-8: {e}", "✗".red());
                None
            }
        }
    }
}
