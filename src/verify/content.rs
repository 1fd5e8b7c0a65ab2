//! Content-rule evaluation against the fetched file.

use regex::Regex;

use crate::config::ContentRule;

/// Evaluate a single rule against the full file content.
///
/// Returns the failure detail on a miss. An invalid user-supplied regex
/// fails the rule rather than aborting the run.
pub fn evaluate_rule(content: &str, rule: &ContentRule) -> Result<(), String> {
    let matched = match rule {
        ContentRule::StatMatch { target, expected } => stat_matches(content, target, expected),
        ContentRule::RegexMatch { target, expected } => match Regex::new(expected) {
            Ok(regex) => regex.is_match(content),
            Err(e) => {
                return Err(format!("{target}: invalid pattern '{expected}': {e}"));
            }
        },
        ContentRule::TextMatch { expected, .. } => content.contains(expected.as_str()),
    };

    if matched {
        Ok(())
    } else {
        Err(format!(
            "{}: expected {}, no match in content",
            rule.target(),
            rule.expected()
        ))
    }
}

/// A stat rule passes when the first line containing `target` carries
/// `expected` as its first numeric token. The comparison is on the matched
/// text, not the numeric value: "1000.5" does not satisfy an expected
/// "1000", and "1000" does not satisfy "1000.0".
fn stat_matches(content: &str, target: &str, expected: &str) -> bool {
    content
        .lines()
        .find(|line| line.contains(target))
        .and_then(extract_stat)
        .is_some_and(|stat| stat == expected)
}

/// Extract the first integer or decimal token from a line.
fn extract_stat(line: &str) -> Option<&str> {
    let re = Regex::new(r"\d+(?:\.\d+)?").ok()?;
    re.find(line).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_stat_integer() {
        assert_eq!(extract_stat("总用户数：1000"), Some("1000"));
    }

    #[test]
    fn test_extract_stat_decimal() {
        assert_eq!(extract_stat("rate: 99.5 percent"), Some("99.5"));
    }

    #[test]
    fn test_extract_stat_first_token_wins() {
        assert_eq!(extract_stat("10 of 20 items"), Some("10"));
    }

    #[test]
    fn test_extract_stat_no_number() {
        assert_eq!(extract_stat("no numbers here"), None);
    }
}
