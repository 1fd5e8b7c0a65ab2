//! Required-structure containment checks.

/// Return every required structure missing from `content`, in config order.
///
/// Structures are literal substrings (headings, table headers, markers);
/// position within the content does not matter.
pub fn missing_structures(content: &str, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|s| !content.contains(s.as_str()))
        .cloned()
        .collect()
}
