//! Exclude-pattern matching over slash-normalized paths
//!
//! A pattern excludes a path when any of three checks hits:
//! (a) the pattern is a case-insensitive substring of the path,
//! (b) a non-wildcard `/`-segment of the pattern, converted from simple
//!     glob to a regex anchored to a full segment, matches any path
//!     segment, or
//! (c) the whole pattern, converted the same way, matches the whole path.
//! A failed glob-to-regex conversion falls back to the substring check.

use regex::{Regex, RegexBuilder};

/// Check a path against every exclude pattern
pub fn is_excluded(path: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| matches_pattern(path, p))
}

/// Check a path against one exclude pattern
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    let path = path.replace('\\', "/");
    let pattern = pattern.replace('\\', "/");

    if path.to_lowercase().contains(&pattern.to_lowercase()) {
        return true;
    }

    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    for seg in pattern.split('/') {
        // A wildcard-only segment carries no anchor and would match every
        // path segment; only named segments participate in this check.
        if seg.is_empty() || seg.chars().all(|c| c == '*' || c == '?') {
            continue;
        }
        match glob_to_regex(seg) {
            Some(re) => {
                if path_segments.iter().any(|s| re.is_match(s)) {
                    return true;
                }
            }
            None => {
                if path_segments.iter().any(|s| s.eq_ignore_ascii_case(seg)) {
                    return true;
                }
            }
        }
    }

    match glob_to_regex(&pattern) {
        Some(re) => re.is_match(&path),
        None => path.to_lowercase().contains(&pattern.to_lowercase()),
    }
}

/// Convert a simple glob (`*` any-run, `?` any-char) to an anchored,
/// case-insensitive regex
fn glob_to_regex(glob: &str) -> Option<Regex> {
    let mut source = String::with_capacity(glob.len() + 4);
    source.push('^');
    for c in glob.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(&c.to_string())),
        }
    }
    source.push('$');

    RegexBuilder::new(&source).case_insensitive(true).build().ok()
}
