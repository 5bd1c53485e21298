//! Text substitution rule applied to whole-file content

use regex::Regex;
use std::borrow::Cow;

/// A named (pattern, replacement) pair
///
/// The replacement may reference capture groups with `${n}` syntax.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Stable identifier shown in verbose and JSON output
    pub name: &'static str,
    /// Pattern matched against the content
    pub pattern: Regex,
    /// Replacement template for every match
    pub replacement: &'static str,
}

impl Rule {
    /// Creates a new Rule
    pub fn new(name: &'static str, pattern: Regex, replacement: &'static str) -> Self {
        Self {
            name,
            pattern,
            replacement,
        }
    }

    /// Replace all non-overlapping matches.
    ///
    /// Returns the input borrowed when nothing matched.
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(content, self.replacement)
    }
}
