//! Import specifier rewriting
//!
//! This module provides:
//! - The fixed rule set for stripping version pins
//! - Pure content rewriting with per-rule match tracking
//! - In-place file rewriting with dry-run support

pub mod rules;

use crate::domain::{FileOutcome, FileRecord, Rule};
use crate::error::RewriteError;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Result of rewriting a piece of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    /// Rewritten content (borrowed when no rule matched)
    pub content: Cow<'a, str>,
    /// Names of the rules that replaced at least one match
    pub applied: Vec<&'static str>,
}

/// Applies an ordered rule list to source content
#[derive(Debug, Clone)]
pub struct ImportRewriter {
    rules: Vec<Rule>,
}

impl ImportRewriter {
    /// Create a rewriter with the default rule set
    pub fn new() -> Self {
        Self::with_rules(rules::default_rules())
    }

    /// Create a rewriter with a custom rule list
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Returns the rules in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rewrite content, returning it unchanged (borrowed) when nothing matched
    pub fn rewrite<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.apply(content).content
    }

    /// Rewrite content and report which rules fired
    pub fn apply<'a>(&self, content: &'a str) -> Rewrite<'a> {
        let mut current = Cow::Borrowed(content);
        let mut applied = Vec::new();

        for rule in &self.rules {
            let replaced = match rule.apply(&current) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            if let Some(s) = replaced {
                current = Cow::Owned(s);
                applied.push(rule.name);
            }
        }

        Rewrite {
            content: current,
            applied,
        }
    }

    /// Rewrite a file in place.
    ///
    /// The file is only written when its content changed; the new content is
    /// fully computed before the write starts.
    pub fn fix_file(&self, path: &Path) -> Result<FileOutcome, RewriteError> {
        let outcome = self.preview_file(path)?;

        if let FileOutcome::Modified(record) = &outcome {
            fs::write(path, &record.after).map_err(|e| RewriteError::write_error(path, e))?;
        }

        Ok(outcome)
    }

    /// Compute the outcome for a file without writing it
    pub fn preview_file(&self, path: &Path) -> Result<FileOutcome, RewriteError> {
        let before = fs::read_to_string(path).map_err(|e| RewriteError::read_error(path, e))?;

        let Rewrite { content, applied } = self.apply(&before);
        if content == before.as_str() {
            return Ok(FileOutcome::Unmodified);
        }

        let after = content.into_owned();
        Ok(FileOutcome::Modified(FileRecord::new(
            path, before, after, applied,
        )))
    }
}

impl Default for ImportRewriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite a single file with the default rules.
///
/// Returns true if the file was modified.
pub fn fix_imports_in_file(path: &Path) -> Result<bool, RewriteError> {
    ImportRewriter::new()
        .fix_file(path)
        .map(|outcome| outcome.is_modified())
}
