//! The fixed set of version-pin removal rules
//!
//! Rules are applied in this order, each over the output of the previous one:
//! 1. `@<scope>/<name>@<version>` → `@<scope>/<name>`
//! 2. `lucide-react@<version>` → `lucide-react`
//! 3. `next-themes@<version>` → `next-themes`
//! 4. `sonner@<version>` → `sonner`
//!
//! `<version>` is one or more digits and dots. `<name>` may contain anything
//! except `@`, `"` and `'`, slashes included.

use crate::domain::Rule;
use regex::Regex;
use std::sync::LazyLock;

/// Rule name for scoped packages
pub const SCOPED_PACKAGE: &str = "scoped-package";
/// Rule name for lucide-react
pub const LUCIDE_REACT: &str = "lucide-react";
/// Rule name for next-themes
pub const NEXT_THEMES: &str = "next-themes";
/// Rule name for sonner
pub const SONNER: &str = "sonner";

static SCOPED_PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@([^@"'/\s]+)/([^@"']+)@[\d.]+"#).unwrap());
static LUCIDE_REACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"lucide-react@[\d.]+").unwrap());
static NEXT_THEMES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"next-themes@[\d.]+").unwrap());
static SONNER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"sonner@[\d.]+").unwrap());

/// Returns the four rules in application order
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(SCOPED_PACKAGE, SCOPED_PACKAGE_RE.clone(), "@${1}/${2}"),
        Rule::new(LUCIDE_REACT, LUCIDE_REACT_RE.clone(), "lucide-react"),
        Rule::new(NEXT_THEMES, NEXT_THEMES_RE.clone(), "next-themes"),
        Rule::new(SONNER, SONNER_RE.clone(), "sonner"),
    ]
}
