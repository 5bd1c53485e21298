//! Source file extensions eligible for rewriting

use std::fmt;
use std::path::Path;

/// File extensions scanned under the source directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceExtension {
    /// TypeScript with JSX (`.tsx`)
    Tsx,
    /// Plain TypeScript (`.ts`)
    Ts,
}

impl SourceExtension {
    /// Returns the extension without the leading dot
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceExtension::Tsx => "tsx",
            SourceExtension::Ts => "ts",
        }
    }

    /// Returns all extensions in scan order (`.tsx` pass first, then `.ts`)
    pub fn all() -> &'static [SourceExtension] {
        &[SourceExtension::Tsx, SourceExtension::Ts]
    }

    /// Check whether a path carries exactly this extension.
    ///
    /// `button.tsx` does not match [`SourceExtension::Ts`].
    pub fn matches(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.as_str())
    }
}

impl fmt::Display for SourceExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(SourceExtension::Tsx.as_str(), "tsx");
        assert_eq!(SourceExtension::Ts.as_str(), "ts");
    }

    #[test]
    fn test_scan_order() {
        assert_eq!(
            SourceExtension::all(),
            &[SourceExtension::Tsx, SourceExtension::Ts]
        );
    }

    #[test]
    fn test_matches_exact_extension() {
        assert!(SourceExtension::Tsx.matches(Path::new("src/components/Button.tsx")));
        assert!(!SourceExtension::Ts.matches(Path::new("src/components/Button.tsx")));
        assert!(SourceExtension::Ts.matches(Path::new("src/lib/utils.ts")));
        assert!(SourceExtension::Ts.matches(Path::new("src/vite-env.d.ts")));
        assert!(!SourceExtension::Tsx.matches(Path::new("src/lib/utils.ts")));
    }

    #[test]
    fn test_matches_rejects_other_files() {
        assert!(!SourceExtension::Ts.matches(Path::new("src/index.css")));
        assert!(!SourceExtension::Ts.matches(Path::new("src/ts")));
        assert!(!SourceExtension::Tsx.matches(Path::new("src/App.jsx")));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SourceExtension::Tsx), ".tsx");
        assert_eq!(format!("{}", SourceExtension::Ts), ".ts");
    }
}
