//! Source file discovery
//!
//! Features:
//! - Recursive walk of the source directory
//! - One pass per extension: every `.tsx` file first, then every `.ts` file
//! - Paths sorted within each pass so runs are reproducible
//! - Unreadable subdirectories are skipped and reported, not fatal

use crate::domain::SourceExtension;
use crate::error::IoError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the directory scanned beneath the project root
pub const SOURCE_DIR: &str = "src";

/// Files found by a walk, plus the entries the walk could not read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Eligible files in scan order
    pub files: Vec<PathBuf>,
    /// Directories (or entries) skipped because they could not be read
    pub skipped: Vec<PathBuf>,
}

/// Find every file under `dir` with the given extension.
///
/// Symlinked files are included; symlinked directories are not followed.
pub fn find_source_files(dir: &Path, extension: SourceExtension) -> Discovery {
    let mut discovery = Discovery::default();

    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                discovery.skipped.push(path);
                continue;
            }
        };
        let path = entry.path();
        if extension.matches(path) && path.is_file() {
            discovery.files.push(path.to_path_buf());
        }
    }

    discovery.files.sort();
    discovery
}

/// Discover all eligible files under `dir`, in scan order
pub fn discover_files(dir: &Path) -> Result<Discovery, IoError> {
    if !dir.is_dir() {
        return Err(IoError::directory_not_found(dir));
    }

    let mut discovery = Discovery::default();
    for extension in SourceExtension::all() {
        let pass = find_source_files(dir, *extension);
        discovery.files.extend(pass.files);
        discovery.skipped.extend(pass.skipped);
    }

    // Each pass walks the same tree, so it reports the same failures.
    discovery.skipped.sort();
    discovery.skipped.dedup();
    Ok(discovery)
}
