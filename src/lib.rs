//! unpin - versioned-import rewriter library
//!
//! Strips version pins such as `@radix-ui/react-dialog@1.1.6` or
//! `sonner@2.0.3` from import specifiers in every `.tsx` and `.ts` file
//! beneath a project's `src` directory.

pub mod cli;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod rewriter;
pub mod scanner;

pub use rewriter::fix_imports_in_file;
