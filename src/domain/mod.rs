//! Core domain models for unpin
//!
//! This module contains the fundamental types used throughout the application:
//! - Source extensions eligible for rewriting
//! - Substitution rules
//! - Per-file and per-run result structures

mod extension;
mod rule;
mod summary;

pub use extension::SourceExtension;
pub use rule::Rule;
pub use summary::{FileOutcome, FileRecord, RunSummary};
