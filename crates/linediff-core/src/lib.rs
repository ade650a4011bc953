//! Line diff engine.
//!
//! Computes a line-level edit script between two texts using a Longest
//! Common Subsequence table, classifying every output line as common,
//! added, or removed. The engine is a pure function: text in, structured
//! diff out, with no I/O and no cross-call state.
//!
//! # Key Types
//!
//! - [`DiffLine`] -- One classified line of the edit script
//! - [`LineDiff`] -- The full edit script in document order
//! - [`DiffStats`] -- Added/removed/common counts for a diff summary

pub mod line_diff;
pub mod stats;

pub use line_diff::{diff_lines, split_lines, DiffLine, LineDiff};
pub use stats::DiffStats;
