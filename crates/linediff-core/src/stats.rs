//! Aggregate statistics over an edit script.
//!
//! Consumers that only need a change summary (a version-comparison panel,
//! a one-line CLI footer) use these counts instead of walking the script.

use serde::{Deserialize, Serialize};

use crate::line_diff::{DiffLine, LineDiff};

/// Added/removed/common line counts for a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of added lines.
    pub additions: usize,
    /// Number of removed lines.
    pub removals: usize,
    /// Number of unchanged lines.
    pub common: usize,
}

impl DiffStats {
    /// Total number of changed lines.
    pub fn changed(&self) -> usize {
        self.additions + self.removals
    }
}

impl From<&LineDiff> for DiffStats {
    fn from(diff: &LineDiff) -> Self {
        let mut stats = DiffStats::default();
        for line in &diff.lines {
            match line {
                DiffLine::Common(_) => stats.common += 1,
                DiffLine::Added(_) => stats.additions += 1,
                DiffLine::Removed(_) => stats.removals += 1,
            }
        }
        stats
    }
}

impl LineDiff {
    /// Summarize the script as added/removed/common counts.
    pub fn stats(&self) -> DiffStats {
        DiffStats::from(self)
    }
}
