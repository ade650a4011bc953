//! Line-level diff: LCS edit script between two texts.
//!
//! The algorithm builds a dense dynamic-programming table of longest common
//! subsequence lengths over the line sequences of both inputs, then walks
//! it backward to reconstruct a minimal edit script. Line equality is exact
//! string equality; there is no trimming or case folding.

use serde::{Deserialize, Serialize};

/// A single line of an edit script.
///
/// The payload is the line's content without the trailing `\n` separator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum DiffLine {
    /// A line present in both the old and the new text.
    Common(String),
    /// A line present only in the new text.
    Added(String),
    /// A line present only in the old text.
    Removed(String),
}

impl DiffLine {
    /// The line's content.
    pub fn text(&self) -> &str {
        match self {
            DiffLine::Common(s) | DiffLine::Added(s) | DiffLine::Removed(s) => s,
        }
    }
}

/// The result of diffing two texts: an ordered edit script.
///
/// Lines appear in top-to-bottom document order. Filtering to common and
/// removed lines reconstructs the old text's line sequence; filtering to
/// common and added lines reconstructs the new text's.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// The edit script.
    pub lines: Vec<DiffLine>,
}

impl LineDiff {
    /// Returns `true` if the script is empty (both inputs had no lines).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines in the script.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the two texts were identical.
    pub fn is_unchanged(&self) -> bool {
        self.lines
            .iter()
            .all(|l| matches!(l, DiffLine::Common(_)))
    }

    /// Total number of added lines.
    pub fn additions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, DiffLine::Added(_)))
            .count()
    }

    /// Total number of removed lines.
    pub fn removals(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, DiffLine::Removed(_)))
            .count()
    }

    /// The old text's line sequence, reconstructed from the script.
    pub fn old_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|l| matches!(l, DiffLine::Common(_) | DiffLine::Removed(_)))
            .map(DiffLine::text)
    }

    /// The new text's line sequence, reconstructed from the script.
    pub fn new_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|l| matches!(l, DiffLine::Common(_) | DiffLine::Added(_)))
            .map(DiffLine::text)
    }
}

/// Split a text into lines on `\n` only.
///
/// The empty string has zero lines, not one empty line. No carriage-return
/// normalization is performed, and a trailing `\n` yields a final empty
/// line, matching plain single-separator splitting.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

/// Compute the line-level edit script turning `old_text` into `new_text`.
///
/// Total over all string inputs: identical texts produce an all-common
/// script, an empty old text produces an all-added script, an empty new
/// text an all-removed one. Time and space are O(n * m) in the two line
/// counts, so callers wanting a responsiveness bound should cap input size
/// before invoking the engine.
///
/// When the backward walk hits an LCS tie, the script takes the added line
/// first. That ordering is part of the output contract: consumers compare
/// rendered diffs byte for byte, so ambiguous cases (duplicate-line
/// insertions, reorderings) must not drift between versions.
pub fn diff_lines(old_text: &str, new_text: &str) -> LineDiff {
    let old = split_lines(old_text);
    let new = split_lines(new_text);
    let n = old.len();
    let m = new.len();

    // lcs[i][j] = LCS length of old[..i] and new[..j].
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            lcs[i][j] = if old[i - 1] == new[j - 1] {
                lcs[i - 1][j - 1] + 1
            } else {
                lcs[i - 1][j].max(lcs[i][j - 1])
            };
        }
    }

    // Backward walk emits the script in reverse document order.
    let mut lines = Vec::with_capacity(n.max(m));
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            lines.push(DiffLine::Common(old[i - 1].to_string()));
            i -= 1;
            j -= 1;
        } else if lcs[i - 1][j] > lcs[i][j - 1] {
            lines.push(DiffLine::Removed(old[i - 1].to_string()));
            i -= 1;
        } else {
            // Ties land here: favor the added line.
            lines.push(DiffLine::Added(new[j - 1].to_string()));
            j -= 1;
        }
    }
    while i > 0 {
        lines.push(DiffLine::Removed(old[i - 1].to_string()));
        i -= 1;
    }
    while j > 0 {
        lines.push(DiffLine::Added(new[j - 1].to_string()));
        j -= 1;
    }
    lines.reverse();

    LineDiff { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common(s: &str) -> DiffLine {
        DiffLine::Common(s.to_string())
    }

    fn added(s: &str) -> DiffLine {
        DiffLine::Added(s.to_string())
    }

    fn removed(s: &str) -> DiffLine {
        DiffLine::Removed(s.to_string())
    }

    #[test]
    fn empty_inputs_empty_script() {
        let diff = diff_lines("", "");
        assert!(diff.is_empty());
        assert!(diff.is_unchanged());
    }

    #[test]
    fn identical_texts_all_common() {
        let diff = diff_lines("a\nb\nc", "a\nb\nc");
        assert_eq!(diff.lines, vec![common("a"), common("b"), common("c")]);
        assert!(diff.is_unchanged());
        assert_eq!(diff.additions(), 0);
        assert_eq!(diff.removals(), 0);
    }

    #[test]
    fn pure_insertion_in_order() {
        let diff = diff_lines("", "line1\nline2");
        assert_eq!(diff.lines, vec![added("line1"), added("line2")]);
    }

    #[test]
    fn pure_deletion_in_order() {
        let diff = diff_lines("line1\nline2", "");
        assert_eq!(diff.lines, vec![removed("line1"), removed("line2")]);
    }

    #[test]
    fn single_substitution() {
        let diff = diff_lines("line1\nline2\nline3", "line1\nline2 modified\nline3");
        assert_eq!(
            diff.lines,
            vec![
                common("line1"),
                removed("line2"),
                added("line2 modified"),
                common("line3"),
            ]
        );
    }

    #[test]
    fn interleaved_change() {
        let diff = diff_lines("A\nB\nC\nD\nE", "A\nB\nX\nD\nE");
        assert_eq!(
            diff.lines,
            vec![
                common("A"),
                common("B"),
                removed("C"),
                added("X"),
                common("D"),
                common("E"),
            ]
        );
    }

    #[test]
    fn duplicate_line_insertion_takes_added_first() {
        // Ambiguous: the inserted "b" could pair with either occurrence.
        // The tie-break pins the added line before the surviving common one.
        let diff = diff_lines("a\nb", "a\nb\nb");
        assert_eq!(diff.lines, vec![common("a"), added("b"), common("b")]);
    }

    #[test]
    fn reorder_of_identical_lines_is_stable() {
        let diff = diff_lines("x\ny", "y\nx");
        assert_eq!(diff.lines, vec![removed("x"), common("y"), added("x")]);
    }

    #[test]
    fn trailing_newline_yields_final_empty_line() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        let diff = diff_lines("a", "a\n");
        assert_eq!(diff.lines, vec![common("a"), added("")]);
    }

    #[test]
    fn no_carriage_return_normalization() {
        // "\r" stays attached to the line content, so the lines differ.
        let diff = diff_lines("a\r\nb", "a\nb");
        assert_eq!(
            diff.lines,
            vec![removed("a\r"), added("a"), common("b")]
        );
    }

    #[test]
    fn reconstruction_both_directions() {
        let old = "fn main() {\n    println!(\"hi\");\n}\n";
        let new = "fn main() {\n    let name = \"world\";\n    println!(\"hi {name}\");\n}\n";
        let diff = diff_lines(old, new);
        assert_eq!(diff.old_lines().collect::<Vec<_>>(), split_lines(old));
        assert_eq!(diff.new_lines().collect::<Vec<_>>(), split_lines(new));
    }

    #[test]
    fn serde_shape_is_kind_and_text() {
        let json = serde_json::to_value(added("hello")).unwrap();
        assert_eq!(json["kind"], "added");
        assert_eq!(json["text"], "hello");

        let back: DiffLine =
            serde_json::from_value(serde_json::json!({"kind": "removed", "text": "x"})).unwrap();
        assert_eq!(back, removed("x"));
    }
}
