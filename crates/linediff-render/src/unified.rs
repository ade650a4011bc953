//! Unified diff text construction.

use colored::Colorize;

use linediff_core::{DiffLine, DiffStats, LineDiff};

/// Render an edit script as plain unified diff text.
///
/// One output line per script line, each terminated by `\n`. An empty
/// script renders to the empty string.
pub fn render_unified(diff: &LineDiff) -> String {
    let mut out = String::new();
    for line in &diff.lines {
        match line {
            DiffLine::Common(text) => {
                out.push(' ');
                out.push_str(text);
            }
            DiffLine::Added(text) => {
                out.push('+');
                out.push_str(text);
            }
            DiffLine::Removed(text) => {
                out.push('-');
                out.push_str(text);
            }
        }
        out.push('\n');
    }
    out
}

/// Render an edit script as unified diff text with terminal colors.
///
/// Added lines are green, removed lines red, common lines unstyled. With
/// colors disabled the output is byte-identical to [`render_unified`].
pub fn render_unified_colored(diff: &LineDiff) -> String {
    let mut out = String::new();
    for line in &diff.lines {
        match line {
            DiffLine::Common(text) => {
                out.push(' ');
                out.push_str(text);
            }
            DiffLine::Added(text) => {
                out.push_str(&format!("+{text}").green().to_string());
            }
            DiffLine::Removed(text) => {
                out.push_str(&format!("-{text}").red().to_string());
            }
        }
        out.push('\n');
    }
    out
}

/// One-line change summary, e.g. `3 additions(+), 1 removal(-)`.
pub fn render_summary(stats: &DiffStats) -> String {
    format!(
        "{} addition{}({}), {} removal{}({})",
        stats.additions,
        if stats.additions == 1 { "" } else { "s" },
        "+".green(),
        stats.removals,
        if stats.removals == 1 { "" } else { "s" },
        "-".red(),
    )
}
