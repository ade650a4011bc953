use linediff_core::{diff_lines, DiffLine, DiffStats, LineDiff};
use linediff_render::{render_summary, render_unified_colored};
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::input::read_text;

/// JSON output document: the edit script plus its summary counts.
#[derive(Serialize)]
struct DiffReport<'a> {
    lines: &'a [DiffLine],
    stats: DiffStats,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let old = read_text(&cli.old)?;
    let new = read_text(&cli.new)?;

    let diff = diff_lines(&old, &new);
    tracing::debug!(
        old = %cli.old.display(),
        new = %cli.new.display(),
        lines = diff.len(),
        "computed line diff"
    );

    print!("{}", render_report(&cli, &diff)?);
    Ok(())
}

fn render_report(cli: &Cli, diff: &LineDiff) -> anyhow::Result<String> {
    let stats = diff.stats();
    match cli.format {
        OutputFormat::Text => {
            if cli.stat {
                Ok(format!("{}\n", render_summary(&stats)))
            } else if diff.is_unchanged() {
                Ok("No changes.\n".to_string())
            } else {
                Ok(format!(
                    "{}{}\n",
                    render_unified_colored(diff),
                    render_summary(&stats)
                ))
            }
        }
        OutputFormat::Json => {
            let json = if cli.stat {
                serde_json::to_string_pretty(&stats)?
            } else {
                serde_json::to_string_pretty(&DiffReport {
                    lines: &diff.lines,
                    stats,
                })?
            };
            Ok(format!("{json}\n"))
        }
    }
}
