use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "linediff",
    about = "Line-level diff between two text files",
    version,
)]
pub struct Cli {
    /// The old file.
    pub old: PathBuf,

    /// The new file.
    pub new: PathBuf,

    /// Print only the change summary, not the diff body.
    #[arg(long)]
    pub stat: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
