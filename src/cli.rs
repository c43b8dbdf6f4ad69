use std::path::PathBuf;

use clap::Parser;

use crate::stats::DEFAULT_TOP_LANGUAGES;

#[derive(Parser, Debug)]
#[command(name = "loc-badge")]
#[command(author, version, about = "Render a lines-of-code breakdown as a static SVG stats card")]
#[command(long_about = "Reads the JSON line count breakdown produced by the upstream counter\n\
    and renders a static SVG card with totals and a top-languages chart.\n\n\
    Exit codes:\n  \
    0 - Card rendered successfully\n  \
    1 - Input file not found\n  \
    2 - Malformed input or I/O failure")]
pub struct Cli {
    /// Path to the line count JSON document
    #[arg(short, long, default_value = "loc-data.json")]
    pub input: PathBuf,

    /// Path the rendered SVG card is written to
    #[arg(short, long, default_value = "loc-stats.svg")]
    pub output: PathBuf,

    /// Number of languages shown in the chart
    #[arg(long, default_value_t = DEFAULT_TOP_LANGUAGES)]
    pub top: usize,

    /// Suppress the success message
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
