use clap::Parser;

use crate::config::{ErrorStrategy, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "ludolog")]
#[command(about = "A command-line game progression log analyzer")]
#[command(
    long_about = "A command-line game progression log analyzer\n\nReads player event logs (one log per line) and emits a per-level summary table:\nwin rate, retry count, churn flag, and booster usage counts for every level."
)]
#[command(version)]
pub struct Cli {
    /// Input files, one log per line; stdin when omitted
    pub files: Vec<String>,

    #[arg(
        short = 'd',
        long = "delimiter",
        default_value = " ",
        help = "Token delimiter within a log",
        help_heading = "Input Options"
    )]
    pub delimiter: String,

    #[arg(
        long = "on-error",
        value_enum,
        default_value = "abort",
        help = "Whether a bad log fails the whole batch or is reported and skipped",
        help_heading = "Processing Options"
    )]
    pub on_error: ErrorStrategy,

    #[arg(
        short = 'F',
        long = "output-format",
        value_enum,
        default_value = "csv",
        help_heading = "Output Options"
    )]
    pub output_format: OutputFormat,

    #[arg(
        long = "no-header",
        help = "Suppress the header row in csv/tsv output",
        help_heading = "Output Options"
    )]
    pub no_header: bool,

    #[arg(
        short = 'o',
        long = "output-file",
        help = "Write the table to a file instead of stdout",
        help_heading = "Output Options"
    )]
    pub output_file: Option<String>,

    #[arg(
        long = "parallel",
        help = "Parse logs on a worker pool sized to the CPU count",
        help_heading = "Performance Options"
    )]
    pub parallel: bool,

    #[arg(
        long = "threads",
        default_value_t = 0,
        help = "Worker pool size; nonzero implies --parallel, 0 selects the CPU count",
        help_heading = "Performance Options"
    )]
    pub threads: usize,

    #[arg(
        short = 's',
        long = "stats",
        help = "Print processing statistics to stderr",
        help_heading = "Display Options"
    )]
    pub stats: bool,
}
