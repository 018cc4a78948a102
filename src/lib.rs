// Core library for Ludolog game progression log analysis

pub mod cli;
pub mod config;
mod parallel;
mod parser;
mod readers;
mod segmenter;
mod stats;
mod summary;
mod table;
mod token;

use std::io::Write;
use std::time::Instant;

use anyhow::Result;

pub use config::{ErrorStrategy, LudologConfig, OutputFormat};
pub use parallel::{BatchError, BatchOutcome, ParallelConfig, ParallelProcessor};
pub use parser::{LogParser, ParseError};
pub use segmenter::segment;
pub use stats::ProcessingStats;
pub use summary::LevelSummary;
pub use table::SummaryTable;
pub use token::{Token, BOOSTER_VOCABULARY};

/// Parse a single raw log into its ordered per-level summaries, using the
/// default single-space delimiter.
pub fn parse(log: &str) -> Result<Vec<LevelSummary>, ParseError> {
    LogParser::new().parse(log)
}

/// Parse a batch of logs on a worker pool and flatten the result into one
/// summary table. Fails on the first bad log; row order follows the batch's
/// submission order.
pub fn summarize(logs: Vec<String>) -> Result<SummaryTable, BatchError> {
    let outcome = ParallelProcessor::new(ParallelConfig::default()).process(logs)?;
    Ok(SummaryTable::from_logs(outcome.summaries))
}

/// Core batch entry point for the CLI: collect logs per the configuration,
/// parse them (parallel or sequential), and write the summary table to
/// `output`. Collected per-log failures are reported on stderr.
pub fn run_batch<W: Write>(config: &LudologConfig, mut output: W) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    let logs = readers::collect_logs(&config.input.files)?;
    let logs_read = logs.len();

    let outcome = if config.should_use_parallel() {
        let parallel_config = ParallelConfig {
            num_workers: config.effective_threads(),
            delimiter: config.input.delimiter.clone(),
            on_error: config.processing.on_error,
        };
        ParallelProcessor::new(parallel_config).process(logs)?
    } else {
        process_sequential(config, logs)?
    };

    for error in &outcome.errors {
        eprintln!("ludolog: {}", error);
    }

    let table = SummaryTable::from_logs(outcome.summaries);
    match config.output.format {
        OutputFormat::Csv => table.write_delimited(&mut output, b',', !config.output.no_header)?,
        OutputFormat::Tsv => table.write_delimited(&mut output, b'\t', !config.output.no_header)?,
        OutputFormat::Jsonl => table.write_jsonl(&mut output)?,
    }

    Ok(ProcessingStats {
        logs_read,
        logs_parsed: logs_read - outcome.errors.len(),
        levels_produced: table.len(),
        errors: outcome.errors.len(),
        processing_time: start_time.elapsed(),
    })
}

/// Parse logs on the calling thread, in submission order. Produces the same
/// outcome as the worker pool.
fn process_sequential(
    config: &LudologConfig,
    logs: Vec<String>,
) -> Result<BatchOutcome, BatchError> {
    let parser = LogParser::with_delimiter(&config.input.delimiter);
    let mut outcome = BatchOutcome::default();

    for (log_index, log) in logs.into_iter().enumerate() {
        match parser.parse(&log) {
            Ok(levels) => outcome.summaries.push(levels),
            Err(parse_error) => {
                let error = BatchError {
                    log_index,
                    error: parse_error,
                };
                match config.processing.on_error {
                    ErrorStrategy::Abort => return Err(error),
                    ErrorStrategy::Collect => outcome.errors.push(error),
                }
            }
        }
    }

    Ok(outcome)
}
