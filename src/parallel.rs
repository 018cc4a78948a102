use std::thread;

use crossbeam_channel::bounded;
use thiserror::Error;

use crate::config::ErrorStrategy;
use crate::parser::{LogParser, ParseError};
use crate::summary::LevelSummary;

/// Configuration for parallel batch processing
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    pub num_workers: usize,
    pub delimiter: String,
    pub on_error: ErrorStrategy,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            delimiter: " ".to_string(),
            on_error: ErrorStrategy::Abort,
        }
    }
}

/// A parse failure tied to the submission index of the log that caused it.
/// The message embeds the underlying parse error, so the chain is not also
/// exposed through `source()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("log {log_index}: {error}")]
pub struct BatchError {
    pub log_index: usize,
    pub error: ParseError,
}

/// Result of processing one batch of logs.
///
/// `summaries` holds the per-log level sequences in submission order. Under
/// the `collect` strategy, failed logs are recorded in `errors` (also in
/// submission order) and contribute no summaries; under `abort` the batch
/// fails on the first error instead and `errors` stays empty.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub summaries: Vec<Vec<LevelSummary>>,
    pub errors: Vec<BatchError>,
}

/// A single log tagged with its submission index.
struct Task {
    log_index: usize,
    log: String,
}

struct TaskResult {
    log_index: usize,
    result: Result<Vec<LevelSummary>, ParseError>,
}

/// Scatter-gather processor: fans independent log parses out over a fixed
/// worker pool and reassembles the results in submission order.
pub struct ParallelProcessor {
    config: ParallelConfig,
}

impl ParallelProcessor {
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    pub fn process(&self, logs: Vec<String>) -> Result<BatchOutcome, BatchError> {
        let total = logs.len();
        if total == 0 {
            return Ok(BatchOutcome::default());
        }

        // More workers than logs would just idle.
        let num_workers = self.config.num_workers.clamp(1, total);

        // Both channels are sized to the whole batch, so no send can block.
        let (task_sender, task_receiver) = bounded::<Task>(total);
        let (result_sender, result_receiver) = bounded::<TaskResult>(total);

        for (log_index, log) in logs.into_iter().enumerate() {
            if task_sender.send(Task { log_index, log }).is_err() {
                break;
            }
        }
        drop(task_sender);

        let mut worker_handles = Vec::with_capacity(num_workers);
        for _ in 0..num_workers {
            let task_receiver = task_receiver.clone();
            let result_sender = result_sender.clone();
            let parser = LogParser::with_delimiter(&self.config.delimiter);

            worker_handles.push(thread::spawn(move || {
                while let Ok(task) = task_receiver.recv() {
                    let result = parser.parse(&task.log);
                    let task_result = TaskResult {
                        log_index: task.log_index,
                        result,
                    };
                    if result_sender.send(task_result).is_err() {
                        break;
                    }
                }
            }));
        }
        drop(task_receiver);
        drop(result_sender);

        // Join point: gather in completion order, then restore submission
        // order before assembling the outcome.
        let mut results: Vec<TaskResult> = Vec::with_capacity(total);
        while let Ok(task_result) = result_receiver.recv() {
            results.push(task_result);
        }
        for handle in worker_handles {
            handle.join().expect("worker thread panicked");
        }
        results.sort_by_key(|task_result| task_result.log_index);

        let mut outcome = BatchOutcome::default();
        for task_result in results {
            match task_result.result {
                Ok(levels) => outcome.summaries.push(levels),
                Err(parse_error) => {
                    let error = BatchError {
                        log_index: task_result.log_index,
                        error: parse_error,
                    };
                    match self.config.on_error {
                        ErrorStrategy::Abort => return Err(error),
                        ErrorStrategy::Collect => outcome.errors.push(error),
                    }
                }
            }
        }

        Ok(outcome)
    }
}
