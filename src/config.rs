use clap::ValueEnum;

/// Main configuration struct for Ludolog
#[derive(Debug, Clone)]
pub struct LudologConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub processing: ProcessingConfig,
    pub performance: PerformanceConfig,
}

/// Input configuration
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub files: Vec<String>,
    pub delimiter: String,
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub file: Option<String>,
    pub no_header: bool,
    pub stats: bool,
}

/// Processing configuration
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    pub on_error: ErrorStrategy,
}

/// Performance configuration
#[derive(Debug, Clone)]
pub struct PerformanceConfig {
    pub parallel: bool,
    pub threads: usize,
}

/// Output format enumeration
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Jsonl,
}

/// Batch error strategy. `Abort` fails the whole batch on the first bad
/// log; `Collect` reports each bad log on stderr and keeps the rest.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorStrategy {
    #[default]
    Abort,
    Collect,
}

impl LudologConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            input: InputConfig {
                files: cli.files.clone(),
                delimiter: cli.delimiter.clone(),
            },
            output: OutputConfig {
                format: cli.output_format,
                file: cli.output_file.clone(),
                no_header: cli.no_header,
                stats: cli.stats,
            },
            processing: ProcessingConfig {
                on_error: cli.on_error,
            },
            performance: PerformanceConfig {
                parallel: cli.parallel,
                threads: cli.threads,
            },
        }
    }

    /// Check if parallel processing should be used
    pub fn should_use_parallel(&self) -> bool {
        self.performance.parallel || self.performance.threads > 0
    }

    /// Get effective thread count with defaults
    pub fn effective_threads(&self) -> usize {
        if self.performance.threads == 0 {
            num_cpus::get()
        } else {
            self.performance.threads
        }
    }
}

impl Default for LudologConfig {
    fn default() -> Self {
        Self {
            input: InputConfig {
                files: Vec::new(),
                delimiter: " ".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Csv,
                file: None,
                no_header: false,
                stats: false,
            },
            processing: ProcessingConfig {
                on_error: ErrorStrategy::Abort,
            },
            performance: PerformanceConfig {
                parallel: false,
                threads: 0,
            },
        }
    }
}
