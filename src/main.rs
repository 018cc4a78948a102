use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use ludolog::cli::Cli;
use ludolog::{run_batch, LudologConfig, ProcessingStats};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = LudologConfig::from_cli(&cli);

    match run(&config) {
        Ok(stats) => {
            if config.output.stats {
                eprintln!("{}", stats.format_stats());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ludolog: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &LudologConfig) -> Result<ProcessingStats> {
    match &config.output.file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path))?;
            let mut writer = BufWriter::new(file);
            let stats = run_batch(config, &mut writer)?;
            writer.flush()?;
            Ok(stats)
        }
        None => {
            let stdout = io::stdout();
            run_batch(config, stdout.lock())
        }
    }
}
