use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};

/// Collect raw logs, one per non-empty line, from the given files in
/// argument order, or from stdin when no files are given.
pub fn collect_logs(files: &[String]) -> Result<Vec<String>> {
    let mut logs = Vec::new();

    if files.is_empty() {
        let stdin = io::stdin();
        collect_from_reader(stdin.lock(), &mut logs)?;
    } else {
        for path in files {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file '{}'", path))?;
            collect_from_reader(BufReader::new(file), &mut logs)
                .with_context(|| format!("Failed to read input file '{}'", path))?;
        }
    }

    Ok(logs)
}

fn collect_from_reader<R: BufRead>(reader: R, logs: &mut Vec<String>) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        let log = line.trim();
        if !log.is_empty() {
            logs.push(log.to_string());
        }
    }

    Ok(())
}
