use std::time::Duration;

/// Statistics collected during batch processing
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    pub logs_read: usize,
    pub logs_parsed: usize,
    pub levels_produced: usize,
    pub errors: usize,
    pub processing_time: Duration,
}

impl ProcessingStats {
    pub fn format_stats(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Logs processed: {} total, {} parsed",
            self.logs_read, self.logs_parsed
        ));

        if self.errors > 0 {
            output.push_str(&format!(", {} failed", self.errors));
        }

        output.push_str(&format!("; {} levels", self.levels_produced));

        let processing_time_ms = self.processing_time.as_millis();
        output.push_str(&format!(" in {}ms", processing_time_ms));

        if processing_time_ms > 0 && self.logs_read > 0 {
            let logs_per_sec = (self.logs_read as f64 * 1000.0) / processing_time_ms as f64;
            output.push_str(&format!(" ({:.0} logs/s)", logs_per_sec));
        }

        output
    }
}
