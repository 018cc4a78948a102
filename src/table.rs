use std::io::Write;

use anyhow::Result;
use serde_json::{json, Map, Value};

use crate::summary::LevelSummary;
use crate::token::BOOSTER_VOCABULARY;

/// Flat, row-oriented view over a batch of per-log level summaries.
///
/// Rows are the levels of the first log in level order, then the second
/// log's, and so on. The column set is fixed: the four summary fields
/// followed by one column per booster identifier, in vocabulary order.
#[derive(Debug, Default)]
pub struct SummaryTable {
    rows: Vec<LevelSummary>,
}

impl SummaryTable {
    pub fn from_logs(logs: Vec<Vec<LevelSummary>>) -> Self {
        Self {
            rows: logs.into_iter().flatten().collect(),
        }
    }

    pub fn columns() -> Vec<&'static str> {
        let mut columns = vec!["level_index", "win_rate", "loses", "churn"];
        columns.extend(BOOSTER_VOCABULARY);
        columns
    }

    pub fn rows(&self) -> &[LevelSummary] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table as delimited text via the csv writer. `delimiter` is
    /// `b','` for CSV and `b'\t'` for TSV.
    pub fn write_delimited<W: Write>(
        &self,
        output: W,
        delimiter: u8,
        include_header: bool,
    ) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(output);

        if include_header {
            writer.write_record(Self::columns())?;
        }
        for row in &self.rows {
            writer.write_record(Self::record(row))?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Write the table as JSON Lines, one flattened row object per line.
    pub fn write_jsonl<W: Write>(&self, mut output: W) -> Result<()> {
        for row in &self.rows {
            let object = Value::Object(Self::json_row(row));
            serde_json::to_writer(&mut output, &object)?;
            writeln!(output)?;
        }

        Ok(())
    }

    fn record(row: &LevelSummary) -> Vec<String> {
        let mut fields = Vec::with_capacity(4 + BOOSTER_VOCABULARY.len());
        fields.push(row.level_index.to_string());
        fields.push(row.win_rate.to_string());
        fields.push(row.loses.to_string());
        fields.push(row.churn.to_string());
        for count in row.boosters.values() {
            fields.push(count.to_string());
        }
        fields
    }

    fn json_row(row: &LevelSummary) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert("level_index".to_string(), json!(row.level_index));
        object.insert("win_rate".to_string(), json!(row.win_rate));
        object.insert("loses".to_string(), json!(row.loses));
        object.insert("churn".to_string(), json!(row.churn));
        for (booster, count) in &row.boosters {
            object.insert((*booster).to_string(), json!(count));
        }
        object
    }
}
