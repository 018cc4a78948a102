use thiserror::Error;

use crate::segmenter;
use crate::summary::{self, LevelSummary};
use crate::token::{self, Token};

/// Errors raised while parsing a single log.
///
/// Both kinds are fatal for the log they occur in: no partial summary
/// sequence is ever returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("wrong start token: expected '{expected}', got '{actual}'")]
    MalformedLog {
        expected: &'static str,
        actual: String,
    },
    #[error("unknown token '{token}' in level {level_index}")]
    UnknownToken { token: String, level_index: usize },
}

/// Parses one raw log into an ordered sequence of level summaries.
pub struct LogParser {
    delimiter: String,
}

impl LogParser {
    pub fn new() -> Self {
        Self {
            delimiter: " ".to_string(),
        }
    }

    pub fn with_delimiter(delimiter: &str) -> Self {
        Self {
            delimiter: delimiter.to_string(),
        }
    }

    /// Tokenize, validate the `start` head token, segment into level
    /// windows, and aggregate each window in order. Level indices are
    /// 0-based window positions.
    pub fn parse(&self, log: &str) -> Result<Vec<LevelSummary>, ParseError> {
        let raw_tokens: Vec<&str> = log.split(self.delimiter.as_str()).collect();

        // split() always yields at least one item, possibly empty.
        let head = raw_tokens.first().copied().unwrap_or_default();
        if head != token::START {
            return Err(ParseError::MalformedLog {
                expected: token::START,
                actual: head.to_string(),
            });
        }

        let tokens: Vec<Token> = raw_tokens.iter().map(|raw| Token::classify(raw)).collect();

        segmenter::segment(&tokens)
            .iter()
            .enumerate()
            .map(|(level_index, window)| summary::aggregate(window, level_index))
            .collect()
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}
