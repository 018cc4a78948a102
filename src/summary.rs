use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::parser::ParseError;
use crate::token::{Token, BOOSTER_VOCABULARY};

/// Zeroed booster counts over the full vocabulary, cloned per level so no
/// state is ever shared between levels or logs.
static BOOSTER_TEMPLATE: Lazy<IndexMap<&'static str, u32>> =
    Lazy::new(|| BOOSTER_VOCABULARY.iter().map(|&booster| (booster, 0)).collect());

/// Per-level summary record derived from one level window.
///
/// `boosters` is dense: it always holds every identifier from
/// `BOOSTER_VOCABULARY`, in vocabulary order, defaulting to 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    /// Zero-based position of this level within its log.
    pub level_index: usize,
    /// 1 / (loses + 1) when the level was won, 0 otherwise.
    pub win_rate: f64,
    pub loses: u32,
    pub churn: bool,
    pub boosters: IndexMap<&'static str, u32>,
}

/// Derive one `LevelSummary` from a level window.
///
/// The window is expected to end at a terminal token, as produced by the
/// segmenter. Any token outside the closed vocabulary fails the whole parse.
pub fn aggregate(window: &[Token<'_>], level_index: usize) -> Result<LevelSummary, ParseError> {
    let mut boosters = BOOSTER_TEMPLATE.clone();
    let mut loses = 0u32;
    let mut won = false;
    let mut churned = false;

    for token in window {
        match *token {
            Token::Lose => loses += 1,
            Token::Booster(id) => *boosters.entry(id).or_insert(0) += 1,
            Token::Win => won = true,
            Token::Churn => churned = true,
            Token::Start => {}
            Token::Unknown(raw) => {
                return Err(ParseError::UnknownToken {
                    token: raw.to_string(),
                    level_index,
                });
            }
        }
    }

    // Denominator is at least 1, so the division is always defined.
    let win_rate = if won { 1.0 / f64::from(loses + 1) } else { 0.0 };

    Ok(LevelSummary {
        level_index,
        win_rate,
        loses,
        churn: churned,
        boosters,
    })
}
