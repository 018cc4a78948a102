/// Level-begin marker; required as the first token of every log.
pub const START: &str = "start";
/// Terminal token for a successfully completed level.
pub const WIN: &str = "win";
/// Mid-level failure event; not terminal.
pub const LOSE: &str = "lose";
/// Terminal token for player abandonment; ends the level and the log.
pub const CHURN: &str = "churn";

/// Canonical booster vocabulary, in column order.
///
/// Every `LevelSummary` carries a count for each of these identifiers,
/// whether or not the booster occurred in the level.
pub const BOOSTER_VOCABULARY: [&str; 14] = [
    "amuletBomb",
    "amuletMoves",
    "horn",
    "boostHammer",
    "boostCross",
    "boostSwapElements",
    "preingame_bomb",
    "preingame_multicolor",
    "preingame_firework",
    "preingame_steps",
    "additionalMoves",
    "inGameBomb",
    "inGameTnt",
    "inGameBigTnt",
];

/// A classified event-log token.
///
/// Classification happens once per raw token; everything downstream matches
/// on the variant instead of re-comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Start,
    Win,
    Lose,
    Churn,
    /// A recognized booster usage event. Carries the canonical identifier
    /// from `BOOSTER_VOCABULARY`, not the input slice.
    Booster(&'static str),
    /// Anything outside the closed vocabulary. Rejected during aggregation.
    Unknown(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(raw: &'a str) -> Self {
        match raw {
            START => Token::Start,
            WIN => Token::Win,
            LOSE => Token::Lose,
            CHURN => Token::Churn,
            other => BOOSTER_VOCABULARY
                .iter()
                .find(|&&booster| booster == other)
                .map_or(Token::Unknown(other), |&booster| Token::Booster(booster)),
        }
    }

    /// Whether this token ends a level window.
    pub fn is_terminal(self) -> bool {
        matches!(self, Token::Win | Token::Churn)
    }
}
