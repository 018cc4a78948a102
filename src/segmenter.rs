use crate::token::Token;

/// Split one log's token sequence into per-level windows.
///
/// Each window is a contiguous slice ending at a terminal token (`win` or
/// `churn`) and starting right after the previous window's terminal (or at
/// the head of the log). Boundaries are emitted in a single left-to-right
/// scan, so the merged `win`/`churn` boundary positions are ascending by
/// construction. Tokens after the last terminal belong to no window and are
/// dropped; a log with no terminal tokens yields no windows.
pub fn segment<'t, 'a>(tokens: &'t [Token<'a>]) -> Vec<&'t [Token<'a>]> {
    let mut windows = Vec::new();
    let mut window_start = 0;

    for (pos, token) in tokens.iter().enumerate() {
        if token.is_terminal() {
            windows.push(&tokens[window_start..=pos]);
            window_start = pos + 1;
        }
    }

    windows
}
