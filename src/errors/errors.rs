use thiserror::Error;

/// Failure raised while scanning source text.
///
/// `line` and `column` locate the opening quote of the offending
/// literal. Unrecognized characters are not an error; they truncate the
/// token stream instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedStringLiteral { line: usize, column: usize },
}
