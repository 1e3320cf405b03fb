use thiserror::Error;

/// Failure modes of [`Color::try_from_hex`](crate::Color::try_from_hex).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("hex color needs 6 or 8 digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit in color literal `{0}`")]
    BadDigit(String),
}
