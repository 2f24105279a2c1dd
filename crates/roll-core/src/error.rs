//! Error types for statement parsing.

/// Errors that can occur while parsing a roll statement.
///
/// The display text of each variant is exactly what is shown to the user in
/// front of the offending statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    /// The statement does not have the shape of a roll statement at all.
    #[error("Malformed")]
    Malformed,

    /// The statement has the right shape, but its repeat count, dice count,
    /// or die size is out of range.
    #[error("Invalid")]
    Invalid,
}

/// Convenience result type for statement parsing.
pub type ParseResult<T> = Result<T, RollError>;
