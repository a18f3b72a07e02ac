use thiserror::Error;

/// Parse-time failures, one per outcome string the REPL prints verbatim.
///
/// These never reach the executor — a `ParseError` means the table was
/// never touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Syntax error.")]
    Syntax,
    #[error("Table not found.")]
    TableNotFound,
    #[error("ID must be positive.")]
    NegativeId,
    #[error("String is too long.")]
    StringTooLong,
    #[error("Unrecognized keyword at start of '{0}'.")]
    Unrecognized(String),
    #[error("Internal error.")]
    Internal,
}
