//! Shared constants and the error type used across every database crate.

use std::io;
use thiserror::Error;

/// Size in bytes of a single page, and the unit of disk I/O for the pager.
pub const PAGE_SIZE: usize = 4096;

/// Maximum number of pages a single table's pager will address.
///
/// `get_page` fails fatally beyond this bound — see `DbError::fatal`.
pub const TABLE_MAX_PAGES: usize = 100;

/// Canonical error type shared across the database subsystems.
#[derive(Error, Debug)]
pub enum DbError {
    /// A statement could not be tokenized or validated against the schema.
    #[error("{0}")]
    Parser(String),
    /// A schema-level lookup failed (unknown table, duplicate name).
    #[error("{0}")]
    Schema(String),
    /// An executor-level condition such as table exhaustion.
    #[error("{0}")]
    Executor(String),
    /// A violated storage invariant: flushing an empty slot, addressing a
    /// page beyond `TABLE_MAX_PAGES`, a short write, and so on. Always
    /// fatal — see `DbError::fatal`.
    #[error("{0}")]
    Fatal(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DbError {
    /// True for the tier-3 errors the REPL driver must not recover from:
    /// any I/O failure, or an explicit internal invariant violation. The
    /// driver flushes what it can and terminates the process rather than
    /// risk continuing after a torn write.
    pub fn fatal(&self) -> bool {
        matches!(self, DbError::Fatal(_) | DbError::Io(_))
    }
}

/// Result alias that carries a `DbError`.
pub type DbResult<T> = Result<T, DbError>;
