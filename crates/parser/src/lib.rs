//! The statement parser: classifies the verb, tokenizes the rest, and
//! produces a validated `Statement` bound to a resolved table name.
//!
//! Each handler works against a lowercased copy of the line for keyword
//! matching while slicing identifiers and literals out of the original,
//! since ASCII-only lowercasing never changes a string's byte length.

mod ast;
mod delete;
mod error;
mod insert;
mod select;
mod update;
mod where_clause;

pub use ast::{Projection, Statement};
pub use error::ParseError;

use catalog::Schema;

/// Dispatches on the first whitespace-delimited token of `line`.
pub fn parse(schema: &Schema, line: &str) -> Result<Statement, ParseError> {
    let line = line.trim();
    let verb = line
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match verb.as_str() {
        "insert" => insert::parse_insert(schema, line),
        "select" => select::parse_select(schema, line),
        "update" => update::parse_update(schema, line),
        "delete" => delete::parse_delete(schema, line),
        _ => Err(ParseError::Unrecognized(line.to_string())),
    }
}
