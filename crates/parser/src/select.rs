use crate::ast::{Projection, Statement};
use crate::error::ParseError;
use crate::where_clause::parse_where;
use catalog::Schema;

/// `select <proj> from <name> [where <c> <op> <lit>]`.
pub fn parse_select(schema: &Schema, line: &str) -> Result<Statement, ParseError> {
    let lower = line.to_ascii_lowercase();

    let from_rel = lower.find(" from ").ok_or(ParseError::Syntax)?;
    // `lower` is an ASCII-lowercased copy of `line` at identical byte
    // offsets, so the "select" prefix length is safe to slice off `line`.
    if !lower.starts_with("select") {
        return Err(ParseError::Syntax);
    }
    let proj_str = line[..from_rel]["select".len()..].trim();

    let after_from = from_rel + " from ".len();
    let rest = &line[after_from..];
    let rest_lower = &lower[after_from..];

    let (table_part, where_part) = match rest_lower.find(" where ") {
        Some(where_rel) => (
            rest[..where_rel].trim(),
            Some(rest[where_rel + " where ".len()..].trim()),
        ),
        None => (rest.trim(), None),
    };

    if table_part.is_empty() {
        return Err(ParseError::Syntax);
    }
    let table = schema
        .table(table_part)
        .map_err(|_| ParseError::TableNotFound)?;

    let projection = if proj_str == "*" {
        Projection::Star
    } else {
        let mut names = Vec::new();
        for token in proj_str.split(',') {
            let name = token.trim();
            if name.is_empty() || table.column(name).is_err() {
                return Err(ParseError::Syntax);
            }
            names.push(name.to_string());
        }
        if names.is_empty() {
            return Err(ParseError::Syntax);
        }
        Projection::Columns(names)
    };

    let filter = where_part
        .map(|text| parse_where(table, text))
        .transpose()?;

    Ok(Statement::Select {
        table: table_part.to_string(),
        projection,
        filter,
    })
}
