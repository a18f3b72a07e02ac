use crate::error::ParseError;
use catalog::{Table, copy_value_into_bytes};
use expr::{Operator, WhereClause};
use types::ColumnType;

/// Parses `<column> <op> <literal>` into a `WhereClause`, resolving the
/// column against `table` and encoding the literal to its on-disk width.
///
/// `VARCHAR` literals must be single-quote delimited here, unlike `INSERT`'s
/// tokens, which accept quotes optionally (see `crate::insert`). Ordering
/// operators are rejected on `VARCHAR` columns here, at parse time, rather
/// than left to do something undefined at evaluation time.
pub fn parse_where(table: &Table, text: &str) -> Result<WhereClause, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::Syntax);
    }
    let column = table
        .column(tokens[0])
        .map_err(|_| ParseError::Syntax)?;
    let operator = Operator::parse(tokens[1]).ok_or(ParseError::Syntax)?;
    // A quoted VARCHAR literal may itself contain spaces; splitting on
    // whitespace and rejoining with a single space is an accepted
    // simplification (multiple internal spaces are not preserved).
    let literal_token = tokens[2..].join(" ");

    let literal = match column.ty {
        ColumnType::Varchar => {
            if !operator.supports_text() {
                return Err(ParseError::Syntax);
            }
            let inner = strip_quotes(&literal_token).ok_or(ParseError::Syntax)?;
            copy_value_into_bytes(column, inner.as_bytes()).map_err(|_| ParseError::StringTooLong)?
        }
        ColumnType::Integer | ColumnType::Real => {
            copy_value_into_bytes(column, literal_token.as_bytes()).map_err(|_| ParseError::Syntax)?
        }
    };

    Ok(WhereClause {
        column: column.name.clone(),
        operator,
        literal,
    })
}

fn strip_quotes(token: &str) -> Option<&str> {
    if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::ColumnSpec;
    use tempfile::tempdir;

    fn users() -> (tempfile::TempDir, Table) {
        let dir = tempdir().unwrap();
        let table = Table::open(
            "users",
            vec![
                ColumnSpec {
                    name: "id".into(),
                    ty: ColumnType::Integer,
                    size: 4,
                },
                ColumnSpec {
                    name: "username".into(),
                    ty: ColumnType::Varchar,
                    size: 8,
                },
            ],
            &dir.path().join("users.table"),
        )
        .unwrap();
        (dir, table)
    }

    #[test]
    fn parses_integer_equality() {
        let (_dir, table) = users();
        let clause = parse_where(&table, "id = 2").unwrap();
        assert_eq!(clause.column, "id");
    }

    #[test]
    fn requires_quotes_on_varchar_literal() {
        let (_dir, table) = users();
        assert!(parse_where(&table, "username = bob").is_err());
        assert!(parse_where(&table, "username = 'bob'").is_ok());
    }

    #[test]
    fn rejects_ordering_on_varchar() {
        let (_dir, table) = users();
        assert!(parse_where(&table, "username < 'bob'").is_err());
    }

    #[test]
    fn rejects_unknown_column() {
        let (_dir, table) = users();
        assert!(parse_where(&table, "missing = 2").is_err());
    }
}
