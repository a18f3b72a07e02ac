use crate::ast::Statement;
use crate::error::ParseError;
use crate::where_clause::parse_where;
use catalog::{Schema, copy_value_into_bytes};
use types::ColumnType;

/// `update <name> set <col> = <lit> where <c> <op> <lit>`.
///
/// Exactly one `SET` assignment is supported and `WHERE` is mandatory —
/// there is no unconditional `UPDATE`.
pub fn parse_update(schema: &Schema, line: &str) -> Result<Statement, ParseError> {
    let lower = line.to_ascii_lowercase();

    let set_rel = lower.find(" set ").ok_or(ParseError::Syntax)?;
    let table_name = line["update".len()..set_rel].trim();
    if table_name.is_empty() {
        return Err(ParseError::Syntax);
    }
    let table = schema
        .table(table_name)
        .map_err(|_| ParseError::TableNotFound)?;

    let after_set = set_rel + " set ".len();
    let rest = &line[after_set..];
    let rest_lower = &lower[after_set..];

    let where_rel = rest_lower.find(" where ").ok_or(ParseError::Syntax)?;
    let assignment = rest[..where_rel].trim();
    let where_text = rest[where_rel + " where ".len()..].trim();

    let eq_rel = assignment.find('=').ok_or(ParseError::Syntax)?;
    let column_name = assignment[..eq_rel].trim();
    let literal_token = assignment[eq_rel + 1..].trim();

    let column = table
        .column(column_name)
        .map_err(|_| ParseError::Syntax)?;

    let value = match column.ty {
        ColumnType::Varchar => {
            if literal_token.len() < 2
                || !literal_token.starts_with('\'')
                || !literal_token.ends_with('\'')
            {
                return Err(ParseError::Syntax);
            }
            let inner = &literal_token[1..literal_token.len() - 1];
            if inner.len() > column.size {
                return Err(ParseError::StringTooLong);
            }
            copy_value_into_bytes(column, inner.as_bytes()).map_err(|_| ParseError::Internal)?
        }
        ColumnType::Integer | ColumnType::Real => {
            copy_value_into_bytes(column, literal_token.as_bytes()).map_err(|_| ParseError::Syntax)?
        }
    };

    let filter = parse_where(table, where_text)?;

    Ok(Statement::Update {
        table: table_name.to_string(),
        column: column.name.clone(),
        value,
        filter,
    })
}
