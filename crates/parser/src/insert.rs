use crate::ast::Statement;
use crate::error::ParseError;
use catalog::{Schema, copy_value_into_bytes};
use types::ColumnType;

/// `insert into <name> values (<v1>, <v2>, …)`.
///
/// `<name>` is taken between `into ` and ` values `; the parenthesized list
/// is split naively on `,` with no quote awareness, so a `VARCHAR` literal
/// containing a comma will be split incorrectly (documented limitation,
/// not a bug to fix here). `VARCHAR` tokens may be single-quote delimited,
/// matching `WHERE`/`UPDATE` literals; a matching pair of surrounding quotes
/// is stripped before encoding, and an unquoted token is accepted verbatim.
pub fn parse_insert(schema: &Schema, line: &str) -> Result<Statement, ParseError> {
    let lower = line.to_ascii_lowercase();

    let into_rel = lower.find("into ").ok_or(ParseError::Syntax)?;
    let name_start = into_rel + "into ".len();
    let values_rel = lower[name_start..]
        .find(" values ")
        .ok_or(ParseError::Syntax)?;
    let name_end = name_start + values_rel;

    let table_name = line[name_start..name_end].trim();
    if table_name.is_empty() {
        return Err(ParseError::Syntax);
    }
    let table = schema.table(table_name).map_err(|_| ParseError::TableNotFound)?;

    let after_values = name_end + " values ".len();
    let rest = &line[after_values..];
    let open_rel = rest.find('(').ok_or(ParseError::Syntax)?;
    let close_rel = rest[open_rel..].rfind(')').ok_or(ParseError::Syntax)?;
    let inner = &rest[open_rel + 1..open_rel + close_rel];

    let tokens: Vec<&str> = inner.split(',').map(|t| t.trim()).collect();
    if tokens.len() != table.columns.len() {
        return Err(ParseError::Syntax);
    }

    let mut row = table.new_row_buffer();
    for (column, token) in table.columns.iter().zip(tokens.iter()) {
        let value = match column.ty {
            ColumnType::Integer => {
                let value: i32 = token.parse().map_err(|_| ParseError::Syntax)?;
                if column.name == "id" && value <= 0 {
                    return Err(ParseError::NegativeId);
                }
                *token
            }
            ColumnType::Real => {
                token.parse::<f64>().map_err(|_| ParseError::Syntax)?;
                *token
            }
            ColumnType::Varchar => {
                let text = strip_quotes(token);
                if text.len() > column.size {
                    return Err(ParseError::StringTooLong);
                }
                text
            }
        };
        let bytes =
            copy_value_into_bytes(column, value.as_bytes()).map_err(|_| ParseError::Internal)?;
        row[column.offset..column.offset + column.size].copy_from_slice(&bytes);
    }

    Ok(Statement::Insert {
        table: table_name.to_string(),
        row,
    })
}

/// Strips a matching pair of surrounding single quotes, if present.
fn strip_quotes(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}
