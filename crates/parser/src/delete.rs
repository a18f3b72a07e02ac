use crate::ast::Statement;
use crate::error::ParseError;
use crate::where_clause::parse_where;
use catalog::Schema;

/// `delete from <name> where <c> <op> <lit>`. `WHERE` is mandatory — there
/// is no unconditional `DELETE`.
pub fn parse_delete(schema: &Schema, line: &str) -> Result<Statement, ParseError> {
    let lower = line.to_ascii_lowercase();

    let from_rel = lower.find("from ").ok_or(ParseError::Syntax)?;
    let after_from = from_rel + "from ".len();
    let rest = &line[after_from..];
    let rest_lower = &lower[after_from..];

    let where_rel = rest_lower.find(" where ").ok_or(ParseError::Syntax)?;
    let table_name = rest[..where_rel].trim();
    let where_text = rest[where_rel + " where ".len()..].trim();

    if table_name.is_empty() {
        return Err(ParseError::Syntax);
    }
    let table = schema
        .table(table_name)
        .map_err(|_| ParseError::TableNotFound)?;
    let filter = parse_where(table, where_text)?;

    Ok(Statement::Delete {
        table: table_name.to_string(),
        filter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ColumnSpec, TableDef};
    use tempfile::tempdir;
    use types::ColumnType;

    fn schema_with_users() -> (tempfile::TempDir, Schema) {
        let dir = tempdir().unwrap();
        let def = TableDef {
            name: "users".into(),
            columns: vec![ColumnSpec {
                name: "id".into(),
                ty: ColumnType::Integer,
                size: 4,
            }],
        };
        let schema = Schema::open(dir.path(), vec![def]).unwrap();
        (dir, schema)
    }

    #[test]
    fn parses_a_well_formed_delete() {
        let (_dir, schema) = schema_with_users();
        let stmt = parse_delete(&schema, "delete from users where id = 2").unwrap();
        match stmt {
            Statement::Delete { table, .. } => assert_eq!(table, "users"),
            _ => panic!("expected Delete"),
        }
    }

    #[test]
    fn requires_where_clause() {
        let (_dir, schema) = schema_with_users();
        assert_eq!(
            parse_delete(&schema, "delete from users").unwrap_err(),
            ParseError::Syntax
        );
    }

    #[test]
    fn rejects_unknown_table() {
        let (_dir, schema) = schema_with_users();
        assert_eq!(
            parse_delete(&schema, "delete from missing where id = 2").unwrap_err(),
            ParseError::TableNotFound
        );
    }
}
