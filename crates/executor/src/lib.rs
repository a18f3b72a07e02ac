//! Executes validated statements against cursors: scan-based insert,
//! select, filtered update, and filtered delete with row compaction.
//!
//! This crate owns no state of its own — every call takes the `Table` (or
//! `Schema`) it operates on and returns once the statement has run to
//! completion, per the single-threaded, run-to-completion model.

mod delete;
mod format;
mod insert;
mod row;
mod select;
mod update;

use catalog::Schema;
use common::DbResult;
use parser::Statement;

/// The two outcomes a *successfully parsed* statement can produce.
/// `TableFull` is not an error — it is reported to the prompt with table
/// state unchanged, per the tiered error model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecOutcome {
    Success,
    TableFull,
}

/// Resolves the statement's table and runs it.
pub fn execute(schema: &mut Schema, statement: Statement) -> DbResult<ExecOutcome> {
    match statement {
        Statement::Insert { table, row } => {
            insert::execute(schema.table_mut(&table)?, &row)
        }
        Statement::Select {
            table,
            projection,
            filter,
        } => select::execute(schema.table_mut(&table)?, &projection, filter.as_ref()),
        Statement::Update {
            table,
            column,
            value,
            filter,
        } => update::execute(schema.table_mut(&table)?, &column, &value, &filter),
        Statement::Delete { table, filter } => {
            delete::execute(schema.table_mut(&table)?, &filter)
        }
    }
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
            columns: vec![
                ColumnSpec {
                    name: "id".into(),
                    ty: ColumnType::Integer,
                    size: 4,
                },
                ColumnSpec {
                    name: "username".into(),
                    ty: ColumnType::Varchar,
                    size: 32,
                },
                ColumnSpec {
                    name: "email".into(),
                    ty: ColumnType::Varchar,
                    size: 255,
                },
            ],
        };
        let schema = Schema::open(dir.path(), vec![def]).unwrap();
        (dir, schema)
    }

    #[test]
    fn insert_then_select_round_trips_through_the_dispatcher() {
        let (_dir, mut schema) = schema_with_users();
        let stmt = parser::parse(&schema, "insert into users values (1, alice, a@x)").unwrap();
        assert_eq!(execute(&mut schema, stmt).unwrap(), ExecOutcome::Success);

        let stmt = parser::parse(&schema, "select * from users").unwrap();
        assert_eq!(execute(&mut schema, stmt).unwrap(), ExecOutcome::Success);
    }

    #[test]
    fn update_then_delete_through_the_dispatcher() {
        let (_dir, mut schema) = schema_with_users();
        for line in [
            "insert into users values (1, alice, a@x)",
            "insert into users values (2, bob, b@y)",
        ] {
            let stmt = parser::parse(&schema, line).unwrap();
            execute(&mut schema, stmt).unwrap();
        }

        let stmt = parser::parse(&schema, "update users set username = 'c' where id = 2").unwrap();
        assert_eq!(execute(&mut schema, stmt).unwrap(), ExecOutcome::Success);

        let stmt = parser::parse(&schema, "delete from users where id = 1").unwrap();
        assert_eq!(execute(&mut schema, stmt).unwrap(), ExecOutcome::Success);
        assert_eq!(schema.table("users").unwrap().num_rows, 1);
    }
}
