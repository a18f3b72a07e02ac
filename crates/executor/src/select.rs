use crate::ExecOutcome;
use crate::format::format_row;
use crate::row::decode_row;
use catalog::{Cursor, Table};
use common::DbResult;
use expr::WhereClause;
use parser::Projection;
use types::Value;

/// Walks the table from `table_start`, printing each row the filter
/// accepts. A missing filter accepts every row.
pub fn execute(
    table: &mut Table,
    projection: &Projection,
    filter: Option<&WhereClause>,
) -> DbResult<ExecOutcome> {
    let mut cursor = Cursor::at_start(table);
    while !cursor.end_of_table {
        let values = decode_row(table, cursor.row_num)?;
        if expr::accepts(filter, &table.columns, &values)? {
            let projected = project(table, projection, &values)?;
            println!("{}", format_row(&projected));
        }
        cursor.advance(table);
    }
    Ok(ExecOutcome::Success)
}

fn project(table: &Table, projection: &Projection, values: &[Value]) -> DbResult<Vec<Value>> {
    match projection {
        Projection::Star => Ok(values.to_vec()),
        Projection::Columns(names) => names
            .iter()
            .map(|name| {
                let idx = table
                    .columns
                    .iter()
                    .position(|c| &c.name == name)
                    .expect("projection columns are validated against the schema at parse time");
                Ok(values[idx].clone())
            })
            .collect(),
    }
}
