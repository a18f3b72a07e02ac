use crate::ExecOutcome;
use crate::row::decode_row;
use catalog::Table;
use common::DbResult;
use expr::WhereClause;

/// Scans every row; for each match, overwrites `column`'s bytes with
/// `value` and writes the row back through the same slot.
pub fn execute(
    table: &mut Table,
    column: &str,
    value: &[u8],
    filter: &WhereClause,
) -> DbResult<ExecOutcome> {
    let target = table.column(column)?.clone();
    let num_rows = table.num_rows;
    for row_num in 0..num_rows {
        let values = decode_row(table, row_num)?;
        if expr::accepts(Some(filter), &table.columns, &values)? {
            let slot = table.row_slot(row_num)?;
            slot[target.offset..target.offset + target.size].copy_from_slice(value);
        }
    }
    Ok(ExecOutcome::Success)
}
