use crate::ExecOutcome;
use catalog::Table;
use common::DbResult;

/// Appends `row` (already encoded to the table's fixed width by the parser)
/// at `table_end`, or reports exhaustion without touching storage.
pub fn execute(table: &mut Table, row: &[u8]) -> DbResult<ExecOutcome> {
    if table.num_rows >= table.max_rows {
        return Ok(ExecOutcome::TableFull);
    }
    let row_num = table.num_rows;
    table.row_slot(row_num)?.copy_from_slice(row);
    table.num_rows += 1;
    Ok(ExecOutcome::Success)
}
