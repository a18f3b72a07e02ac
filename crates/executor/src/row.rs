use catalog::{Table, decode_value};
use common::DbResult;
use types::Value;

/// Deserializes one row by number: a column-by-column copy out of the
/// page buffer into fresh `Value`s, matching the row codec's contract
/// that the destination is a scratch buffer owned by the caller.
pub fn decode_row(table: &mut Table, row_num: usize) -> DbResult<Vec<Value>> {
    let slot = table.row_slot(row_num)?;
    let bytes = slot.to_vec();
    Ok(table
        .columns
        .iter()
        .map(|column| decode_value(column, &bytes[column.offset..column.offset + column.size]))
        .collect())
}
