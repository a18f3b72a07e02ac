use crate::ExecOutcome;
use crate::row::decode_row;
use catalog::Table;
use common::DbResult;
use expr::WhereClause;

/// Two-pass delete with compaction: zero every matching row, then shift
/// survivors into the holes left behind so the occupied range stays
/// contiguous and `num_rows` can simply shrink.
///
/// The zero-bytes-as-hole sentinel is a known fragility (see the schema
/// invariant that every table's `id` column must be positive, which keeps
/// a legitimately all-zero row from ever being written).
pub fn execute(table: &mut Table, filter: &WhereClause) -> DbResult<ExecOutcome> {
    let num_rows = table.num_rows;
    let mut deleted = 0usize;

    for row_num in 0..num_rows {
        let values = decode_row(table, row_num)?;
        if expr::accepts(Some(filter), &table.columns, &values)? {
            table.row_slot(row_num)?.fill(0);
            deleted += 1;
        }
    }

    if deleted == 0 {
        return Ok(ExecOutcome::Success);
    }

    let mut hole: Option<usize> = None;
    for row_num in 0..num_rows {
        let bytes = table.row_slot(row_num)?.to_vec();
        let is_hole = bytes.iter().all(|&b| b == 0);
        match (is_hole, hole) {
            (true, None) => hole = Some(row_num),
            (false, Some(hole_num)) => {
                table.row_slot(hole_num)?.copy_from_slice(&bytes);
                table.row_slot(row_num)?.fill(0);
                hole = Some(hole_num + 1);
            }
            _ => {}
        }
    }

    table.num_rows -= deleted;
    Ok(ExecOutcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::ColumnSpec;
    use expr::Operator;
    use tempfile::tempdir;
    use types::{ColumnType, Value};

    fn users_with_three_rows(dir: &tempfile::TempDir) -> Table {
        let mut table = Table::open(
            "users",
            vec![ColumnSpec {
                name: "id".into(),
                ty: ColumnType::Integer,
                size: 4,
            }],
            &dir.path().join("users.table"),
        )
        .unwrap();
        for (row_num, id) in [1i32, 2, 3].into_iter().enumerate() {
            table
                .row_slot(row_num)
                .unwrap()
                .copy_from_slice(&id.to_le_bytes());
        }
        table.num_rows = 3;
        table
    }

    #[test]
    fn compacts_survivors_preserving_order() {
        let dir = tempdir().unwrap();
        let mut table = users_with_three_rows(&dir);
        let filter = WhereClause {
            column: "id".into(),
            operator: Operator::Eq,
            literal: 2i32.to_le_bytes().to_vec(),
        };
        let outcome = execute(&mut table, &filter).unwrap();
        assert_eq!(outcome, ExecOutcome::Success);
        assert_eq!(table.num_rows, 2);

        let row0 = decode_row(&mut table, 0).unwrap();
        let row1 = decode_row(&mut table, 1).unwrap();
        assert_eq!(row0[0], Value::Integer(1));
        assert_eq!(row1[0], Value::Integer(3));
    }

    #[test]
    fn no_matches_leaves_table_unchanged() {
        let dir = tempdir().unwrap();
        let mut table = users_with_three_rows(&dir);
        let filter = WhereClause {
            column: "id".into(),
            operator: Operator::Eq,
            literal: 99i32.to_le_bytes().to_vec(),
        };
        execute(&mut table, &filter).unwrap();
        assert_eq!(table.num_rows, 3);
    }
}
