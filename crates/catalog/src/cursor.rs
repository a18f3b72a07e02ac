use crate::table::Table;

/// A position within a table, expressed as a row index.
///
/// Deliberately holds no reference to the table it walks — the table is
/// passed to each method instead, so a cursor never fights the borrow
/// checker over exclusive access to the page cache it ultimately reads.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    pub row_num: usize,
    pub end_of_table: bool,
}

impl Cursor {
    /// A cursor positioned at the first row, or already at the end if the
    /// table is empty.
    pub fn at_start(table: &Table) -> Self {
        Self {
            row_num: 0,
            end_of_table: table.num_rows == 0,
        }
    }

    /// A cursor positioned one-past-the-last row, ready for an insert.
    pub fn at_end(table: &Table) -> Self {
        Self {
            row_num: table.num_rows,
            end_of_table: true,
        }
    }

    /// Moves to the next row, marking `end_of_table` once `num_rows` is reached.
    pub fn advance(&mut self, table: &Table) {
        self.row_num += 1;
        self.end_of_table = self.row_num >= table.num_rows;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnSpec;
    use tempfile::tempdir;
    use types::ColumnType;

    #[test]
    fn empty_table_starts_at_end() {
        let dir = tempdir().unwrap();
        let table = Table::open(
            "t",
            vec![ColumnSpec {
                name: "id".into(),
                ty: ColumnType::Integer,
                size: 4,
            }],
            &dir.path().join("t.table"),
        )
        .unwrap();
        let cursor = Cursor::at_start(&table);
        assert!(cursor.end_of_table);
    }

    #[test]
    fn advance_stops_exactly_at_num_rows() {
        let dir = tempdir().unwrap();
        let mut table = Table::open(
            "t",
            vec![ColumnSpec {
                name: "id".into(),
                ty: ColumnType::Integer,
                size: 4,
            }],
            &dir.path().join("t.table"),
        )
        .unwrap();
        table.num_rows = 2;
        let mut cursor = Cursor::at_start(&table);
        assert!(!cursor.end_of_table);
        cursor.advance(&table);
        assert!(!cursor.end_of_table);
        assert_eq!(cursor.row_num, 1);
        cursor.advance(&table);
        assert!(cursor.end_of_table);
        assert_eq!(cursor.row_num, 2);
    }
}
