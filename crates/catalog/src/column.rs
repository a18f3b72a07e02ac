use types::ColumnType;

/// One column's layout within a table's row: its type, its fixed byte
/// width, and its offset from the start of the row.
///
/// Invariant: within a table, `offset` is the prefix sum of the sizes of
/// every column declared before it, and names are unique.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub ty: ColumnType,
    pub size: usize,
    pub offset: usize,
}
