//! Reads the schema descriptor: line 1 is the table count, each following
//! line is `<name>;<num_columns>;<col_def>,<col_def>,...` with
//! `<col_def> = <name>:<size>:<type>`. Read once at startup, never re-read.

use catalog::{ColumnSpec, TableDef};
use common::{DbError, DbResult};
use std::path::Path;
use types::ColumnType;

pub fn read(path: &Path) -> DbResult<Vec<TableDef>> {
    let text = std::fs::read_to_string(path)?;
    let mut lines = text.lines();

    let num_tables: usize = lines
        .next()
        .ok_or_else(|| DbError::Schema("schema file is empty".into()))?
        .trim()
        .parse()
        .map_err(|_| DbError::Schema("first line must be the table count".into()))?;

    (0..num_tables)
        .map(|_| {
            let line = lines
                .next()
                .ok_or_else(|| DbError::Schema("fewer table lines than declared".into()))?;
            parse_table_line(line)
        })
        .collect()
}

fn parse_table_line(line: &str) -> DbResult<TableDef> {
    let mut parts = line.splitn(3, ';');
    let name = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DbError::Schema(format!("malformed table line '{line}'")))?;
    let num_columns: usize = parts
        .next()
        .ok_or_else(|| DbError::Schema(format!("malformed table line '{line}'")))?
        .parse()
        .map_err(|_| DbError::Schema(format!("invalid column count in '{line}'")))?;
    let columns_str = parts
        .next()
        .ok_or_else(|| DbError::Schema(format!("malformed table line '{line}'")))?;

    let columns: Vec<ColumnSpec> = columns_str
        .split(',')
        .map(parse_column_def)
        .collect::<DbResult<Vec<_>>>()?;

    if columns.len() != num_columns {
        return Err(DbError::Schema(format!(
            "table '{name}' declares {num_columns} columns but lists {}",
            columns.len()
        )));
    }

    Ok(TableDef {
        name: name.to_string(),
        columns,
    })
}

fn parse_column_def(token: &str) -> DbResult<ColumnSpec> {
    let mut parts = token.splitn(3, ':');
    let name = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DbError::Schema(format!("malformed column definition '{token}'")))?;
    let size: usize = parts
        .next()
        .ok_or_else(|| DbError::Schema(format!("malformed column definition '{token}'")))?
        .parse()
        .map_err(|_| DbError::Schema(format!("invalid column size in '{token}'")))?;
    let ty_token = parts
        .next()
        .ok_or_else(|| DbError::Schema(format!("malformed column definition '{token}'")))?;
    let ty = ColumnType::parse(ty_token)
        .ok_or_else(|| DbError::Schema(format!("unknown column type '{ty_token}'")))?;

    Ok(ColumnSpec {
        name: name.to_string(),
        ty,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_one_table() {
        let file = write_file("1\nusers;3;id:4:int,username:32:varchar,email:255:varchar\n");
        let defs = read(file.path()).unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "users");
        assert_eq!(defs[0].columns.len(), 3);
        assert_eq!(defs[0].columns[0].ty, ColumnType::Integer);
    }

    #[test]
    fn rejects_column_count_mismatch() {
        let file = write_file("1\nusers;2;id:4:int,username:32:varchar,email:255:varchar\n");
        assert!(read(file.path()).is_err());
    }

    #[test]
    fn rejects_unknown_column_type() {
        let file = write_file("1\nusers;1;id:4:blob\n");
        assert!(read(file.path()).is_err());
    }

    #[test]
    fn rejects_fewer_lines_than_declared() {
        let file = write_file("2\nusers;1;id:4:int\n");
        assert!(read(file.path()).is_err());
    }
}
