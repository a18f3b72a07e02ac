//! Table layout, the row codec, cursors, and the schema registry that owns
//! every table for the life of the process.

mod column;
mod cursor;
mod row;
mod schema;
mod table;

pub use column::ColumnDefinition;
pub use cursor::Cursor;
pub use row::{copy_value_into_bytes, decode_value};
pub use schema::{Schema, TableDef};
pub use table::{ColumnSpec, Table};
