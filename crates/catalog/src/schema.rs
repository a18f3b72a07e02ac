use crate::table::{ColumnSpec, Table};
use ahash::RandomState;
use common::{DbError, DbResult};
use hashbrown::HashMap;
use std::path::{Path, PathBuf};

type Map<K, V> = HashMap<K, V, RandomState>;

/// One table descriptor as read from the schema file, before layout math.
#[derive(Clone, Debug)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
}

/// The set of tables loaded at startup. Owns every `Table` for the life of
/// the process and is responsible for flushing and releasing them on close.
/// There is no runtime schema mutation — the schema file is read once.
pub struct Schema {
    tables: Vec<Table>,
    index: Map<String, usize>,
}

impl Schema {
    /// Opens one backing file per declared table under `data_dir`.
    pub fn open(data_dir: &Path, defs: Vec<TableDef>) -> DbResult<Self> {
        std::fs::create_dir_all(data_dir)?;

        let mut tables = Vec::with_capacity(defs.len());
        let mut index = Map::default();
        for def in defs {
            if index.contains_key(&def.name) {
                return Err(DbError::Schema(format!(
                    "duplicate table '{}' in schema",
                    def.name
                )));
            }
            let path = table_path(data_dir, &def.name);
            let table = Table::open(&def.name, def.columns, &path)?;
            index.insert(def.name, tables.len());
            tables.push(table);
        }

        Ok(Self { tables, index })
    }

    /// Looks up a table by name.
    pub fn table(&self, name: &str) -> DbResult<&Table> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| DbError::Schema(format!("table '{name}' not found")))?;
        Ok(&self.tables[idx])
    }

    /// Mutable lookup, used by the executor to run DML.
    pub fn table_mut(&mut self, name: &str) -> DbResult<&mut Table> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| DbError::Schema(format!("table '{name}' not found")))?;
        Ok(&mut self.tables[idx])
    }

    /// Flushes and closes every table's backing file. Consumes the schema —
    /// there is nothing left to do with it afterwards.
    pub fn close(self) -> DbResult<()> {
        for table in self.tables {
            table.close()?;
        }
        Ok(())
    }
}

fn table_path(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join(format!("{name}.table"))
}
