use crate::column::ColumnDefinition;
use common::{DbError, DbResult, PAGE_SIZE, TABLE_MAX_PAGES};
use std::path::Path;
use storage::Pager;
use types::ColumnType;

/// A column as declared in the schema file, before offsets are computed.
#[derive(Clone, Debug)]
pub struct ColumnSpec {
    pub name: String,
    pub ty: ColumnType,
    pub size: usize,
}

/// A table's fixed row layout plus its backing pager.
///
/// `row_size`, `rows_per_page`, and `max_rows` are derived once at
/// construction and never change; `num_rows` is the only mutable piece of
/// layout state, updated by the executor on insert/delete.
pub struct Table {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    pub row_size: usize,
    pub rows_per_page: usize,
    pub max_rows: usize,
    pub num_rows: usize,
    pager: Pager,
}

impl Table {
    /// Computes column offsets, opens the backing pager at `path`, and
    /// infers `num_rows` from the file's current length.
    pub fn open(name: &str, specs: Vec<ColumnSpec>, path: &Path) -> DbResult<Self> {
        if specs.is_empty() {
            return Err(DbError::Schema(format!(
                "table '{name}' declares no columns"
            )));
        }

        let mut columns = Vec::with_capacity(specs.len());
        let mut offset = 0usize;
        for spec in specs {
            validate_size(name, &spec)?;
            columns.push(ColumnDefinition {
                name: spec.name,
                ty: spec.ty,
                size: spec.size,
                offset,
            });
            offset += spec.size;
        }

        let mut seen = std::collections::HashSet::new();
        for column in &columns {
            if !seen.insert(&column.name) {
                return Err(DbError::Schema(format!(
                    "table '{name}' declares column '{}' twice",
                    column.name
                )));
            }
        }

        let row_size = offset;
        if row_size > PAGE_SIZE {
            return Err(DbError::Schema(format!(
                "table '{name}' row size {row_size} exceeds page size {PAGE_SIZE}"
            )));
        }
        let rows_per_page = PAGE_SIZE / row_size;
        let max_rows = rows_per_page * TABLE_MAX_PAGES;

        let pager = Pager::open(path)?;
        let file_length = pager.file_length();
        let num_rows = (file_length / PAGE_SIZE as u64) as usize * rows_per_page
            + (file_length % PAGE_SIZE as u64) as usize / row_size;

        Ok(Self {
            name: name.to_string(),
            columns,
            row_size,
            rows_per_page,
            max_rows,
            num_rows,
            pager,
        })
    }

    /// Looks up a column by name, failing with a schema-level not-found error.
    pub fn column(&self, name: &str) -> DbResult<&ColumnDefinition> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| DbError::Schema(format!("column '{name}' not found")))
    }

    /// Resolves `row_num` to its byte range inside the owning page buffer.
    pub fn row_slot(&mut self, row_num: usize) -> DbResult<&mut [u8]> {
        let page_num = row_num / self.rows_per_page;
        let row_offset = (row_num % self.rows_per_page) * self.row_size;
        let page = self.pager.get_page(page_num)?;
        Ok(&mut page[row_offset..row_offset + self.row_size])
    }

    /// A zeroed scratch buffer sized for one row. Callers pack column
    /// values into it before handing it to `row_slot` via `copy_from_slice`,
    /// so any bytes a column doesn't fill (e.g. the unused tail of a
    /// `VARCHAR`) stay NUL rather than inheriting leftover page bytes.
    pub fn new_row_buffer(&self) -> Vec<u8> {
        vec![0u8; self.row_size]
    }

    /// Flushes every touched page back to disk and closes the backing file.
    ///
    /// Only full pages covered by `num_rows` are flushed in full; the
    /// trailing partial page is flushed at its exact occupied length, so the
    /// file never grows past `⌊num_rows / rows_per_page⌋ · PAGE_SIZE +
    /// (num_rows mod rows_per_page) · row_size`. Slots that were never
    /// populated are skipped — the pager itself is dropped (and the file
    /// handle closed) when this call returns.
    pub fn close(mut self) -> DbResult<()> {
        let num_full_pages = self.num_rows / self.rows_per_page;
        for page_num in 0..num_full_pages {
            if self.pager.is_populated(page_num) {
                self.pager.flush(page_num, PAGE_SIZE)?;
            }
        }
        let remainder_rows = self.num_rows % self.rows_per_page;
        if remainder_rows > 0 && self.pager.is_populated(num_full_pages) {
            self.pager
                .flush(num_full_pages, remainder_rows * self.row_size)?;
        }
        Ok(())
    }
}

fn validate_size(table: &str, spec: &ColumnSpec) -> DbResult<()> {
    match spec.ty {
        ColumnType::Integer if spec.size != 4 => Err(DbError::Schema(format!(
            "table '{table}' column '{}' must declare size 4 for INTEGER",
            spec.name
        ))),
        ColumnType::Real if spec.size != 4 && spec.size != 8 => Err(DbError::Schema(format!(
            "table '{table}' column '{}' must declare size 4 or 8 for REAL",
            spec.name
        ))),
        ColumnType::Varchar if spec.size == 0 => Err(DbError::Schema(format!(
            "table '{table}' column '{}' must declare a non-zero VARCHAR width",
            spec.name
        ))),
        _ => Ok(()),
    }
}
