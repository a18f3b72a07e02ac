//! The pager: a demand-loaded cache mapping page numbers to fixed-size
//! buffers, backed by one file per table.
//!
//! Pages are read lazily on first touch and never evicted — `TABLE_MAX_PAGES`
//! bounds the slot array, so the whole table fits in memory for the
//! lifetime of the process. Nothing is written back until the caller asks
//! for an explicit `flush`; there is no background writer and no WAL.

use common::{DbError, DbResult, PAGE_SIZE, TABLE_MAX_PAGES};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// A single in-memory page buffer, always exactly `PAGE_SIZE` bytes.
pub type PageBuf = Box<[u8; PAGE_SIZE]>;

fn zero_page() -> PageBuf {
    Box::new([0u8; PAGE_SIZE])
}

/// Demand-loaded page cache for one table's backing file.
pub struct Pager {
    file: File,
    file_length: u64,
    pages: Vec<Option<PageBuf>>,
}

impl Pager {
    /// Opens (creating if absent) the backing file at `path` and records its
    /// current length. No pages are read until `get_page` is called.
    pub fn open(path: &Path) -> DbResult<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .mode(0o600)
            .open(path)?;
        let file_length = file.seek(SeekFrom::End(0))?;

        let mut pages = Vec::with_capacity(TABLE_MAX_PAGES);
        pages.resize_with(TABLE_MAX_PAGES, || None);

        Ok(Self {
            file,
            file_length,
            pages,
        })
    }

    /// Current length of the backing file, in bytes.
    pub fn file_length(&self) -> u64 {
        self.file_length
    }

    /// Number of full-or-partial pages currently persisted on disk.
    pub fn num_pages_on_disk(&self) -> u64 {
        self.file_length.div_ceil(PAGE_SIZE as u64)
    }

    /// Fetches page `page_num`, loading it from disk on first touch.
    ///
    /// Fails fatally if `page_num` is beyond `TABLE_MAX_PAGES` — the pager
    /// has no eviction policy, so this is an unrecoverable capacity error
    /// rather than a user-facing one.
    pub fn get_page(&mut self, page_num: usize) -> DbResult<&mut PageBuf> {
        if page_num >= TABLE_MAX_PAGES {
            return Err(DbError::Fatal(format!(
                "page number {page_num} exceeds the maximum of {TABLE_MAX_PAGES} pages"
            )));
        }

        if self.pages[page_num].is_none() {
            let mut buf = zero_page();
            if (page_num as u64) < self.num_pages_on_disk() {
                self.file
                    .seek(SeekFrom::Start(page_num as u64 * PAGE_SIZE as u64))?;
                // A short read is expected at end-of-file on the last,
                // partially-written page; the unread tail stays zeroed.
                self.file.read(buf.as_mut_slice())?;
            }
            self.pages[page_num] = Some(buf);
        }

        Ok(self.pages[page_num].as_mut().unwrap())
    }

    /// True once `get_page(page_num)` has been called at least once.
    pub fn is_populated(&self, page_num: usize) -> bool {
        self.pages.get(page_num).is_some_and(Option::is_some)
    }

    /// Writes exactly `size` bytes of slot `page_num` to its file offset.
    ///
    /// Fails fatally if the slot was never populated — flushing a page that
    /// was never fetched indicates a bug in the caller, not a user error.
    pub fn flush(&mut self, page_num: usize, size: usize) -> DbResult<()> {
        let page = self.pages[page_num]
            .as_ref()
            .ok_or_else(|| DbError::Fatal(format!("flush of empty page slot {page_num}")))?;

        self.file
            .seek(SeekFrom::Start(page_num as u64 * PAGE_SIZE as u64))?;
        self.file.write_all(&page[..size])?;
        self.file.flush()?;

        let end = page_num as u64 * PAGE_SIZE as u64 + size as u64;
        if end > self.file_length {
            self.file_length = end;
        }
        Ok(())
    }
}
