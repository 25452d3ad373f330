//! Path-keyed cache of loaded (and masked) price tables.
//!
//! A cached table is never refreshed on its own: if the file changes on disk the
//! old contents are served until the entry is invalidated.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use moka::sync::Cache;

use crate::domain::PriceTable;
use crate::error::LoadError;
use crate::io::ingest::load_price_table;
use crate::prep::QualityMask;

const MAX_TABLES: u64 = 16;

#[derive(Clone)]
pub struct TableCache {
    mask: QualityMask,
    tables: Cache<PathBuf, Arc<PriceTable>>,
}

impl TableCache {
    pub fn new(mask: QualityMask) -> Self {
        Self {
            mask,
            tables: Cache::new(MAX_TABLES),
        }
    }

    /// Return the cached table for `path`, loading and masking it on a miss.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<PriceTable>, LoadError> {
        if let Some(table) = self.tables.get(path) {
            tracing::debug!(path = %path.display(), "price table cache hit");
            return Ok(table);
        }

        let mut table = load_price_table(path)?;
        let masked = self.mask.apply(&mut table);
        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            items = table.items().len(),
            masked_cells = masked,
            cutoff = %self.mask.cutoff,
            "loaded price table"
        );

        let table = Arc::new(table);
        self.tables.insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.tables.contains_key(path)
    }

    /// Drop the entry for `path`; the next `get_or_load` re-reads the file.
    pub fn invalidate(&self, path: &Path) {
        self.tables.invalidate(path);
    }

    pub fn clear(&self) {
        self.tables.invalidate_all();
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new(QualityMask::default())
    }
}

impl std::fmt::Debug for TableCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableCache")
            .field("mask", &self.mask)
            .field("entries", &self.tables.entry_count())
            .finish()
    }
}
