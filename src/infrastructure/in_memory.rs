use crate::domain::line::InvoiceLineRecord;
use crate::domain::ports::RecordStore;
use crate::error::{InvoiceError, Result};
use tracing::debug;

/// A session-local store of invoice lines backed by a `Vec`.
///
/// Everything is dropped with the store; there is no persistence.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecordStore {
    records: Vec<InvoiceLineRecord>,
}

impl InMemoryRecordStore {
    /// Creates a new, empty in-memory record store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn append(&mut self, record: InvoiceLineRecord) -> usize {
        self.records.push(record);
        let index = self.records.len() - 1;
        debug!(index, "appended invoice line");
        index
    }

    fn replace_at(&mut self, index: usize, record: InvoiceLineRecord) -> Result<()> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or(InvoiceError::RecordNotFound(index))?;
        *slot = record;
        debug!(index, "replaced invoice line");
        Ok(())
    }

    fn get(&self, index: usize) -> Option<&InvoiceLineRecord> {
        self.records.get(index)
    }

    fn records(&self) -> &[InvoiceLineRecord] {
        &self.records
    }
}
