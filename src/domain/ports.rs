use super::line::InvoiceLineRecord;
use crate::error::Result;

/// Ordered storage for submitted invoice lines.
///
/// Records keep their insertion order and are addressed by position. Nothing
/// is ever removed; a record only changes by being replaced wholesale.
pub trait RecordStore {
    /// Appends `record` and returns its index.
    fn append(&mut self, record: InvoiceLineRecord) -> usize;
    /// Overwrites the record at `index`, failing if there is none.
    fn replace_at(&mut self, index: usize, record: InvoiceLineRecord) -> Result<()>;
    fn get(&self, index: usize) -> Option<&InvoiceLineRecord>;
    fn records(&self) -> &[InvoiceLineRecord];

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

pub type RecordStoreBox = Box<dyn RecordStore>;
