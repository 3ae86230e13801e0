use crate::domain::event::{EventRecord, FormEvent};
use crate::error::{InvoiceError, Result};
use csv::StringRecord;
use std::io::Read;

/// Column whose cells are kept exactly as typed.
const VALUE_COLUMN: &str = "value";

/// Reads form events from a CSV script.
///
/// Expects the columns `action, field, value`. Headers and the `action` and
/// `field` cells are whitespace-trimmed; `value` cells are kept verbatim so
/// typed text reaches the form unchanged. Rows may omit trailing empty cells.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads the header row and returns an iterator that lazily reads and
    /// validates events.
    ///
    /// A bad row yields an error for that row only; later rows are still read.
    pub fn events(mut self) -> Result<impl Iterator<Item = Result<FormEvent>>> {
        let headers = self.reader.headers()?.clone();
        Ok(self.reader.into_records().map(move |result| {
            let row = trim_selectors(&result?, &headers);
            let record: EventRecord = row.deserialize(Some(&headers))?;
            FormEvent::try_from(record)
        }))
    }
}

fn trim_selectors(row: &StringRecord, headers: &StringRecord) -> StringRecord {
    row.iter()
        .zip(headers.iter().chain(std::iter::repeat("")))
        .map(|(cell, header)| if header == VALUE_COLUMN { cell } else { cell.trim() })
        .collect()
}
