use crate::domain::line::InvoiceLineRecord;
use crate::error::Result;
use std::io::Write;

/// Writes stored invoice lines as a pretty-printed JSON array.
pub fn write_lines<W: Write>(mut sink: W, records: &[InvoiceLineRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, records)?;
    writeln!(sink)?;
    sink.flush()?;
    Ok(())
}
