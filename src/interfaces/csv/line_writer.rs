use crate::domain::line::InvoiceLineRecord;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 8] = [
    "line",
    "qty",
    "price",
    "discount_per",
    "discount",
    "tax_per",
    "tax",
    "total_price",
];

/// One table row: raw inputs as typed, derived amounts as numbers.
#[derive(Serialize)]
struct LineRow<'a> {
    line: usize,
    qty: &'a str,
    price: &'a str,
    discount_per: &'a str,
    discount: Decimal,
    tax_per: &'a str,
    tax: Decimal,
    total_price: Decimal,
}

impl<'a> LineRow<'a> {
    fn new(line: usize, record: &'a InvoiceLineRecord) -> Self {
        let input = record.input();
        Self {
            line,
            qty: &input.qty,
            price: &input.price,
            discount_per: &input.discount_per,
            discount: record.discount(),
            tax_per: &input.tax_per,
            tax: record.tax(),
            total_price: record.total_price(),
        }
    }
}

/// Writes stored invoice lines as a CSV table, in insertion order.
pub struct LineWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> LineWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    /// Writes the header followed by one row per record. The header is written
    /// even when there are no records.
    pub fn write_lines(&mut self, records: &[InvoiceLineRecord]) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for (line, record) in records.iter().enumerate() {
            self.writer.serialize(LineRow::new(line, record))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
