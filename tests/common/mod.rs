#![allow(dead_code)]

use invoice_form::application::session::InvoiceSession;
use invoice_form::domain::line::InputField;
use invoice_form::infrastructure::in_memory::InMemoryRecordStore;
use tempfile::NamedTempFile;

/// Writes a form event script with the standard header to a temp file.
pub fn write_script(rows: &[[&str; 3]]) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let mut wtr = csv::WriterBuilder::new().from_path(file.path()).unwrap();

    wtr.write_record(["action", "field", "value"]).unwrap();
    for row in rows {
        wtr.write_record(row).unwrap();
    }

    wtr.flush().unwrap();
    file
}

pub fn session() -> InvoiceSession {
    InvoiceSession::new(Box::new(InMemoryRecordStore::new()))
}

/// Types all four fields into the form, in form order.
pub fn enter_line(session: &mut InvoiceSession, qty: &str, price: &str, discount: &str, tax: &str) {
    for (field, value) in InputField::ALL.into_iter().zip([qty, price, discount, tax]) {
        session.change_field(field, value);
    }
}
