//! Application layer driving the invoice form.
//!
//! [`session::InvoiceSession`] owns all form state (current input, stored
//! lines, edit cursor) and changes it only through its operations.

pub mod session;
