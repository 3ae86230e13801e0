//! Invoice line model: field coercion, derived amounts, form events and the
//! storage port.

pub mod amount;
pub mod event;
pub mod line;
pub mod ports;
