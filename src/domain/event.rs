use super::line::InputField;
use crate::error::InvoiceError;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    Change,
    Submit,
    Edit,
}

/// One row of a form script, as read from CSV.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct EventRecord {
    pub action: EventAction,
    pub field: Option<InputField>,
    pub value: Option<String>,
}

/// A user interaction with the invoice form.
#[derive(Debug, PartialEq, Clone)]
pub enum FormEvent {
    /// Text typed into one of the input boxes.
    Change { field: InputField, value: String },
    /// The Submit/Update button.
    Submit,
    /// The per-row Edit button.
    Edit { index: usize },
}

impl TryFrom<EventRecord> for FormEvent {
    type Error = InvoiceError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        match record.action {
            EventAction::Change => {
                let field = record.field.ok_or_else(|| {
                    InvoiceError::InvalidEvent("change requires a field".to_string())
                })?;
                Ok(FormEvent::Change {
                    field,
                    value: record.value.unwrap_or_default(),
                })
            }
            EventAction::Submit => Ok(FormEvent::Submit),
            EventAction::Edit => {
                let raw = record.value.unwrap_or_default();
                let index = raw.trim().parse().map_err(|_| {
                    InvoiceError::InvalidEvent(format!("edit requires a line index, got '{raw}'"))
                })?;
                Ok(FormEvent::Edit { index })
            }
        }
    }
}
