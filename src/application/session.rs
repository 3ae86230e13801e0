use crate::domain::event::FormEvent;
use crate::domain::line::{InputField, InvoiceLineRecord, derive_record};
use crate::domain::ports::RecordStoreBox;
use crate::error::{InvoiceError, Result};
use tracing::{info, warn};

/// Whether the form is composing a new line or editing a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Composing,
    Editing(usize),
}

impl FormMode {
    /// Caption of the form's submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Composing => "Submit",
            FormMode::Editing(_) => "Update",
        }
    }
}

/// What a submit did with the form's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Appended(usize),
    Replaced(usize),
}

/// State of one invoice form session.
///
/// Holds the stored lines, the line being composed and the edit cursor. All
/// changes go through [`change_field`](Self::change_field),
/// [`submit`](Self::submit) and [`begin_edit`](Self::begin_edit).
pub struct InvoiceSession {
    store: RecordStoreBox,
    form: InvoiceLineRecord,
    cursor: Option<usize>,
}

impl InvoiceSession {
    /// Creates a session with a blank form over `store`.
    pub fn new(store: RecordStoreBox) -> Self {
        Self {
            store,
            form: InvoiceLineRecord::default(),
            cursor: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        match self.cursor {
            Some(index) => FormMode::Editing(index),
            None => FormMode::Composing,
        }
    }

    /// The line currently in the form, with its derived amounts.
    pub fn form(&self) -> &InvoiceLineRecord {
        &self.form
    }

    pub fn records(&self) -> &[InvoiceLineRecord] {
        self.store.records()
    }

    /// Types `value` into `field` and recomputes the form's derived amounts.
    pub fn change_field(&mut self, field: InputField, value: &str) -> &InvoiceLineRecord {
        self.form = derive_record(self.form.input(), field, value);
        &self.form
    }

    /// Stores the form's line and resets the form.
    ///
    /// Appends when composing. When editing, replaces the line under the
    /// cursor and returns to composing.
    pub fn submit(&mut self) -> Result<Submission> {
        let label = self.mode().submit_label();
        let record = self.form.clone();
        let submission = match self.cursor {
            Some(index) => {
                self.store.replace_at(index, record)?;
                self.cursor = None;
                Submission::Replaced(index)
            }
            None => Submission::Appended(self.store.append(record)),
        };
        self.form = InvoiceLineRecord::default();
        info!(
            action = label,
            ?submission,
            lines = self.store.len(),
            "submitted invoice line"
        );
        Ok(submission)
    }

    /// Loads the stored line at `index` into the form for editing.
    ///
    /// Editing another line while one is already open moves the cursor; the
    /// unsaved form contents are discarded.
    pub fn begin_edit(&mut self, index: usize) -> Result<&InvoiceLineRecord> {
        let record = self
            .store
            .get(index)
            .ok_or(InvoiceError::RecordNotFound(index))?
            .clone();
        if let Some(previous) = self.cursor.filter(|&previous| previous != index) {
            info!(previous, index, "switching edited invoice line");
        } else {
            info!(index, "editing invoice line");
        }
        self.form = record;
        self.cursor = Some(index);
        Ok(&self.form)
    }

    /// Dispatches a scripted form event.
    pub fn apply(&mut self, event: FormEvent) -> Result<()> {
        match event {
            FormEvent::Change { field, value } => {
                self.change_field(field, &value);
            }
            FormEvent::Submit => {
                self.submit()?;
            }
            FormEvent::Edit { index } => {
                self.begin_edit(index)?;
            }
        }
        Ok(())
    }

    /// Ends the session and returns the stored lines.
    ///
    /// An edit still open at this point is dropped.
    pub fn into_records(self) -> Vec<InvoiceLineRecord> {
        if let FormMode::Editing(index) = self.mode() {
            warn!(index, "session ended with an unsaved edit");
        }
        self.store.records().to_vec()
    }
}
