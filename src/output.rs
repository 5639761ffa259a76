//! The ordered output sequence of compiled records and the session counters it owns.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::formats::Record;
use crate::numbering::Counters;
use crate::paragraph::ParagraphDraft;
use crate::validate::{self, ImportedRecord};

pub const EXPORT_FILE_NAME: &str = "compiled_output.json";
pub const EXPORT_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The stored text of the record that was removed.
    Removed(String),
    NothingToUndo,
}

/// Append-only list of records stored as pretty JSON text, in arrival order.
///
/// Entries are never edited in place; `undo` drops the last one and `clear` drops all of them
/// together with the counters.
#[derive(Debug, Clone, Default)]
pub struct OutputSequence {
    entries: Vec<String>,
    counters: Counters,
}

impl OutputSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates stored entries as-is. Nothing is validated until [`Self::render`].
    #[must_use]
    pub fn from_stored(entries: Vec<String>) -> Self {
        Self {
            entries,
            counters: Counters::default(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn counters_mut(&mut self) -> &mut Counters {
        &mut self.counters
    }

    pub fn append(&mut self, record: &Record) -> Result<()> {
        let text = record.to_pretty_json()?;
        self.entries.push(text);
        tracing::info!(
            kind = %record.kind(),
            id = record.id().unwrap_or_default(),
            len = self.entries.len(),
            "appended record"
        );
        Ok(())
    }

    /// Appends every record or none of them.
    pub fn append_batch(&mut self, records: &[ImportedRecord]) -> Result<usize> {
        let texts = records
            .iter()
            .map(ImportedRecord::to_pretty_json)
            .collect::<Result<Vec<_>>>()?;
        let added = texts.len();
        self.entries.extend(texts);
        tracing::info!(added, len = self.entries.len(), "appended batch");
        Ok(added)
    }

    /// Validates an exported array and appends its records. The sequence is untouched on error.
    pub fn import_str(&mut self, text: &str) -> Result<usize> {
        let records = validate::validate_str(text)?;
        self.append_batch(&records)
    }

    /// Assembles the draft, appends the paragraph and clears the draft's snippets.
    ///
    /// The draft's volume, chapter and custom id are kept for the next paragraph.
    pub fn commit_paragraph(&mut self, draft: &mut ParagraphDraft) -> Result<()> {
        let record = draft.assemble()?;
        self.append(&record)?;
        draft.clear_snippets();
        Ok(())
    }

    pub fn undo(&mut self) -> UndoOutcome {
        match self.entries.pop() {
            Some(text) => {
                tracing::info!(len = self.entries.len(), "removed most recent record");
                UndoOutcome::Removed(text)
            }
            None => {
                tracing::info!("nothing to undo");
                UndoOutcome::NothingToUndo
            }
        }
    }

    /// Empties the sequence and resets every counter to zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.counters.reset();
        tracing::info!("cleared output");
    }

    /// Re-parses every stored entry and prints them as one pretty array.
    pub fn render(&self) -> Result<String> {
        let values = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, text)| {
                serde_json::from_str::<Value>(text)
                    .map_err(|source| Error::MalformedStoredRecord { index, source })
            })
            .collect::<Result<Vec<_>>>()?;
        serde_json::to_string_pretty(&values).map_err(Error::Serialize)
    }

    /// Same text as [`Self::render`], refused when there is nothing to export.
    pub fn export(&self) -> Result<String> {
        if self.entries.is_empty() {
            return Err(Error::NothingToExport);
        }
        self.render()
    }
}
