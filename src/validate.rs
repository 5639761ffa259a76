//! Re-import validation of an exported record array.
//!
//! Input is an untyped [`serde_json::Value`]. Each element is decoded into an [`ImportedRecord`]
//! whose kind is either one of the known [`RecordKind`]s or [`ImportedKind::Unknown`]. The batch
//! is all-or-nothing: the first offending element fails the whole call.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::formats::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportedKind {
    Known(RecordKind),
    /// Forward-compatible catch-all: only the base `type`/`id` checks apply.
    Unknown(String),
}

impl ImportedKind {
    fn from_type(value: &Value) -> Self {
        match value {
            Value::String(name) => match RecordKind::from_type_name(name) {
                Some(kind) => ImportedKind::Known(kind),
                None => ImportedKind::Unknown(name.clone()),
            },
            other => ImportedKind::Unknown(other.to_string()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ImportedKind::Known(kind) => kind.as_str(),
            ImportedKind::Unknown(name) => name,
        }
    }
}

/// An accepted element. `fields` is the element exactly as imported, unknown keys included.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRecord {
    pub kind: ImportedKind,
    pub fields: Map<String, Value>,
}

impl ImportedRecord {
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.fields).map_err(Error::Serialize)
    }
}

/// Parses `text` as JSON and validates it as a record batch.
pub fn validate_str(text: &str) -> Result<Vec<ImportedRecord>> {
    let value: Value = serde_json::from_str(text).map_err(Error::InvalidJson)?;
    validate_batch(value)
}

pub fn validate_batch(value: Value) -> Result<Vec<ImportedRecord>> {
    let Value::Array(items) = value else {
        return Err(Error::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| validate_record(index, item))
        .collect()
}

fn validate_record(index: usize, item: Value) -> Result<ImportedRecord> {
    let Value::Object(fields) = item else {
        return Err(Error::MissingType { index });
    };
    let kind = match fields.get("type") {
        Some(ty) if is_truthy(ty) => ImportedKind::from_type(ty),
        _ => return Err(Error::MissingType { index }),
    };

    if kind != ImportedKind::Known(RecordKind::Image) && !field_is_truthy(&fields, "id") {
        return Err(Error::MissingId {
            index,
            kind: kind.name().to_owned(),
        });
    }

    match &kind {
        ImportedKind::Known(
            RecordKind::Chapter
            | RecordKind::Heading
            | RecordKind::Hints
            | RecordKind::Page
            | RecordKind::FooterPassage,
        ) => require_field(index, &kind, &fields, "value")?,
        ImportedKind::Known(RecordKind::Paragraph) => {
            require_non_empty_array(index, &kind, &fields, "content")?;
        }
        ImportedKind::Known(RecordKind::Poem) => {
            require_field(index, &kind, &fields, "title")?;
            require_non_empty_array(index, &kind, &fields, "lines")?;
        }
        ImportedKind::Known(RecordKind::Image) => require_field(index, &kind, &fields, "src")?,
        ImportedKind::Unknown(name) => {
            tracing::warn!(
                index,
                kind = %name,
                "unknown record kind; basic validation applied"
            );
        }
    }

    Ok(ImportedRecord { kind, fields })
}

fn require_field(
    index: usize,
    kind: &ImportedKind,
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<()> {
    if field_is_truthy(fields, field) {
        Ok(())
    } else {
        Err(Error::MissingRequiredField {
            index,
            kind: kind.name().to_owned(),
            field,
        })
    }
}

fn require_non_empty_array(
    index: usize,
    kind: &ImportedKind,
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<()> {
    match fields.get(field) {
        Some(Value::Array(items)) if !items.is_empty() => Ok(()),
        Some(Value::Array(_)) => Err(Error::EmptyCollection {
            index,
            kind: kind.name().to_owned(),
            field,
        }),
        _ => Err(Error::MissingRequiredField {
            index,
            kind: kind.name().to_owned(),
            field,
        }),
    }
}

fn field_is_truthy(fields: &Map<String, Value>, field: &str) -> bool {
    fields.get(field).is_some_and(is_truthy)
}

/// Presence test used for required fields: `null`, `false`, `0` and `""` count as missing.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
