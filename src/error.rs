use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Structured failure returned by the compiler, the import validator and the output sequence.
///
/// Every variant is recoverable; the caller decides how to present it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("please select a {field}")]
    EmptySelection { field: &'static str },

    #[error("paragraph needs a {field} before it can be compiled")]
    IncompleteSelection { field: &'static str },

    #[error("{field} must be a number, got {input:?}")]
    InvalidNumber { field: &'static str, input: String },

    #[error("{field} must be between {min}-{max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("custom id must be a valid number, got {input:?}")]
    InvalidCustomId { input: String },

    #[error("add at least one snippet to compile")]
    EmptyContent,

    #[error("poem text must contain at least one non-empty line")]
    EmptyLines,

    #[error("failed to parse json: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("uploaded json is not an array")]
    NotAnArray,

    #[error("invalid snippet at index {index}: missing 'type' property")]
    MissingType { index: usize },

    #[error("invalid snippet of type '{kind}' at index {index}: missing 'id' property")]
    MissingId { index: usize, kind: String },

    #[error("invalid snippet of type '{kind}' at index {index}: missing '{field}' property")]
    MissingRequiredField {
        index: usize,
        kind: String,
        field: &'static str,
    },

    #[error("invalid snippet of type '{kind}' at index {index}: empty '{field}' array")]
    EmptyCollection {
        index: usize,
        kind: String,
        field: &'static str,
    },

    #[error("stored record at index {index} is not valid json")]
    MalformedStoredRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("nothing to export")]
    NothingToExport,

    #[error("serialize record: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    /// Stable identifier handed to the UI alongside the message.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::EmptyInput { .. } => "EmptyInput",
            Error::EmptySelection { .. } => "EmptySelection",
            Error::IncompleteSelection { .. } => "IncompleteSelection",
            Error::InvalidNumber { .. } => "InvalidNumber",
            Error::OutOfRange { .. } => "OutOfRange",
            Error::InvalidCustomId { .. } => "InvalidCustomId",
            Error::EmptyContent => "EmptyContent",
            Error::EmptyLines => "EmptyLines",
            Error::InvalidJson(_) => "InvalidJson",
            Error::NotAnArray => "NotAnArray",
            Error::MissingType { .. } => "MissingType",
            Error::MissingId { .. } => "MissingId",
            Error::MissingRequiredField { .. } => "MissingRequiredField",
            Error::EmptyCollection { .. } => "EmptyCollection",
            Error::MalformedStoredRecord { .. } => "MalformedStoredRecord",
            Error::NothingToExport => "NothingToExport",
            Error::Serialize(_) => "Serialize",
        }
    }
}
