#![forbid(unsafe_code)]

pub mod cli;
pub mod compile;
pub mod error;
pub mod export;
pub mod formats;
pub mod logging;
pub mod numbering;
pub mod options;
pub mod output;
pub mod paragraph;
pub mod script;
pub mod snippet;
pub mod validate;

pub use error::{Error, Result};
pub use formats::{ContentItem, ContentKind, HeadingType, PoemLine, Record, RecordKind};
pub use output::{OutputSequence, UndoOutcome};
pub use paragraph::ParagraphDraft;
