use crate::error::{Error, Result};
use crate::formats::{ContentItem, ContentKind, Record};
use crate::numbering::format_custom_id;

/// Link stored on verse items when the author gives none.
pub const VERSE_LINK_PLACEHOLDER: &str = "#";

/// Paragraph under construction: the volume/chapter selection, the custom id and the ordered
/// inline snippets collected so far.
///
/// Nothing here is part of the output sequence until
/// [`crate::output::OutputSequence::commit_paragraph`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphDraft {
    pub volume: String,
    pub chapter: String,
    pub custom_id: String,
    snippets: Vec<ContentItem>,
}

impl ParagraphDraft {
    #[must_use]
    pub fn new(volume: &str, chapter: &str, custom_id: &str) -> Self {
        Self {
            volume: volume.to_owned(),
            chapter: chapter.to_owned(),
            custom_id: custom_id.to_owned(),
            snippets: Vec::new(),
        }
    }

    #[must_use]
    pub fn snippets(&self) -> &[ContentItem] {
        &self.snippets
    }

    /// Appends one inline item. `link` is only kept for verse items.
    pub fn add_snippet(
        &mut self,
        kind: ContentKind,
        value: &str,
        link: Option<&str>,
    ) -> Result<&ContentItem> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::EmptyInput {
                field: "snippet text",
            });
        }

        let link = match kind {
            ContentKind::Verse => Some(link.unwrap_or(VERSE_LINK_PLACEHOLDER).to_owned()),
            _ => None,
        };
        self.snippets.push(ContentItem {
            kind,
            value: value.to_owned(),
            link,
        });
        tracing::debug!(kind = kind.as_str(), count = self.snippets.len(), "added snippet");

        Ok(&self.snippets[self.snippets.len() - 1])
    }

    /// Builds the paragraph record without consuming the draft; repeated calls on an unchanged
    /// draft produce identical records.
    pub fn assemble(&self) -> Result<Record> {
        if self.volume.trim().is_empty() {
            return Err(Error::IncompleteSelection { field: "volume" });
        }
        if self.chapter.trim().is_empty() {
            return Err(Error::IncompleteSelection { field: "chapter" });
        }
        if self.custom_id.trim().is_empty() {
            return Err(Error::IncompleteSelection { field: "custom id" });
        }
        if self.snippets.is_empty() {
            return Err(Error::EmptyContent);
        }

        let custom_id = format_custom_id(&self.custom_id)?;
        Ok(Record::Paragraph {
            id: format!("{}-{}-{custom_id}", self.volume, self.chapter),
            content: self.snippets.clone(),
        })
    }

    /// Drops the collected snippets; the volume, chapter and custom id stay selected.
    pub fn clear_snippets(&mut self) {
        self.snippets.clear();
    }
}
