use serde::{Deserialize, Serialize};

/// Discriminant carried in every record's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Chapter,
    Heading,
    Hints,
    Page,
    Paragraph,
    Poem,
    Image,
    FooterPassage,
}

impl RecordKind {
    pub const ALL: [RecordKind; 8] = [
        RecordKind::Chapter,
        RecordKind::Heading,
        RecordKind::Hints,
        RecordKind::Page,
        RecordKind::Paragraph,
        RecordKind::Poem,
        RecordKind::Image,
        RecordKind::FooterPassage,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Chapter => "chapter",
            RecordKind::Heading => "heading",
            RecordKind::Hints => "hints",
            RecordKind::Page => "page",
            RecordKind::Paragraph => "paragraph",
            RecordKind::Poem => "poem",
            RecordKind::Image => "image",
            RecordKind::FooterPassage => "footer_passage",
        }
    }

    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum HeadingType {
    #[default]
    Main,
    Sub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Text,
    Bold,
    Italic,
    #[value(name = "eng_page")]
    EngPage,
    Verse,
    Word,
}

impl ContentKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Bold => "bold",
            ContentKind::Italic => "italic",
            ContentKind::EngPage => "eng_page",
            ContentKind::Verse => "verse",
            ContentKind::Word => "word",
        }
    }
}

/// One inline item of a paragraph. `link` is only ever set on verse items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    #[default]
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub value: String,
}

impl PoemLine {
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            kind: LineKind::Line,
            value: value.to_owned(),
        }
    }
}

/// A compiled record. Field order of each variant is the key order of its JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Chapter {
        value: String,
        id: String,
    },
    Heading {
        value: String,
        id: String,
        #[serde(rename = "headingType")]
        heading_type: HeadingType,
    },
    Hints {
        value: String,
        id: String,
    },
    Page {
        value: String,
        id: String,
    },
    Paragraph {
        id: String,
        content: Vec<ContentItem>,
    },
    Poem {
        id: String,
        title: String,
        lines: Vec<PoemLine>,
    },
    Image {
        src: String,
    },
    FooterPassage {
        id: String,
        value: String,
    },
}

impl Record {
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Chapter { .. } => RecordKind::Chapter,
            Record::Heading { .. } => RecordKind::Heading,
            Record::Hints { .. } => RecordKind::Hints,
            Record::Page { .. } => RecordKind::Page,
            Record::Paragraph { .. } => RecordKind::Paragraph,
            Record::Poem { .. } => RecordKind::Poem,
            Record::Image { .. } => RecordKind::Image,
            Record::FooterPassage { .. } => RecordKind::FooterPassage,
        }
    }

    /// `None` only for images.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Record::Chapter { id, .. }
            | Record::Heading { id, .. }
            | Record::Hints { id, .. }
            | Record::Page { id, .. }
            | Record::Paragraph { id, .. }
            | Record::Poem { id, .. }
            | Record::FooterPassage { id, .. } => Some(id),
            Record::Image { .. } => None,
        }
    }

    /// Pretty JSON with 2-space indentation, the form records are stored in.
    pub fn to_pretty_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(crate::Error::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_serializes_in_record_key_order() -> anyhow::Result<()> {
        let record = Record::Heading {
            value: "1. Intro".to_owned(),
            id: "main-heading-1".to_owned(),
            heading_type: HeadingType::Main,
        };

        let json = serde_json::to_string(&record)?;
        assert_eq!(
            json,
            r#"{"type":"heading","value":"1. Intro","id":"main-heading-1","headingType":"main"}"#
        );
        Ok(())
    }

    #[test]
    fn content_item_omits_missing_link() -> anyhow::Result<()> {
        let record = Record::Paragraph {
            id: "v1-c01-007".to_owned(),
            content: vec![
                ContentItem {
                    kind: ContentKind::EngPage,
                    value: "p. 12".to_owned(),
                    link: None,
                },
                ContentItem {
                    kind: ContentKind::Verse,
                    value: "Ps 23".to_owned(),
                    link: Some("#".to_owned()),
                },
            ],
        };

        let json = serde_json::to_string(&record)?;
        assert_eq!(
            json,
            r##"{"type":"paragraph","id":"v1-c01-007","content":[{"type":"eng_page","value":"p. 12"},{"type":"verse","value":"Ps 23","link":"#"}]}"##
        );
        Ok(())
    }

    #[test]
    fn poem_lines_carry_line_tag() -> anyhow::Result<()> {
        let record = Record::Poem {
            id: "p1".to_owned(),
            title: "T".to_owned(),
            lines: vec![PoemLine::new("a")],
        };

        let json = serde_json::to_string(&record)?;
        assert_eq!(
            json,
            r#"{"type":"poem","id":"p1","title":"T","lines":[{"type":"line","value":"a"}]}"#
        );
        Ok(())
    }

    #[test]
    fn image_has_no_id() {
        let record = Record::Image {
            src: "https://example.com/a.png".to_owned(),
        };
        assert_eq!(record.id(), None);
        assert_eq!(record.kind(), RecordKind::Image);
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in RecordKind::ALL {
            assert_eq!(RecordKind::from_type_name(kind.as_str()), Some(kind));
        }
        assert_eq!(RecordKind::from_type_name("footnote"), None);
    }
}
