//! One compile function per record kind.
//!
//! Each function validates its raw inputs in order and returns the first violated precondition
//! as an [`Error`]. Only heading and hints compilation touch the [`Counters`], and only after
//! every check has passed.

use crate::error::{Error, Result};
use crate::formats::{HeadingType, PoemLine, Record};
use crate::numbering::{Counters, pad3, parse_leading_int};
use crate::options::{HEADING_NUMBER_MAX, NO_HEADING_NUMBER, PAGE_MAX, PAGE_MIN, digits_only};

const CHAPTER_SELECTOR_PREFIX: &str = "chapter-";
const CHAPTER_LABEL: &str = "அத்தியாயம் –";

/// Compiles a chapter marker from a selector such as `chapter-07`.
///
/// The numeric suffix is not range checked.
pub fn chapter(selector: &str) -> Result<Record> {
    if selector.is_empty() {
        return Err(Error::EmptySelection { field: "chapter" });
    }

    let suffix = selector.replacen(CHAPTER_SELECTOR_PREFIX, "", 1);
    let record = Record::Chapter {
        value: format!("{CHAPTER_LABEL} {suffix}"),
        id: selector.to_owned(),
    };
    tracing::debug!(id = selector, "compiled chapter");
    Ok(record)
}

/// Parses the optional heading-number token. Empty and [`NO_HEADING_NUMBER`] mean no prefix.
pub fn heading_number(token: &str) -> Result<Option<u8>> {
    let token = token.trim();
    if token.is_empty() || token == NO_HEADING_NUMBER {
        return Ok(None);
    }

    let n = token
        .parse::<i64>()
        .map_err(|_| Error::InvalidNumber {
            field: "heading number",
            input: token.to_owned(),
        })?;
    match u8::try_from(n) {
        Ok(n) if (1..=HEADING_NUMBER_MAX).contains(&n) => Ok(Some(n)),
        _ => Err(Error::OutOfRange {
            field: "heading number",
            value: n,
            min: 1,
            max: i64::from(HEADING_NUMBER_MAX),
        }),
    }
}

pub fn heading(
    counters: &mut Counters,
    text: &str,
    heading_type: HeadingType,
    number: &str,
) -> Result<Record> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyInput {
            field: "heading text",
        });
    }
    let number = heading_number(number)?;

    let value = match number {
        Some(n) => format!("{n}. {text}"),
        None => text.to_owned(),
    };
    let id = counters.next_heading_id(heading_type);
    tracing::debug!(%id, "compiled heading");

    Ok(Record::Heading {
        value,
        id,
        heading_type,
    })
}

pub fn hints(counters: &mut Counters, text: &str) -> Result<Record> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyInput {
            field: "hints text",
        });
    }

    let id = counters.next_hints_id();
    tracing::debug!(%id, "compiled hints");
    Ok(Record::Hints {
        value: text.to_owned(),
        id,
    })
}

/// Compiles a page marker. Non-digits are dropped first, so `1a2` is page 12.
///
/// Accepts `1..=1000`; the number is padded to at least three digits.
pub fn page(input: &str) -> Result<Record> {
    let n = parse_leading_int(&digits_only(input)).ok_or_else(|| Error::InvalidNumber {
        field: "page number",
        input: input.to_owned(),
    })?;
    if !(PAGE_MIN..=PAGE_MAX).contains(&n) {
        return Err(Error::OutOfRange {
            field: "page number",
            value: n,
            min: PAGE_MIN,
            max: PAGE_MAX,
        });
    }

    let padded = pad3(n);
    tracing::debug!(page = n, "compiled page");
    Ok(Record::Page {
        value: format!("Page {padded}"),
        id: format!("page-{padded}"),
    })
}

/// Splits raw poem text into trimmed, non-empty lines.
#[must_use]
pub fn poem_lines(text: &str) -> Vec<PoemLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PoemLine::new)
        .collect()
}

pub fn poem(id: &str, title: &str, text: &str) -> Result<Record> {
    let id = required(id, "poem id")?;
    let title = required(title, "poem title")?;
    let text = required(text, "poem text")?;

    let lines = poem_lines(text);
    if lines.is_empty() {
        return Err(Error::EmptyLines);
    }

    tracing::debug!(id, lines = lines.len(), "compiled poem");
    Ok(Record::Poem {
        id: id.to_owned(),
        title: title.to_owned(),
        lines,
    })
}

pub fn image(src: &str) -> Result<Record> {
    let src = required(src, "image url")?;
    tracing::debug!(src, "compiled image");
    Ok(Record::Image {
        src: src.to_owned(),
    })
}

pub fn footer_passage(id: &str, text: &str) -> Result<Record> {
    let id = required(id, "footer passage id")?;
    let text = required(text, "footer passage text")?;
    tracing::debug!(id, "compiled footer passage");
    Ok(Record::FooterPassage {
        id: id.to_owned(),
        value: text.to_owned(),
    })
}

fn required<'a>(input: &'a str, field: &'static str) -> Result<&'a str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput { field });
    }
    Ok(trimmed)
}
