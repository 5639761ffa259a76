//! Selectable option catalogs and input helpers the form layer offers to the author.

use serde::Serialize;

use crate::numbering::{pad3, parse_leading_int};

/// Heading-number token meaning "no numeric prefix".
pub const NO_HEADING_NUMBER: &str = "no-prefix";

pub const HEADING_NUMBER_MAX: u8 = 20;

pub const PAGE_MIN: i64 = 1;
pub const PAGE_MAX: i64 = 1000;

const VOLUME_COUNT: u8 = 7;
const CHAPTER_COUNT: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
}

/// `v1`..`v7`, labelled `Volume 01`..`Volume 07`.
#[must_use]
pub fn volume_options() -> Vec<SelectOption> {
    (1..=VOLUME_COUNT)
        .map(|n| SelectOption {
            id: format!("v{n}"),
            label: format!("Volume {n:02}"),
        })
        .collect()
}

/// `c01`..`c20`, labelled `Chapter 01`..`Chapter 20`.
#[must_use]
pub fn chapter_options() -> Vec<SelectOption> {
    (1..=CHAPTER_COUNT)
        .map(|n| SelectOption {
            id: format!("c{n:02}"),
            label: format!("Chapter {n:02}"),
        })
        .collect()
}

/// `no-prefix` followed by `1`..`20`.
#[must_use]
pub fn heading_number_options() -> Vec<String> {
    std::iter::once(NO_HEADING_NUMBER.to_owned())
        .chain((1..=HEADING_NUMBER_MAX).map(|n| n.to_string()))
        .collect()
}

/// Every selectable option, in the order the form offers them.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub volumes: Vec<SelectOption>,
    pub chapters: Vec<SelectOption>,
    pub heading_numbers: Vec<String>,
}

#[must_use]
pub fn catalog() -> Catalog {
    Catalog {
        volumes: volume_options(),
        chapters: chapter_options(),
        heading_numbers: heading_number_options(),
    }
}

/// Keeps only ASCII digits, the way the page-number field filters keystrokes.
#[must_use]
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Live preview line shown under the page-number field. Non-digits are ignored, as in
/// [`crate::compile::page`].
#[must_use]
pub fn page_preview(input: &str) -> String {
    let digits = digits_only(input);
    if digits.is_empty() {
        return format!("Enter a page number ({PAGE_MIN}-{PAGE_MAX}).");
    }
    match parse_leading_int(&digits) {
        Some(n) if (PAGE_MIN..=PAGE_MAX).contains(&n) => format!("Formatted: Page {}", pad3(n)),
        _ => format!("Invalid: Must be a number between {PAGE_MIN}-{PAGE_MAX}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_expected_bounds() {
        let volumes = volume_options();
        assert_eq!(volumes.len(), 7);
        assert_eq!(volumes[0].id, "v1");
        assert_eq!(volumes[6].label, "Volume 07");

        let chapters = chapter_options();
        assert_eq!(chapters.len(), 20);
        assert_eq!(chapters[0].id, "c01");
        assert_eq!(chapters[19].label, "Chapter 20");

        let numbers = heading_number_options();
        assert_eq!(numbers.len(), 21);
        assert_eq!(numbers[0], NO_HEADING_NUMBER);
        assert_eq!(numbers[1], "1");
        assert_eq!(numbers.last().map(String::as_str), Some("20"));
    }

    #[test]
    fn page_preview_reports_each_state() {
        assert_eq!(page_preview(""), "Enter a page number (1-1000).");
        assert_eq!(page_preview("12"), "Formatted: Page 012");
        assert_eq!(page_preview("1000"), "Formatted: Page 1000");
        assert_eq!(
            page_preview("0"),
            "Invalid: Must be a number between 1-1000."
        );
    }

    #[test]
    fn digits_only_strips_everything_else() {
        assert_eq!(digits_only("1a2-3 "), "123");
        assert_eq!(page_preview("p.45"), "Formatted: Page 045");
        assert_eq!(page_preview("abc"), "Enter a page number (1-1000).");
        assert_eq!(
            page_preview("1001"),
            "Invalid: Must be a number between 1-1000."
        );
    }

    #[test]
    fn catalog_serializes_as_yaml() -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(&catalog())?;
        assert!(yaml.contains("- id: v1\n  label: Volume 01\n"));
        assert!(yaml.contains("- id: c20\n  label: Chapter 20\n"));
        assert!(yaml.contains("- no-prefix\n"));
        Ok(())
    }
}
