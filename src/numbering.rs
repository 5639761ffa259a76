//! Identifier numbering: lenient integer parsing, zero padding and the per-session counters.

use crate::error::{Error, Result};
use crate::formats::HeadingType;

/// Running counters for auto-numbered records.
///
/// Owned by [`crate::output::OutputSequence`] and reset only by its `clear()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub main_heading: u32,
    pub sub_heading: u32,
    pub hints: u32,
}

impl Counters {
    pub fn next_heading_id(&mut self, heading_type: HeadingType) -> String {
        match heading_type {
            HeadingType::Main => {
                self.main_heading += 1;
                format!("main-heading-{}", self.main_heading)
            }
            HeadingType::Sub => {
                self.sub_heading += 1;
                format!("sub-heading-{}", self.sub_heading)
            }
        }
    }

    pub fn next_hints_id(&mut self) -> String {
        self.hints += 1;
        format!("hints-{}", self.hints)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parses the leading integer of `input`.
///
/// Leading whitespace is skipped, one optional sign is accepted, and the longest run of ASCII
/// digits after it is used; anything after the digits is ignored (`"12abc"` is 12).
#[must_use]
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Left-pads the decimal text with `0` to at least three characters. Wider numbers keep every
/// digit (`1000` stays `1000`) and a sign counts as a character (`-5` becomes `0-5`).
#[must_use]
pub fn pad3(n: i64) -> String {
    format!("{:0>3}", n.to_string())
}

/// Formats a paragraph custom id: `"7"` becomes `"007"`.
pub fn format_custom_id(input: &str) -> Result<String> {
    let n = parse_leading_int(input).ok_or_else(|| Error::InvalidCustomId {
        input: input.to_owned(),
    })?;
    Ok(pad3(n))
}
