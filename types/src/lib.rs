//! Core domain types for the emoji kitchen explorer.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

pub mod ui;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Codepoints
// ============================================================================

/// Longest hex run a single Unicode scalar can need (`10ffff`).
const MAX_SEGMENT_LEN: usize = 6;

/// Identifier for one emoji glyph: one or more hyphen-separated hex segments.
///
/// Examples: `1f600`, `2764-fe0f`. Normalized to lowercase on construction and
/// otherwise treated as an opaque key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmojiCodepoint(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodepointError {
    #[error("codepoint must not be empty")]
    Empty,
    #[error("codepoint `{raw}` has an invalid segment `{segment}`")]
    MalformedSegment { raw: String, segment: String },
}

impl EmojiCodepoint {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CodepointError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CodepointError::Empty);
        }

        for segment in trimmed.split('-') {
            let valid = !segment.is_empty()
                && segment.len() <= MAX_SEGMENT_LEN
                && segment.bytes().all(|b| b.is_ascii_hexdigit());
            if !valid {
                return Err(CodepointError::MalformedSegment {
                    raw: trimmed.to_string(),
                    segment: segment.to_string(),
                });
            }
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hyphen-delimited hex segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('-')
    }

    /// The base codepoint, without any variation selector suffix.
    #[must_use]
    pub fn first_segment(&self) -> &str {
        self.segments().next().unwrap_or(self.as_str())
    }

    /// Decode the segments into the emoji text they encode.
    ///
    /// Returns `None` if any segment is not a Unicode scalar value.
    #[must_use]
    pub fn to_glyph(&self) -> Option<String> {
        self.segments()
            .map(|segment| u32::from_str_radix(segment, 16).ok().and_then(char::from_u32))
            .collect()
    }
}

impl TryFrom<String> for EmojiCodepoint {
    type Error = CodepointError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmojiCodepoint {
    type Error = CodepointError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for EmojiCodepoint {
    type Err = CodepointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<EmojiCodepoint> for String {
    fn from(value: EmojiCodepoint) -> Self {
        value.0
    }
}

impl AsRef<str> for EmojiCodepoint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmojiCodepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Combination Records
// ============================================================================

/// A dated, directed pairing of two emoji known to have an upstream image.
///
/// The orientation matters: the remote image path is built from `left` then
/// `right`, and the date selects the release the image was published in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombinationRecord {
    #[serde(rename = "leftEmoji")]
    left: EmojiCodepoint,
    #[serde(rename = "rightEmoji")]
    right: EmojiCodepoint,
    date: String,
}

impl CombinationRecord {
    #[must_use]
    pub fn new(left: EmojiCodepoint, right: EmojiCodepoint, date: impl Into<String>) -> Self {
        Self {
            left,
            right,
            date: date.into(),
        }
    }

    #[must_use]
    pub fn left(&self) -> &EmojiCodepoint {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &EmojiCodepoint {
        &self.right
    }

    /// Release date segment of the image URL (`YYYYMMDD`).
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Exact orientation match.
    #[must_use]
    pub fn is_pair(&self, left: &EmojiCodepoint, right: &EmojiCodepoint) -> bool {
        &self.left == left && &self.right == right
    }

    #[must_use]
    pub fn involves(&self, code: &EmojiCodepoint) -> bool {
        &self.left == code || &self.right == code
    }

    /// The emoji on the other side of the pair from `code`.
    ///
    /// Self-combinations return `code` itself.
    #[must_use]
    pub fn partner_of(&self, code: &EmojiCodepoint) -> Option<&EmojiCodepoint> {
        if &self.left == code {
            Some(&self.right)
        } else if &self.right == code {
            Some(&self.left)
        } else {
            None
        }
    }
}

// ============================================================================
// Panels
// ============================================================================

/// One of the two selectable emoji lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSide {
    #[default]
    Left,
    Right,
}

impl PanelSide {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            PanelSide::Left => PanelSide::Right,
            PanelSide::Right => PanelSide::Left,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PanelSide::Left => "Left",
            PanelSide::Right => "Right",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            PanelSide::Left => 0,
            PanelSide::Right => 1,
        }
    }
}
