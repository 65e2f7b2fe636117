//! Combination lookup and remote image URLs.
//!
//! # Lookup contract
//!
//! [`find_combo`] is order-independent with respect to how a pair was stored:
//! it only ever scans the entry anchored on `left`, first for `(left, right)`
//! and then for `(right, left)`. The other emoji's entry is never consulted.

use kitchen_types::{CombinationRecord, EmojiCodepoint};

use crate::Catalog;

pub const DEFAULT_GLYPH_BASE: &str =
    "https://raw.githubusercontent.com/googlefonts/noto-emoji/main/svg";
pub const DEFAULT_COMBO_BASE: &str = "https://www.gstatic.com/android/keyboard/emojikitchen";

/// Find the stored record for a pair, in either orientation.
///
/// Returns the first match in list order, preferring the exact orientation.
#[must_use]
pub fn find_combo<'a>(
    catalog: &'a Catalog,
    left: &EmojiCodepoint,
    right: &EmojiCodepoint,
) -> Option<&'a CombinationRecord> {
    let records = catalog.combos_for(left);
    records
        .iter()
        .find(|record| record.is_pair(left, right))
        .or_else(|| records.iter().find(|record| record.is_pair(right, left)))
}

/// Label used for a combination image: `{left}_{right}`.
#[must_use]
pub fn alt_text(record: &CombinationRecord) -> String {
    format!("{}_{}", record.left(), record.right())
}

/// Path segment for a codepoint in combination URLs.
///
/// Every hyphen-delimited part is lowercased and prefixed with `u`:
/// `2764-fe0f` becomes `u2764-ufe0f`.
#[must_use]
pub fn url_segment(code: &EmojiCodepoint) -> String {
    code.segments()
        .map(|part| format!("u{}", part.to_lowercase()))
        .collect::<Vec<_>>()
        .join("-")
}

/// Base URLs for the two remote asset hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplates {
    glyph_base: String,
    combo_base: String,
}

impl Default for UrlTemplates {
    fn default() -> Self {
        Self::new(DEFAULT_GLYPH_BASE, DEFAULT_COMBO_BASE)
    }
}

impl UrlTemplates {
    #[must_use]
    pub fn new(glyph_base: impl AsRef<str>, combo_base: impl AsRef<str>) -> Self {
        Self {
            glyph_base: glyph_base.as_ref().trim_end_matches('/').to_string(),
            combo_base: combo_base.as_ref().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn glyph_base(&self) -> &str {
        &self.glyph_base
    }

    #[must_use]
    pub fn combo_base(&self) -> &str {
        &self.combo_base
    }

    /// SVG for a single emoji. Only the first segment is used, so variation
    /// selectors never reach the file name.
    #[must_use]
    pub fn glyph_image_url(&self, code: &EmojiCodepoint) -> String {
        format!("{}/emoji_u{}.svg", self.glyph_base, code.first_segment())
    }

    /// PNG for a combination: `{base}/{date}/{left}/{left}_{right}.png`.
    #[must_use]
    pub fn combo_image_url(&self, record: &CombinationRecord) -> String {
        let left = url_segment(record.left());
        let right = url_segment(record.right());
        format!(
            "{}/{}/{left}/{left}_{right}.png",
            self.combo_base,
            record.date()
        )
    }
}
