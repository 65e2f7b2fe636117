//! Left/right selection and its click transitions.
//!
//! The selection is a plain value. Transitions take the current value and
//! return the next one; the host stores it and re-projects the panels.
//!
//! A right selection only exists alongside a left one, and [`Selection::Both`]
//! carries the combination record that justified it, so a both-selected pair
//! without a combination cannot be constructed.

use kitchen_types::{CombinationRecord, EmojiCodepoint, PanelSide};

use crate::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    LeftOnly {
        left: EmojiCodepoint,
    },
    Both {
        left: EmojiCodepoint,
        right: EmojiCodepoint,
        combo: CombinationRecord,
    },
}

/// Why a click left the selection unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredClick {
    /// The emoji is not in the supported palette.
    Unsupported,
    /// Right clicks need a left selection first.
    NoLeftSelection,
    /// The right emoji has no combination with the selected left one.
    NotAPartner,
}

impl IgnoredClick {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            IgnoredClick::Unsupported => "emoji is not in the palette",
            IgnoredClick::NoLeftSelection => "pick a left emoji first",
            IgnoredClick::NotAPartner => "no combination with the left emoji",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Changed(Selection),
    Ignored(IgnoredClick),
}

impl Selection {
    #[must_use]
    pub fn left(&self) -> Option<&EmojiCodepoint> {
        match self {
            Selection::Empty => None,
            Selection::LeftOnly { left } | Selection::Both { left, .. } => Some(left),
        }
    }

    #[must_use]
    pub fn right(&self) -> Option<&EmojiCodepoint> {
        match self {
            Selection::Both { right, .. } => Some(right),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected(&self, side: PanelSide) -> Option<&EmojiCodepoint> {
        match side {
            PanelSide::Left => self.left(),
            PanelSide::Right => self.right(),
        }
    }

    /// The resolved combination, present exactly when both sides are selected.
    #[must_use]
    pub fn combo(&self) -> Option<&CombinationRecord> {
        match self {
            Selection::Both { combo, .. } => Some(combo),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_both(&self) -> bool {
        matches!(self, Selection::Both { .. })
    }

    /// Clicking the selected left emoji clears everything. Clicking another
    /// one selects it; an existing right selection survives only if it still
    /// combines with the new left emoji.
    #[must_use]
    pub fn click_left(&self, catalog: &Catalog, clicked: &EmojiCodepoint) -> Outcome {
        if !catalog.is_supported(clicked) {
            return Outcome::Ignored(IgnoredClick::Unsupported);
        }

        if self.left() == Some(clicked) {
            return Outcome::Changed(Selection::Empty);
        }

        let next = match self.right() {
            Some(right) => match catalog.find_combo(clicked, right) {
                Some(combo) => Selection::Both {
                    left: clicked.clone(),
                    right: right.clone(),
                    combo: combo.clone(),
                },
                None => Selection::LeftOnly {
                    left: clicked.clone(),
                },
            },
            None => Selection::LeftOnly {
                left: clicked.clone(),
            },
        };
        Outcome::Changed(next)
    }

    /// Clicking the selected right emoji clears it; clicking a partner of the
    /// left emoji selects it.
    #[must_use]
    pub fn click_right(&self, catalog: &Catalog, clicked: &EmojiCodepoint) -> Outcome {
        if !catalog.is_supported(clicked) {
            return Outcome::Ignored(IgnoredClick::Unsupported);
        }

        let Some(left) = self.left() else {
            return Outcome::Ignored(IgnoredClick::NoLeftSelection);
        };

        if self.right() == Some(clicked) {
            return Outcome::Changed(Selection::LeftOnly { left: left.clone() });
        }

        match catalog.find_combo(left, clicked) {
            Some(combo) => Outcome::Changed(Selection::Both {
                left: left.clone(),
                right: clicked.clone(),
                combo: combo.clone(),
            }),
            None => Outcome::Ignored(IgnoredClick::NotAPartner),
        }
    }

    /// Apply a click to the panel it came from.
    #[must_use]
    pub fn click(&self, catalog: &Catalog, side: PanelSide, clicked: &EmojiCodepoint) -> Outcome {
        match side {
            PanelSide::Left => self.click_left(catalog, clicked),
            PanelSide::Right => self.click_right(catalog, clicked),
        }
    }
}
