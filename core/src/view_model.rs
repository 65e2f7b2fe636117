//! Panel projections.
//!
//! Pure functions of `(catalog, selection)`. Nothing here is cached: the host
//! calls them again after every selection change.

use std::collections::HashSet;

use kitchen_types::{CombinationRecord, EmojiCodepoint, PanelSide};

use crate::resolver::{self, UrlTemplates};
use crate::{Catalog, Selection};

/// A click the presentation layer may forward for an enabled item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub side: PanelSide,
    pub codepoint: EmojiCodepoint,
}

/// One emoji in a left or right panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub codepoint: EmojiCodepoint,
    pub enabled: bool,
    pub highlighted: bool,
    /// `None` for disabled items.
    pub on_click: Option<Click>,
}

/// Project every supported emoji for one panel, in catalog order.
///
/// - Both selected: only this panel's selected emoji stays enabled.
/// - Left panel otherwise: everything is enabled.
/// - Right panel otherwise: nothing without a left selection, else exactly
///   the emoji that combine with it.
#[must_use]
pub fn project_list(catalog: &Catalog, selection: &Selection, side: PanelSide) -> Vec<ListItem> {
    let selected = selection.selected(side);
    let partners: Option<HashSet<&EmojiCodepoint>> = match (side, selection) {
        (PanelSide::Right, Selection::LeftOnly { left }) => Some(catalog.partners(left)),
        _ => None,
    };

    catalog
        .supported()
        .iter()
        .map(|code| {
            let is_selected = selected == Some(code);
            let enabled = match (selection, side) {
                (Selection::Both { .. }, _) => is_selected,
                (_, PanelSide::Left) => true,
                (_, PanelSide::Right) => partners
                    .as_ref()
                    .is_some_and(|partners| partners.contains(code)),
            };
            ListItem {
                codepoint: code.clone(),
                enabled,
                highlighted: is_selected,
                on_click: enabled.then(|| Click {
                    side,
                    codepoint: code.clone(),
                }),
            }
        })
        .collect()
}

/// A combination ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationView {
    pub record: CombinationRecord,
    pub alt_text: String,
    pub image_url: String,
}

impl CombinationView {
    #[must_use]
    pub fn new(record: &CombinationRecord, urls: &UrlTemplates) -> Self {
        Self {
            record: record.clone(),
            alt_text: resolver::alt_text(record),
            image_url: urls.combo_image_url(record),
        }
    }
}

/// Content of the middle panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiddlePanel {
    /// Nothing selected yet.
    Empty,
    /// Left chosen: every combination anchored on it, in table order.
    Gallery {
        left: EmojiCodepoint,
        combos: Vec<CombinationView>,
    },
    /// Both chosen: the single resolved combination.
    Combination(CombinationView),
}

#[must_use]
pub fn project_middle(catalog: &Catalog, selection: &Selection, urls: &UrlTemplates) -> MiddlePanel {
    match selection {
        Selection::Empty => MiddlePanel::Empty,
        Selection::LeftOnly { left } => MiddlePanel::Gallery {
            left: left.clone(),
            combos: catalog
                .combos_for(left)
                .iter()
                .map(|record| CombinationView::new(record, urls))
                .collect(),
        },
        Selection::Both { combo, .. } => MiddlePanel::Combination(CombinationView::new(combo, urls)),
    }
}
