//! Application state.
//!
//! `App` owns the only mutable selection in the program. Every input path
//! (keyboard activation, mouse click, clear) ends in [`App::click`], which
//! consults the current projection first: a click on an item with no click
//! target is dropped before it reaches the state machine.

mod init;
mod navigation;

pub use navigation::CursorMove;

use std::fmt;

use kitchen_core::resolver::alt_text;
use kitchen_core::{
    Catalog, IgnoredClick, ListItem, MiddlePanel, Outcome, Selection, UrlTemplates, project_list,
    project_middle,
};
use kitchen_types::ui::{GridGeometry, StatusMessage, UiOptions, ViewState};
use kitchen_types::{EmojiCodepoint, PanelSide};

#[derive(Debug)]
pub struct App {
    catalog: Catalog,
    urls: UrlTemplates,
    selection: Selection,
    view: ViewState,
    pending_copy: Option<String>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn with_catalog(catalog: Catalog, urls: UrlTemplates, ui_options: UiOptions) -> Self {
        Self {
            catalog,
            urls,
            selection: Selection::Empty,
            view: ViewState::new(ui_options),
            pending_copy: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn urls(&self) -> &UrlTemplates {
        &self.urls
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn focus(&self) -> PanelSide {
        self.view.focus
    }

    #[must_use]
    pub fn cursor(&self, side: PanelSide) -> usize {
        self.view.cursor(side)
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.view.status.as_ref()
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.view.status = Some(status);
    }

    // ------------------------------------------------------------------
    // Projections
    // ------------------------------------------------------------------

    #[must_use]
    pub fn panel(&self, side: PanelSide) -> Vec<ListItem> {
        project_list(&self.catalog, &self.selection, side)
    }

    #[must_use]
    pub fn middle_panel(&self) -> MiddlePanel {
        project_middle(&self.catalog, &self.selection, &self.urls)
    }

    // ------------------------------------------------------------------
    // Clicks
    // ------------------------------------------------------------------

    /// Click an emoji in a panel. Returns whether the selection changed.
    pub fn click(&mut self, side: PanelSide, code: &EmojiCodepoint) -> bool {
        let clickable = self
            .panel(side)
            .into_iter()
            .find(|item| &item.codepoint == code)
            .and_then(|item| item.on_click)
            .is_some();
        if !clickable {
            tracing::debug!(side = side.label(), code = %code, "Ignoring click on disabled item");
            self.set_status(StatusMessage::info(self.disabled_reason(side)));
            return false;
        }

        match self.selection.click(&self.catalog, side, code) {
            Outcome::Changed(next) => {
                self.apply_selection(next);
                true
            }
            Outcome::Ignored(reason) => {
                tracing::debug!(side = side.label(), code = %code, ?reason, "Click ignored");
                self.set_status(StatusMessage::info(reason.describe()));
                false
            }
        }
    }

    pub fn click_left(&mut self, code: &EmojiCodepoint) -> bool {
        self.click(PanelSide::Left, code)
    }

    pub fn click_right(&mut self, code: &EmojiCodepoint) -> bool {
        self.click(PanelSide::Right, code)
    }

    /// Click the item under the cursor in the focused panel.
    pub fn activate(&mut self) -> bool {
        let side = self.view.focus;
        let Some(code) = self.catalog.supported().get(self.cursor(side)).cloned() else {
            return false;
        };
        self.click(side, &code)
    }

    fn disabled_reason(&self, side: PanelSide) -> &'static str {
        match (&self.selection, side) {
            (Selection::Both { .. }, _) => "Deselect the current pair to pick another emoji",
            (Selection::Empty, PanelSide::Right) => IgnoredClick::NoLeftSelection.describe(),
            _ => IgnoredClick::NotAPartner.describe(),
        }
    }

    /// Resolve a mouse click against the last drawn grids.
    pub fn click_at(&mut self, column: u16, row: u16) -> bool {
        for side in [PanelSide::Left, PanelSide::Right] {
            let Some(grid) = self.view.grid(side) else {
                continue;
            };
            if let Some(index) = grid.index_at(column, row) {
                self.set_focus(side);
                self.view.cursors[side.index()] = index;
                return self.activate();
            }
        }
        false
    }

    /// Drop the whole selection, the same as clicking the selected left emoji.
    pub fn clear_selection(&mut self) -> bool {
        match self.selection.left().cloned() {
            Some(left) => self.click_left(&left),
            None => false,
        }
    }

    fn apply_selection(&mut self, next: Selection) {
        let previous = std::mem::replace(&mut self.selection, next);
        tracing::debug!(
            from_left = ?previous.left().map(EmojiCodepoint::as_str),
            from_right = ?previous.right().map(EmojiCodepoint::as_str),
            to_left = ?self.selection.left().map(EmojiCodepoint::as_str),
            to_right = ?self.selection.right().map(EmojiCodepoint::as_str),
            "Selection changed"
        );

        match &self.selection {
            Selection::Empty => {
                self.set_focus(PanelSide::Left);
                self.view.status = None;
            }
            Selection::LeftOnly { left } => {
                let count = self.catalog.partners(left).len();
                let message = format!("{left}: {count} combination partner(s)");
                let left_changed = previous.left() != Some(left);
                self.set_status(StatusMessage::info(message));
                // Deselecting the right emoji leaves the cursor on it.
                if left_changed {
                    self.set_focus(PanelSide::Right);
                    self.jump_to_first_enabled(PanelSide::Right);
                }
            }
            Selection::Both { combo, .. } => {
                let url = self.urls.combo_image_url(combo);
                let message = format!("{} (released {})", alt_text(combo), combo.date());
                tracing::info!(url = %url, "Combination selected");
                self.set_status(StatusMessage::info(message));
            }
        }
    }

    // ------------------------------------------------------------------
    // Layout feedback and side requests
    // ------------------------------------------------------------------

    /// Record where the renderer placed a panel's grid.
    pub fn set_grid_geometry(&mut self, side: PanelSide, geometry: GridGeometry) {
        self.view.grids[side.index()] = Some(geometry);
    }

    /// Queue a clipboard copy: the shown combination, else the glyph under the cursor.
    pub fn request_copy(&mut self) {
        let url = match self.selection.combo() {
            Some(combo) => self.urls.combo_image_url(combo),
            None => {
                let side = self.view.focus;
                match self.catalog.supported().get(self.cursor(side)) {
                    Some(code) => self.urls.glyph_image_url(code),
                    None => return,
                }
            }
        };
        self.pending_copy = Some(url);
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }

    /// Report what happened to a copy taken with [`App::take_copy_request`].
    pub fn finish_copy<E: fmt::Display>(&mut self, url: &str, result: Result<(), E>) {
        match result {
            Ok(()) => self.set_status(StatusMessage::info(format!("Copied {url}"))),
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard copy failed");
                self.set_status(StatusMessage::error(format!("Copy failed: {err}")));
            }
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
