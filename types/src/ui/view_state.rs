//! View state for rendering.
//!
//! This struct groups all state related to rendering and UI display,
//! separating it from the selection the core operates on.

use crate::PanelSide;

use super::GridGeometry;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Show codepoints instead of emoji glyphs.
    pub ascii_only: bool,
    pub high_contrast: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Keyboard focus, cursors, and last-frame layout.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub focus: PanelSide,
    /// Cursor index per panel, indexed by [`PanelSide::index`].
    pub cursors: [usize; 2],
    /// Grid layout per panel from the last draw.
    pub grids: [Option<GridGeometry>; 2],
    pub status: Option<StatusMessage>,
    pub ui_options: UiOptions,
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn cursor(&self, side: PanelSide) -> usize {
        self.cursors[side.index()]
    }

    #[must_use]
    pub fn grid(&self, side: PanelSide) -> Option<GridGeometry> {
        self.grids[side.index()]
    }
}
