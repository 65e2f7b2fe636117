//! Core engine for the emoji kitchen explorer.
//!
//! This crate contains the [`App`] state without TUI dependencies:
//!
//! - **Selection**: the single [`Selection`] value, advanced only through clicks
//! - **Navigation**: per-panel keyboard cursors and focus
//! - **Hit-testing**: mouse clicks resolved against the grid layout the renderer recorded
//! - **Side requests**: clipboard copies and quit, taken by the TUI layer
//!
//! The TUI layer (`kitchen_tui`) reads projections from `App` and forwards input
//! back to it. No rendering logic lives in this crate.

mod app;

pub use app::{App, CursorMove};

pub use kitchen_config::{KitchenConfig, app_dir};
pub use kitchen_core::{
    Catalog, CatalogError, Click, CombinationView, IgnoredClick, ListItem, MiddlePanel, Outcome,
    Selection, UrlTemplates,
};
pub use kitchen_types::ui::{GridGeometry, StatusKind, StatusMessage, UiOptions, ViewState};
pub use kitchen_types::{CombinationRecord, EmojiCodepoint, PanelSide};
