//! Domain logic for the emoji kitchen explorer.
//!
//! Everything here is pure and synchronous:
//!
//! - [`Catalog`]: the supported emoji palette and the combination table, validated once at load
//! - [`resolver`]: order-independent combination lookup and remote image URL construction
//! - [`Selection`]: the left/right selection and its two click transitions
//! - [`view_model`]: per-panel projections recomputed from a [`Selection`]
//!
//! ```text
//! click ─▶ Selection::click_{left,right} ─▶ Selection ─┬▶ project_list(Left)
//!                                                       ├▶ project_list(Right)
//!                                                       └▶ project_middle
//! ```

mod catalog;
pub mod resolver;
mod selection;
mod supported;
pub mod view_model;

pub use catalog::{BUNDLED_CATALOG_JSON, Catalog, CatalogError};
pub use resolver::{DEFAULT_COMBO_BASE, DEFAULT_GLYPH_BASE, UrlTemplates};
pub use selection::{IgnoredClick, Outcome, Selection};
pub use supported::KNOWN_SUPPORTED_EMOJI;
pub use view_model::{Click, CombinationView, ListItem, MiddlePanel, project_list, project_middle};
