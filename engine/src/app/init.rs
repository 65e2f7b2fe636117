//! Startup: configuration, catalog, and URL templates.

use anyhow::Context;

use kitchen_config::KitchenConfig;
use kitchen_core::{Catalog, DEFAULT_COMBO_BASE, DEFAULT_GLYPH_BASE, UrlTemplates};
use kitchen_types::ui::StatusMessage;

use super::App;

impl App {
    /// Build the app from the user's config file.
    ///
    /// A broken config is reported in the status line and replaced by
    /// defaults. A broken catalog is fatal.
    pub fn new() -> anyhow::Result<Self> {
        let (config, config_error) = match KitchenConfig::load() {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(err) => {
                tracing::warn!(error = %err, "Using default configuration");
                (KitchenConfig::default(), Some(err))
            }
        };

        let mut app = Self::from_config(&config)?;
        if let Some(err) = config_error {
            app.set_status(StatusMessage::error(format!(
                "Config ignored ({}): {err}",
                err.path().display()
            )));
        }
        Ok(app)
    }

    pub fn from_config(config: &KitchenConfig) -> anyhow::Result<Self> {
        let catalog = match config.catalog_path() {
            Some(path) => Catalog::load_file(&path)
                .with_context(|| format!("loading catalog override {}", path.display()))?,
            None => Catalog::bundled().context("loading bundled catalog")?,
        };

        let urls = UrlTemplates::new(
            config.glyph_base().unwrap_or(DEFAULT_GLYPH_BASE),
            config.combo_base().unwrap_or(DEFAULT_COMBO_BASE),
        );

        Ok(Self::with_catalog(catalog, urls, config.ui_options()))
    }
}
