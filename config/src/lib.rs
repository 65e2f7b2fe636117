//! Configuration for the emoji kitchen explorer.
//!
//! Read from `~/.emoji-kitchen/config.toml` (or the file named by
//! `EMOJI_KITCHEN_CONFIG`). Every section and field is optional; a missing
//! file means defaults.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//!
//! [catalog]
//! path = "${HOME}/emoji_data.json"
//!
//! [urls]
//! glyph_base = "https://raw.githubusercontent.com/googlefonts/noto-emoji/main/svg"
//! combo_base = "https://www.gstatic.com/android/keyboard/emojikitchen"
//! ```

use serde::Deserialize;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use url::Url;

use kitchen_types::ui::UiOptions;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "EMOJI_KITCHEN_CONFIG";

const APP_DIR: &str = ".emoji-kitchen";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KitchenConfig {
    pub app: Option<AppConfig>,
    pub catalog: Option<CatalogConfig>,
    pub urls: Option<UrlsConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid URL for urls.{field} in {}: {reason}", .path.display())]
    InvalidUrl {
        path: PathBuf,
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::InvalidUrl { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Show codepoints instead of emoji glyphs.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// Replacement for the compiled-in combination table.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// JSON file with the same shape as the bundled table. `${VAR}` is expanded.
    pub path: Option<String>,
}

/// Remote asset hosts.
#[derive(Debug, Default, Deserialize)]
pub struct UrlsConfig {
    pub glyph_base: Option<String>,
    pub combo_base: Option<String>,
}

/// Expand `${VAR}` references; unset variables become empty.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

impl KitchenConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config: Self = match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let Some(urls) = &self.urls else {
            return Ok(());
        };
        for (field, value) in [
            ("glyph_base", urls.glyph_base.as_deref()),
            ("combo_base", urls.combo_base.as_deref()),
        ] {
            if let Some(value) = value
                && let Err(reason) = validate_base_url(value)
            {
                return Err(ConfigError::InvalidUrl {
                    path: path.to_path_buf(),
                    field,
                    reason,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
            })
            .unwrap_or_default()
    }

    /// Catalog override path with `${VAR}` expanded.
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let raw = self.catalog.as_ref()?.path.as_deref()?;
        let expanded = expand_env_vars(raw.trim());
        (!expanded.is_empty()).then(|| PathBuf::from(expanded))
    }

    #[must_use]
    pub fn glyph_base(&self) -> Option<&str> {
        self.urls.as_ref()?.glyph_base.as_deref()
    }

    #[must_use]
    pub fn combo_base(&self) -> Option<&str> {
        self.urls.as_ref()?.combo_base.as_deref()
    }
}

fn validate_base_url(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|err| err.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme `{other}`")),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err("base URL must not carry a query or fragment".to_string());
    }
    Ok(())
}

/// `$EMOJI_KITCHEN_CONFIG`, else `~/.emoji-kitchen/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    app_dir().map(|dir| dir.join("config.toml"))
}

/// `~/.emoji-kitchen`, home of the default config file and the log directory.
#[must_use]
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR))
}
