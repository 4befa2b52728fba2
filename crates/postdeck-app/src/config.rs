//! Settings parser for .postdeck/config.toml
//!
//! Settings come from three layers, strongest last: built-in defaults, the
//! project-local `.postdeck/config.toml`, and the `POSTDECK_API_URL`
//! environment variable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use postdeck_core::prelude::*;

use crate::collection::DEFAULT_PAGE_SIZE;

const CONFIG_FILENAME: &str = "config.toml";
const POSTDECK_DIR: &str = ".postdeck";

/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "POSTDECK_API_URL";

/// Default API base URL, matching the original client's fallback
pub const DEFAULT_BASE_URL: &str = "http://localhost:8085";

/// All user-configurable settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the blog REST API
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Posts per page in the collection view
    pub page_size: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Settings {
    /// Load settings for a project directory
    ///
    /// A missing config file yields the defaults. The `POSTDECK_API_URL`
    /// environment variable, when set and non-empty, overrides the file.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigInvalid`] if the file exists but is not valid TOML,
    ///   or if a value fails validation (zero page size, empty base URL).
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(POSTDECK_DIR).join(CONFIG_FILENAME);

        let mut settings = if path.exists() {
            debug!("loading settings from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)
                .map_err(|e| Error::config_invalid(format!("{}: {e}", path.display())))?
        } else {
            Settings::default()
        };

        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.is_empty() {
                settings.api.base_url = url;
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(Error::config_invalid("api.base_url must not be empty"));
        }
        if self.display.page_size == 0 {
            return Err(Error::config_invalid("display.page_size must be at least 1"));
        }
        Ok(())
    }
}
