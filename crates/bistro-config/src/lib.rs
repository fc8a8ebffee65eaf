//! # bistro-config
//!
//! Layered configuration loading for the Bistro content tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BISTRO_*` prefix, `__` as separator)
//! 2. Project-level `.bistro/config.toml`
//! 3. User-level `~/.config/bistro/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `BISTRO_CMS__URL` -> `cms.url`, `BISTRO_SITE__OUTPUT` -> `site.output`.
//!
//! # Usage
//!
//! ```no_run
//! use bistro_config::BistroConfig;
//!
//! let config = BistroConfig::load_with_dotenv().expect("config");
//! if config.cms.is_configured() {
//!     println!("CMS at {}", config.cms.base_url());
//! }
//! ```

mod cms;
mod error;
mod site;

pub use cms::CmsConfig;
pub use error::ConfigError;
pub use site::{OutputMode, SiteConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "BISTRO_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BistroConfig {
    #[serde(default)]
    pub cms: CmsConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

impl BistroConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading the nearest `.env` file.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".bistro/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cms.validate()
    }

    /// Copy safe for printing: the API token is masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.cms.has_token() {
            config.cms.api_token = "********".to_string();
        }
        config
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bistro").join("config.toml"))
    }

    /// Walk up from `CARGO_MANIFEST_DIR` (or use the current dir) looking
    /// for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = BistroConfig::default();
        assert!(!config.cms.is_configured());
        assert_eq!(config.site.output, OutputMode::Static);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = BistroConfig::from_figment(&BistroConfig::figment()).expect("defaults");
            assert!(!config.cms.is_configured());
            assert_eq!(config.cms.page_size, 25);
            Ok(())
        });
    }

    #[test]
    fn redacted_masks_token_only_when_set() {
        let mut config = BistroConfig::default();
        assert_eq!(config.redacted().cms.api_token, "");

        config.cms.api_token = "secret-token".into();
        let redacted = config.redacted();
        assert_eq!(redacted.cms.api_token, "********");
        assert_eq!(config.cms.api_token, "secret-token");
    }
}
