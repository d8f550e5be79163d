//! Configuration for Folio (`folio.toml`).
//!
//! Every field is optional; a missing file means "all defaults".
//!
//! ```toml
//! [content]
//! base = "content/"                 # directory or http(s) URL prefix
//!
//! [build]
//! output = "dist"
//! title = "Jane Doe"
//! layout = "templates/layout.html"  # optional custom page layout (Tera)
//!
//! [server]
//! port = 8000
//! root = "dist"                     # defaults to [build].output
//! ```
//!
//! # Lookup order
//!
//! 1. `--config <path>` (must exist)
//! 2. `FOLIO_CONFIG` (must exist)
//! 3. `./folio.toml` (optional)
//!
//! Relative paths inside the file are resolved against the working
//! directory. Command-line flags override file values.

pub mod parser;

pub use parser::parse_config;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAME, DEFAULT_CONTENT_BASE, DEFAULT_OUTPUT_DIR,
    DEFAULT_SERVER_PORT, DEFAULT_SITE_TITLE,
};
use crate::content::ContentBase;
use crate::core::FolioError;

/// Top-level `folio.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub content: ContentConfig,
    pub build: BuildConfig,
    pub server: ServerConfig,
}

/// `[content]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Directory or URL prefix the content JSON files live under.
    pub base: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_CONTENT_BASE.to_string(),
        }
    }
}

/// `[build]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub output: PathBuf,
    pub title: String,
    /// Custom Tera page layout; the built-in one is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            title: DEFAULT_SITE_TITLE.to_string(),
            layout: None,
        }
    }
}

/// `[server]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
            root: None,
        }
    }
}

impl SiteConfig {
    /// Load the configuration following the lookup order in the module docs.
    ///
    /// # Errors
    ///
    /// [`FolioError::ConfigNotFound`] when an explicitly named file (flag or
    /// environment) is missing; parse errors otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        match Self::locate(explicit, from_env) {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::ConfigNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        debug!("Loading configuration from {}", path.display());
        let config: Self = parse_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// The file to read, if any. Explicit paths win over the environment,
    /// which wins over `./folio.toml`; only the last is optional.
    fn locate(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
            return Some(path);
        }
        let local = PathBuf::from(CONFIG_FILE_NAME);
        local.exists().then_some(local)
    }

    fn validate(&self) -> Result<(), FolioError> {
        if self.content.base.trim().is_empty() {
            return Err(FolioError::ConfigError {
                message: "[content].base must not be empty".to_string(),
            });
        }
        if self.build.output.as_os_str().is_empty() {
            return Err(FolioError::ConfigError {
                message: "[build].output must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The configured content base.
    pub fn content_base(&self) -> ContentBase {
        ContentBase::parse(&self.content.base)
    }

    /// Directory the development server serves.
    pub fn server_root(&self) -> &Path {
        self.server.root.as_deref().unwrap_or(&self.build.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.content.base, "content/");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server_root(), Path::new("dist"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        std::fs::write(&path, "[build]\ntitle = \"Jane Doe\"\n\n[server]\nport = 9000\n").unwrap();

        let config = SiteConfig::load_from(&path).unwrap();
        assert_eq!(config.build.title, "Jane Doe");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.content.base, "content/");
    }

    #[test]
    fn test_server_root_override() {
        let config: SiteConfig = toml::from_str("[server]\nroot = \"public\"").unwrap();
        assert_eq!(config.server_root(), Path::new("public"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(toml::from_str::<SiteConfig>("[build]\noutptu = \"x\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = SiteConfig::load_from(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FolioError>(),
            Some(FolioError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_empty_base_is_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        std::fs::write(&path, "[content]\nbase = \"\"").unwrap();
        assert!(SiteConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_locate_precedence() {
        let explicit = PathBuf::from("a.toml");
        let env = Some(PathBuf::from("b.toml"));

        assert_eq!(SiteConfig::locate(Some(explicit.as_path()), env.clone()), Some(explicit.clone()));
        assert_eq!(SiteConfig::locate(None, env.clone()), env);
    }

    #[test]
    fn test_content_base_from_url() {
        let config: SiteConfig =
            toml::from_str("[content]\nbase = \"https://example.com/content\"").unwrap();
        assert_eq!(
            config.content_base(),
            ContentBase::Url("https://example.com/content/".to_string())
        );
    }
}
