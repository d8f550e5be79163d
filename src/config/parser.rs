//! TOML parsing with file context.

use anyhow::{Context, Result};
use std::path::Path;

/// Read `path` and deserialize it as TOML.
///
/// Errors carry the file path; the underlying [`toml::de::Error`] stays in
/// the chain so user-facing reporting can recognise it.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
