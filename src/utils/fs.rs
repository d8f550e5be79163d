//! File system helpers for writing the built site.
//!
//! Pages are written atomically so a server reading the output directory
//! during a rebuild sees either the old page or the new one, never half of
//! each.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ensures a directory exists, creating it and all parent directories if
/// necessary.
///
/// # Errors
///
/// Fails if the path exists but is not a directory, or creation fails.
///
/// # Examples
///
/// ```rust,no_run
/// use folio_cli::utils::fs::ensure_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// ensure_dir(Path::new("dist/content"))?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_context(|| {
            format!(
                "Failed to create directory: {}\n\nCheck directory permissions and path validity",
                path.display()
            )
        })?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Safely writes a string to a file using [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file.
///
/// The content goes to a sibling `.tmp` file which is synced and then
/// renamed over `path`. Parent directories are created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&temp_path).with_context(|| {
            format!(
                "Failed to create temp file: {}\n\nCheck file permissions and that directory exists",
                temp_path.display()
            )
        })?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

/// Copies `src` to `dst` atomically, creating `dst`'s parent directories.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let content =
        fs::read(src).with_context(|| format!("Failed to read file: {}", src.display()))?;
    atomic_write(dst, &content)
}
