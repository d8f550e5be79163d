//! Request path validation for the development server.
//!
//! URL paths are mapped onto the served root without ever leaving it: any
//! `..` component rejects the request outright instead of being normalised
//! away.

use anyhow::{Result, anyhow};
use std::path::{Component, Path, PathBuf};

/// Validates that a path doesn't contain parent directory references.
///
/// # Errors
///
/// Returns an error if the path contains `..`.
pub fn validate_no_traversal(path: &Path) -> Result<()> {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(anyhow!(
            "Path contains parent directory reference (..): {}",
            path.display()
        ));
    }
    Ok(())
}

/// Map a URL path (`/articles.html`, `/content/profile.json`) onto `root`.
///
/// The query string and fragment are ignored and `%XX` escapes are decoded.
/// Empty segments and `.` are dropped.
///
/// # Errors
///
/// Returns an error for traversal attempts, backslashes, NUL bytes and
/// invalid percent-encoding.
pub fn resolve_request_path(root: &Path, url_path: &str) -> Result<PathBuf> {
    let path = url_path.split(['?', '#']).next().unwrap_or_default();
    let decoded = percent_decode(path)?;

    if decoded.contains('\\') || decoded.contains('\0') {
        return Err(anyhow!("Invalid characters in request path: {url_path}"));
    }

    let relative = Path::new(decoded.trim_start_matches('/'));
    validate_no_traversal(relative)?;

    let mut resolved = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return Err(anyhow!("Invalid request path: {url_path}")),
        }
    }
    Ok(resolved)
}

fn percent_decode(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| anyhow!("Invalid percent-encoding in request path: {input}"))?;
            out.push(hex);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| anyhow!("Request path is not valid UTF-8: {input}"))
}
