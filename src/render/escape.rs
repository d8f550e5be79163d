//! Attribute escaping and the trusted-markup boundary.
//!
//! Content-derived text is escaped before it reaches a page, by Tera's
//! autoescaping in the fragment templates. The one
//! exception is profile text (bio paragraphs and reference descriptions),
//! which the site owner writes as markup on purpose. That exception is kept
//! visible in the types: only a [`TrustedMarkup`] value may be emitted
//! unescaped, and the only way to get one from content is the markup
//! translator.

use serde::Serialize;
use std::fmt;

/// Escape a value for a double-quoted attribute.
///
/// Only `&`, `<`, `>` and `"` are replaced so URLs stay readable in the
/// generated markup.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup that is emitted without escaping.
///
/// Serialises as a plain string so templates can print it with `| safe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    /// Mark owner-authored markup as trusted.
    ///
    /// Callers are responsible for the provenance of `markup`; content
    /// should go through [`translate_markup`](super::markup::translate_markup).
    pub(crate) fn new(markup: String) -> Self {
        Self(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TrustedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
