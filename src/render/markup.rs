//! Lightweight markup used in profile text.
//!
//! Two tokens are recognised:
//!
//! - `[text](url)` becomes a hyperlink
//! - `[n]` (digits only) becomes a toggle for reference block `#ref-n`
//!
//! Everything else passes through untouched, HTML included: profile text is
//! owner-authored and trusted, see [`TrustedMarkup`].

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::escape::TrustedMarkup;
use crate::constants::REFERENCE_ID_PREFIX;

/// Links first so that `[1](url)` is a link, not a reference marker.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]+)\]\(([^()\s]+)\)|\[(\d+)\]").expect("token pattern is valid")
});

/// Translate link and reference tokens in `text` into markup.
///
/// # Examples
///
/// ```rust
/// use folio_cli::render::markup::translate_markup;
///
/// let html = translate_markup("See [1] and [more](http://x)");
/// assert_eq!(
///     html.as_str(),
///     "See <a class=\"reference-toggle\" href=\"#ref-1\" data-ref=\"1\">[1]</a> \
///      and <a href=\"http://x\">more</a>"
/// );
/// ```
#[must_use]
pub fn translate_markup(text: &str) -> TrustedMarkup {
    let translated = TOKEN_REGEX.replace_all(text, |caps: &Captures<'_>| {
        if let (Some(label), Some(url)) = (caps.get(1), caps.get(2)) {
            format!("<a href=\"{}\">{}</a>", url.as_str(), label.as_str())
        } else if let Some(number) = caps.get(3) {
            reference_toggle(number.as_str())
        } else {
            caps[0].to_string()
        }
    });
    TrustedMarkup::new(translated.into_owned())
}

/// Reference numbers cited in `text`, in order of appearance.
#[must_use]
pub fn cited_references(text: &str) -> Vec<u32> {
    TOKEN_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(3))
        .filter_map(|number| number.as_str().parse().ok())
        .collect()
}

/// Id of the block that reference `number` reveals.
#[must_use]
pub fn reference_id(number: u32) -> String {
    format!("{REFERENCE_ID_PREFIX}{number}")
}

fn reference_toggle(number: &str) -> String {
    format!(
        "<a class=\"reference-toggle\" href=\"#{REFERENCE_ID_PREFIX}{number}\" data-ref=\"{number}\">[{number}]</a>"
    )
}
