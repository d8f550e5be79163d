//! Content records deserialized from the site's JSON documents.
//!
//! These are plain snapshots: Folio never constructs, mutates or writes them
//! back. Each one is fetched once per resource name and reused for the
//! lifetime of the [`ContentLoader`](crate::content::ContentLoader) that
//! loaded it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The owner's profile shown on the home page (`profile.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Bio paragraphs in display order.
    ///
    /// Paragraphs are trusted markup and may contain `[text](url)` links and
    /// `[n]` reference markers.
    #[serde(default)]
    pub bio: Vec<String>,

    /// Numbered references cited by the bio.
    #[serde(default)]
    pub references: Vec<Reference>,

    /// Platform name → URL or contact string (`email`, `github`, ...).
    ///
    /// `null` entries are dropped and numbers or booleans are kept as text,
    /// so a phone number stored as a JSON number still becomes a link.
    #[serde(default, deserialize_with = "deserialize_social")]
    pub social: BTreeMap<String, String>,
}

/// A numbered reference cited from the bio with `[n]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub number: u32,
    /// Trusted markup, translated like the bio.
    pub description: String,
}

/// One entry of `articles.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub date: String,
    pub excerpt: String,
}

/// One entry of `experience.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    pub description: String,
}

/// One entry of `projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub url: String,
    pub description: String,
    /// Skill tags in display order.
    pub skills: Vec<String>,
}

/// Keep scalar social values as strings; skip `null`, lists and objects.
fn deserialize_social<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(platform, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            Some((platform, text))
        })
        .collect())
}

impl Profile {
    /// Reference numbers in document order.
    #[must_use]
    pub fn reference_numbers(&self) -> Vec<u32> {
        self.references.iter().map(|r| r.number).collect()
    }
}
