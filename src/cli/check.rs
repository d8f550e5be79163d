//! `folio check`

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::SiteConfig;
use crate::constants::{
    ALL_RESOURCES, ARTICLES_RESOURCE, EXPERIENCE_RESOURCE, PROFILE_RESOURCE, PROJECTS_RESOURCE,
    WOODWORKING_RESOURCE,
};
use crate::content::{ContentBase, ContentLoader, ContentSource, SiteSource};
use crate::core::FolioError;
use crate::models::{Article, Experience, Profile, Project};

/// Output format for check results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors
    Text,
    /// A single JSON object
    Json,
}

/// Load every content resource and report which are available.
///
/// Exits non-zero when a resource a page depends on is unavailable or
/// malformed. `woodworking.json` is optional.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Content base: directory or http(s) URL prefix
    #[arg(long)]
    content: Option<String>,

    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Status of one resource.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceStatus {
    pub name: String,
    pub location: String,
    pub required: bool,
    pub available: bool,
    /// Entries in a collection, or bio paragraphs for the profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Results of a check, the JSON output shape.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResults {
    pub valid: bool,
    pub base: String,
    pub resources: Vec<ResourceStatus>,
}

impl CheckCommand {
    pub async fn execute(self, site: &SiteConfig) -> Result<()> {
        let base = self
            .content
            .as_deref()
            .map_or_else(|| site.content_base(), ContentBase::parse);
        let loader = ContentLoader::new(SiteSource::from(&base));

        let results = check_resources(&loader, &base).await;
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
            OutputFormat::Text => print_text(&results),
        }

        if results.valid {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Content check failed"))
        }
    }
}

/// Try every known resource through `loader`.
pub async fn check_resources<S: ContentSource>(
    loader: &ContentLoader<S>,
    base: &ContentBase,
) -> CheckResults {
    let mut resources = Vec::with_capacity(ALL_RESOURCES.len());
    for &name in ALL_RESOURCES {
        let required = name != WOODWORKING_RESOURCE;
        let location = loader.source().locate(name);
        let checked = match loader.try_fetch(name).await {
            Ok(value) => item_count(name, &value),
            Err(e) => Err(e),
        };
        let status = match checked {
            Ok(items) => ResourceStatus {
                name: name.to_string(),
                location,
                required,
                available: true,
                items,
                error: None,
            },
            Err(e) => ResourceStatus {
                name: name.to_string(),
                location,
                required,
                available: false,
                items: None,
                error: Some(e.to_string()),
            },
        };
        resources.push(status);
    }

    CheckResults {
        valid: resources.iter().all(|r| r.available || !r.required),
        base: base.to_string(),
        resources,
    }
}

/// Check `value` against the record type the pages read it as, and count
/// its entries (bio paragraphs for the profile). `null` renders as an empty
/// page, so it counts as zero items.
fn item_count(name: &str, value: &Value) -> Result<Option<usize>, FolioError> {
    if value.is_null() && name != WOODWORKING_RESOURCE {
        return Ok(Some(0));
    }
    match name {
        PROFILE_RESOURCE => typed::<Profile>(name, value).map(|p| Some(p.bio.len())),
        ARTICLES_RESOURCE => typed::<Vec<Article>>(name, value).map(|v| Some(v.len())),
        EXPERIENCE_RESOURCE => typed::<Vec<Experience>>(name, value).map(|v| Some(v.len())),
        PROJECTS_RESOURCE => typed::<Vec<Project>>(name, value).map(|v| Some(v.len())),
        _ => Ok(value.as_array().map(Vec::len)),
    }
}

fn typed<T: DeserializeOwned>(name: &str, value: &Value) -> Result<T, FolioError> {
    T::deserialize(value).map_err(|e| FolioError::MalformedContent {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn print_text(results: &CheckResults) {
    println!("Checking content in {}", results.base);
    for resource in &results.resources {
        if resource.available {
            let items = resource
                .items
                .map(|n| format!(" ({n} items)"))
                .unwrap_or_default();
            println!("  {} {}{}", "✓".green(), resource.name, items);
        } else if resource.required {
            println!("  {} {}", "✗".red(), resource.name);
        } else {
            println!("  {} {} (optional)", "⚠".yellow(), resource.name);
        }
        if let Some(error) = &resource.error {
            println!("      {}", error.dimmed());
        }
    }

    if results.valid {
        println!("{} All required content is available", "✓".green().bold());
    } else {
        println!("{} Some required content is unavailable", "✗".red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MemorySource, fixtures};

    fn base() -> ContentBase {
        ContentBase::parse("content/")
    }

    #[tokio::test]
    async fn test_all_present_is_valid() {
        let source = MemorySource::new();
        for (name, body) in fixtures::ALL_FIXTURES {
            source.insert(name, body);
        }
        let loader = ContentLoader::new(source);

        let results = check_resources(&loader, &base()).await;
        assert!(results.valid);
        let items: Vec<_> = results.resources.iter().map(|r| r.items).collect();
        assert_eq!(items, vec![Some(2), Some(2), Some(2), Some(2), None]);
    }

    #[tokio::test]
    async fn test_missing_woodworking_is_still_valid() {
        let source = MemorySource::new();
        for (name, body) in &fixtures::ALL_FIXTURES[..4] {
            source.insert(name, body);
        }
        let results = check_resources(&ContentLoader::new(source), &base()).await;
        assert!(results.valid);
        assert!(!results.resources[4].available);
    }

    #[tokio::test]
    async fn test_malformed_required_resource_is_invalid() {
        let source = MemorySource::new();
        source.insert("profile.json", "{ nope");
        let results = check_resources(&ContentLoader::new(source), &base()).await;

        assert!(!results.valid);
        let profile = &results.resources[0];
        assert!(!profile.available);
        assert!(profile.error.as_deref().unwrap().contains("malformed"));
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_invalid() {
        let source = MemorySource::new();
        for (name, body) in fixtures::ALL_FIXTURES {
            source.insert(name, body);
        }
        source.insert("projects.json", r#"{"title": "not a list"}"#);
        source.insert("articles.json", r#"[{"title": "A"}]"#);

        let results = check_resources(&ContentLoader::new(source), &base()).await;
        assert!(!results.valid);

        let articles = &results.resources[1];
        assert!(!articles.available);
        assert!(articles.items.is_none());
        assert!(articles.error.as_deref().unwrap().contains("malformed"));

        let projects = &results.resources[3];
        assert!(!projects.available);
        assert!(projects.error.as_deref().unwrap().contains("projects.json"));
    }

    #[tokio::test]
    async fn test_null_collection_counts_as_empty() {
        let source = MemorySource::new();
        for (name, body) in fixtures::ALL_FIXTURES {
            source.insert(name, body);
        }
        source.insert("experience.json", "null");

        let results = check_resources(&ContentLoader::new(source), &base()).await;
        assert!(results.valid);
        assert_eq!(results.resources[2].items, Some(0));
    }

    #[test]
    fn test_json_shape() {
        let results = CheckResults {
            valid: false,
            base: "content/".to_string(),
            resources: vec![ResourceStatus {
                name: "articles.json".to_string(),
                location: "content/articles.json".to_string(),
                required: true,
                available: false,
                items: None,
                error: Some("missing".to_string()),
            }],
        };
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["resources"][0]["name"], "articles.json");
        assert!(json["resources"][0].get("items").is_none());
    }
}
