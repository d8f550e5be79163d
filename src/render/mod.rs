//! Page renderers.
//!
//! Every renderer follows the same four-phase contract against its own
//! mount point and resource:
//!
//! 1. Resolve the mount; if it is absent, log and stop.
//! 2. Show the loading placeholder.
//! 3. Ask the [`ContentLoader`] for the resource; `None` or an empty
//!    collection shows the empty-state placeholder.
//! 4. Clear the mount and append one fragment per item, in the order received.
//!
//! Any failure in phases 3-4 (wrong document shape, a record missing a field,
//! a template failure) replaces the mount content with the error placeholder.
//! Renderers never return errors; they report a [`RenderOutcome`].
//!
//! The articles, experience and projects pages implement [`Section`] and share
//! [`Renderer::render_section`]. The home page has its own driver in
//! [`home`] because it also rewrites social links and keeps the social icon
//! block inside its mount.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_cli::content::{ContentLoader, FileSource};
//! use folio_cli::dom::{Element, Page};
//! use folio_cli::render::{FragmentTemplates, Renderer, RenderOutcome};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let loader = ContentLoader::new(FileSource::new("content/"));
//! let templates = FragmentTemplates::new()?;
//! let renderer = Renderer::new(&loader, &templates);
//!
//! let mut page = Page::new().with_element(Element::new("div").with_id("articlesGrid"));
//! if let RenderOutcome::Rendered(count) = renderer.render_articles(&mut page).await {
//!     println!("rendered {count} articles");
//! }
//! # Ok(())
//! # }
//! ```

pub mod articles;
pub mod escape;
pub mod experience;
pub mod home;
pub mod markup;
pub mod projects;
pub mod references;
pub mod templates;

pub use articles::ArticlesSection;
pub use experience::ExperienceSection;
pub use projects::ProjectsSection;
pub use references::ReferencePanel;
pub use templates::FragmentTemplates;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::content::{ContentLoader, ContentSource};
use crate::core::FolioError;
use crate::dom::{Document, Element, Mount, Selector};

/// How a renderer run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "items")]
pub enum RenderOutcome {
    /// The mount point was not in the document; nothing changed.
    MissingMount,
    /// The resource was unavailable or empty; the empty-state message is shown.
    Empty,
    /// This many fragments were appended.
    Rendered(usize),
    /// Rendering failed; the error message is shown.
    Failed,
}

/// A collection page: one resource, one mount, one fragment per item.
pub trait Section {
    /// Record type of one collection item.
    type Item: DeserializeOwned;

    /// Resource name, e.g. `articles.json`.
    fn resource(&self) -> &'static str;

    /// Where the fragments go.
    fn mount(&self) -> Selector;

    /// Plural noun used in placeholder messages ("articles").
    fn noun(&self) -> &'static str;

    /// Build the fragment for one item.
    fn fragment(
        &mut self,
        templates: &FragmentTemplates,
        item: &Self::Item,
    ) -> Result<Element, FolioError>;
}

/// Runs renderers against documents, sharing one loader and one set of
/// fragment templates.
#[derive(Debug)]
pub struct Renderer<'a, S> {
    loader: &'a ContentLoader<S>,
    templates: &'a FragmentTemplates,
}

impl<'a, S: ContentSource> Renderer<'a, S> {
    pub fn new(loader: &'a ContentLoader<S>, templates: &'a FragmentTemplates) -> Self {
        Self {
            loader,
            templates,
        }
    }

    pub fn loader(&self) -> &'a ContentLoader<S> {
        self.loader
    }

    /// Render the articles grid (`#articlesGrid`).
    pub async fn render_articles<D: Document>(&self, doc: &mut D) -> RenderOutcome {
        self.render_section(&mut ArticlesSection, doc).await
    }

    /// Render the experience timeline (`.experience-timeline`).
    pub async fn render_experience<D: Document>(&self, doc: &mut D) -> RenderOutcome {
        self.render_section(&mut ExperienceSection, doc).await
    }

    /// Render the projects grid (`.projects-grid`) with randomly coloured
    /// skill tags.
    pub async fn render_projects<D: Document>(&self, doc: &mut D) -> RenderOutcome {
        self.render_section(&mut ProjectsSection::from_entropy(), doc).await
    }

    /// Drive `section` through the four-phase contract against `doc`.
    pub async fn render_section<T, D>(&self, section: &mut T, doc: &mut D) -> RenderOutcome
    where
        T: Section,
        D: Document,
    {
        let selector = section.mount();
        let noun = section.noun();

        let Some(mount) = doc.query(&selector) else {
            warn!("{} mount '{}' not found, skipping", noun, selector);
            return RenderOutcome::MissingMount;
        };

        mount.set_content(&loading_placeholder(noun));

        let Some(document) = self.loader.fetch(section.resource()).await else {
            mount.set_content(&empty_placeholder(noun));
            return RenderOutcome::Empty;
        };

        match build_fragments(section, self.templates, &document) {
            Ok(fragments) if fragments.is_empty() => {
                mount.set_content(&empty_placeholder(noun));
                RenderOutcome::Empty
            }
            Ok(fragments) => {
                let count = fragments.len();
                mount.set_content("");
                for fragment in fragments {
                    mount.append_child(fragment);
                }
                debug!("Rendered {} {}", count, noun);
                RenderOutcome::Rendered(count)
            }
            Err(e) => {
                error!("Error rendering {}: {}", noun, e);
                mount.set_content(&error_placeholder(noun));
                RenderOutcome::Failed
            }
        }
    }
}

/// Map a collection document to fragments. `null` counts as an empty
/// collection; any other non-array document is malformed.
fn build_fragments<T: Section>(
    section: &mut T,
    templates: &FragmentTemplates,
    document: &Value,
) -> Result<Vec<Element>, FolioError> {
    let items = match document {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(FolioError::MalformedContent {
                name: section.resource().to_string(),
                reason: format!("expected a list, found {}", json_kind(other)),
            });
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let item = T::Item::deserialize(raw).map_err(|e| FolioError::MalformedContent {
                name: section.resource().to_string(),
                reason: format!("item {index}: {e}"),
            })?;
            section.fragment(templates, &item)
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn loading_placeholder(noun: &str) -> String {
    format!("<div style=\"text-align: center; padding: 2rem;\">Loading {noun}...</div>")
}

pub(crate) fn empty_placeholder(noun: &str) -> String {
    format!("<div style=\"text-align: center; padding: 2rem;\">No {noun} found.</div>")
}

pub(crate) fn error_placeholder(noun: &str) -> String {
    format!(
        "<div style=\"text-align: center; padding: 2rem; color: var(--error);\">Error loading {noun}. Please try again.</div>"
    )
}
