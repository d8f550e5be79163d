//! Static site builder.
//!
//! A build is one "page session": every page shell is rendered against a
//! single [`ContentLoader`], so each content resource is fetched at most
//! once. The four renderers run concurrently on the current task with
//! `futures::join!`; each owns its page, and they share only the loader.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_cli::content::{ContentLoader, FileSource};
//! use folio_cli::site::{Layout, SiteBuilder};
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let loader = ContentLoader::new(FileSource::new("content/"));
//! let builder = SiteBuilder::new(&loader, Layout::builtin()?, "Jane Doe")?;
//! let report = builder.build(Path::new("dist"), Some(Path::new("content/"))).await?;
//! println!("{} pages written", report.pages.len());
//! # Ok(())
//! # }
//! ```

pub mod layout;
pub mod pages;

pub use layout::Layout;
pub use pages::PageKind;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::ALL_RESOURCES;
use crate::content::{ContentLoader, ContentSource};
use crate::core::FolioError;
use crate::dom::Page;
use crate::render::escape::TrustedMarkup;
use crate::render::{FragmentTemplates, RenderOutcome, Renderer};
use crate::utils::fs::{copy_file, ensure_dir, safe_write};

/// Directory under the output root that receives the content JSON files.
pub const CONTENT_OUTPUT_DIR: &str = "content";

/// A page after its renderer has run.
#[derive(Debug)]
pub struct RenderedPage {
    pub kind: PageKind,
    pub page: Page,
    pub outcome: RenderOutcome,
}

/// What one page of a build produced.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub page: PageKind,
    pub path: PathBuf,
    pub outcome: RenderOutcome,
}

/// Summary of a finished build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub pages: Vec<PageReport>,
    /// Content files copied next to the pages.
    pub content_files: Vec<String>,
    pub cache_hits: usize,
    pub cache_misses: usize,
}

impl BuildReport {
    /// Pages whose renderer failed or found no mount.
    pub fn problems(&self) -> impl Iterator<Item = &PageReport> {
        self.pages.iter().filter(|p| {
            matches!(p.outcome, RenderOutcome::Failed | RenderOutcome::MissingMount)
        })
    }
}

/// Renders the page shells and writes the site.
#[derive(Debug)]
pub struct SiteBuilder<'a, S> {
    loader: &'a ContentLoader<S>,
    templates: FragmentTemplates,
    layout: Layout,
    title: String,
}

impl<'a, S: ContentSource> SiteBuilder<'a, S> {
    pub fn new(
        loader: &'a ContentLoader<S>,
        layout: Layout,
        title: impl Into<String>,
    ) -> Result<Self, FolioError> {
        Ok(Self {
            loader,
            templates: FragmentTemplates::new()?,
            layout,
            title: title.into(),
        })
    }

    /// Run every renderer against a fresh shell of its page.
    pub async fn render_pages(&self) -> Vec<RenderedPage> {
        let renderer = Renderer::new(self.loader, &self.templates);

        let mut home = PageKind::Home.shell();
        let mut articles = PageKind::Articles.shell();
        let mut experience = PageKind::Experience.shell();
        let mut projects = PageKind::Projects.shell();

        let (home_outcome, articles_outcome, experience_outcome, projects_outcome) = futures::join!(
            renderer.render_home(&mut home),
            renderer.render_articles(&mut articles),
            renderer.render_experience(&mut experience),
            renderer.render_projects(&mut projects),
        );

        vec![
            RenderedPage {
                kind: PageKind::Home,
                page: home,
                outcome: home_outcome,
            },
            RenderedPage {
                kind: PageKind::Articles,
                page: articles,
                outcome: articles_outcome,
            },
            RenderedPage {
                kind: PageKind::Experience,
                page: experience,
                outcome: experience_outcome,
            },
            RenderedPage {
                kind: PageKind::Projects,
                page: projects,
                outcome: projects_outcome,
            },
        ]
    }

    /// Wrap a rendered page in the layout.
    pub fn page_html(&self, rendered: &RenderedPage) -> Result<String, FolioError> {
        let body = TrustedMarkup::new(rendered.page.body_html());
        self.layout.render(&self.title, rendered.kind, &body)
    }

    /// Render every page into `output`. When `content_dir` is given, the
    /// known content files found there are copied to `output/content/` so the
    /// built site can be served on its own.
    pub async fn build(&self, output: &Path, content_dir: Option<&Path>) -> Result<BuildReport> {
        ensure_dir(output)?;

        let mut pages = Vec::with_capacity(PageKind::ALL.len());
        for rendered in self.render_pages().await {
            let path = output.join(rendered.kind.file_name());
            let html = self.page_html(&rendered)?;
            safe_write(&path, &html)
                .with_context(|| format!("Failed to write page {}", path.display()))?;
            debug!("Wrote {} ({:?})", path.display(), rendered.outcome);
            pages.push(PageReport {
                page: rendered.kind,
                path,
                outcome: rendered.outcome,
            });
        }

        let content_files = match content_dir {
            Some(dir) => copy_content(dir, &output.join(CONTENT_OUTPUT_DIR))?,
            None => Vec::new(),
        };

        let (cache_hits, cache_misses) = self.loader.stats();
        info!("Built {} pages into {}", pages.len(), output.display());

        Ok(BuildReport {
            pages,
            content_files,
            cache_hits,
            cache_misses,
        })
    }
}

fn copy_content(from: &Path, to: &Path) -> Result<Vec<String>> {
    let mut copied = Vec::new();
    for name in ALL_RESOURCES {
        let src = from.join(name);
        if !src.is_file() {
            debug!("Skipping missing content file {}", src.display());
            continue;
        }
        copy_file(&src, &to.join(name))?;
        copied.push((*name).to_string());
    }
    Ok(copied)
}
