//! `folio build`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::content::{ContentBase, ContentLoader, SiteSource};
use crate::render::RenderOutcome;
use crate::site::{BuildReport, Layout, SiteBuilder};

/// Render every page into the output directory.
///
/// Pages whose content is missing are still written, showing their
/// empty-state message. When the content base is a local directory its JSON
/// files are copied to `<output>/content/`.
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Content base: directory or http(s) URL prefix
    #[arg(long)]
    content: Option<String>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Site title shown in the layout
    #[arg(long)]
    title: Option<String>,
}

impl BuildCommand {
    pub async fn execute(self, site: &SiteConfig) -> Result<()> {
        let base = self
            .content
            .as_deref()
            .map_or_else(|| site.content_base(), ContentBase::parse);
        let output = self.output.unwrap_or_else(|| site.build.output.clone());
        let title = self.title.unwrap_or_else(|| site.build.title.clone());

        let layout = match &site.build.layout {
            Some(path) => Layout::from_file(path)?,
            None => Layout::builtin()?,
        };

        let loader = ContentLoader::new(SiteSource::from(&base));
        let builder = SiteBuilder::new(&loader, layout, title)?;
        let report = builder
            .build(&output, base.as_dir().map(PathBuf::as_path))
            .await
            .with_context(|| format!("Failed to build site into {}", output.display()))?;

        print_report(&report, &base);
        Ok(())
    }
}

fn print_report(report: &BuildReport, base: &ContentBase) {
    println!("Content: {}", base);
    for page in &report.pages {
        let (mark, status) = match page.outcome {
            RenderOutcome::Rendered(n) => ("✓".green(), format!("{n} items").normal()),
            RenderOutcome::Empty => ("⚠".yellow(), "no content".yellow()),
            RenderOutcome::Failed => ("✗".red(), "content failed to render".red()),
            RenderOutcome::MissingMount => ("✗".red(), "mount point missing".red()),
        };
        println!("  {} {} ({})", mark, page.path.display(), status);
    }
    if !report.content_files.is_empty() {
        println!("  Copied {} content files", report.content_files.len());
    }
    println!("{} Built {} pages", "✓".green().bold(), report.pages.len());
}
