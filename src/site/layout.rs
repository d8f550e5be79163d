//! Page layout.
//!
//! Rendered page bodies are wrapped in a Tera layout. The layout sees:
//!
//! | Variable | Type | Contents |
//! |----------|------|----------|
//! | `title`  | string | site title |
//! | `page`   | string | page title |
//! | `nav`    | list of `{ href, label, active }` | navigation entries |
//! | `body`   | string | rendered page body; print it with `\| safe` |
//!
//! The built-in layout's stylesheet makes the reference blocks exclusive:
//! following a `#ref-n` toggle targets that block, and only the targeted
//! block is displayed.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tera::{Context as TeraContext, Tera};

use super::pages::PageKind;
use crate::core::FolioError;
use crate::render::escape::TrustedMarkup;
use crate::render::templates::template_error;

const LAYOUT_TEMPLATE: &str = "layout.html";

const BUILTIN_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ page }} | {{ title }}</title>
    <style>
        :root { --error: #ef4444; --accent: #2563eb; }
        body { font-family: system-ui, sans-serif; margin: 0; line-height: 1.6; }
        nav { display: flex; gap: 1.5rem; padding: 1rem 2rem; border-bottom: 1px solid #e5e7eb; }
        nav a { color: inherit; text-decoration: none; }
        nav a.active { color: var(--accent); font-weight: 600; }
        .container { max-width: 60rem; margin: 0 auto; padding: 2rem; }
        .reference { display: none; padding: 0.5rem 1rem; border-left: 3px solid var(--accent); }
        .reference:target { display: block; }
        .social-icons { display: flex; gap: 1rem; margin-top: 1.5rem; }
        .skill-tag { color: #fff; border-radius: 999px; padding: 0.1rem 0.6rem; margin-right: 0.4rem; font-size: 0.85rem; }
        .post-details summary { cursor: pointer; list-style: none; }
    </style>
</head>
<body>
    <nav>
        <span class="site-title">{{ title }}</span>
        {%- for item in nav %}
        <a href="{{ item.href }}"{% if item.active %} class="active"{% endif %}>{{ item.label }}</a>
        {%- endfor %}
    </nav>
    {{ body | safe }}
</body>
</html>
"#;

#[derive(Debug, Serialize)]
struct NavItem {
    href: &'static str,
    label: &'static str,
    active: bool,
}

/// A compiled page layout.
#[derive(Debug)]
pub struct Layout {
    tera: Tera,
}

impl Layout {
    /// The built-in layout.
    pub fn builtin() -> Result<Self, FolioError> {
        Self::from_source(BUILTIN_LAYOUT)
    }

    /// Compile a layout from Tera source.
    pub fn from_source(source: &str) -> Result<Self, FolioError> {
        let mut tera = Tera::default();
        tera.add_raw_template(LAYOUT_TEMPLATE, source)
            .map_err(|e| template_error(LAYOUT_TEMPLATE, &e))?;
        Ok(Self { tera })
    }

    /// Read and compile a layout file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout template: {}", path.display()))?;
        Ok(Self::from_source(&source)?)
    }

    /// Wrap `body` for page `kind`.
    pub fn render(&self, title: &str, kind: PageKind, body: &TrustedMarkup) -> Result<String, FolioError> {
        let nav: Vec<NavItem> = PageKind::ALL
            .iter()
            .map(|&page| NavItem {
                href: page.file_name(),
                label: page.title(),
                active: page == kind,
            })
            .collect();

        let mut context = TeraContext::new();
        context.insert("title", title);
        context.insert("page", kind.title());
        context.insert("nav", &nav);
        context.insert("body", body);

        self.tera
            .render(LAYOUT_TEMPLATE, &context)
            .map_err(|e| template_error(LAYOUT_TEMPLATE, &e))
    }
}
