//! Articles grid.

use tera::Context as TeraContext;

use super::Section;
use super::templates::{ARTICLE_TEMPLATE, FragmentTemplates};
use crate::constants::{ARTICLES_GRID_ID, ARTICLES_RESOURCE};
use crate::core::FolioError;
use crate::dom::{Element, Selector};
use crate::models::Article;

/// Renders `articles.json` into `#articlesGrid`, one `article.post-teaser`
/// per entry. The teaser is a collapsible block whose summary shows the
/// title and date; the excerpt and a "continue reading" link expand below.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArticlesSection;

impl Section for ArticlesSection {
    type Item = Article;

    fn resource(&self) -> &'static str {
        ARTICLES_RESOURCE
    }

    fn mount(&self) -> Selector {
        Selector::id(ARTICLES_GRID_ID)
    }

    fn noun(&self) -> &'static str {
        "articles"
    }

    fn fragment(
        &mut self,
        templates: &FragmentTemplates,
        article: &Article,
    ) -> Result<Element, FolioError> {
        let mut context = TeraContext::new();
        context.insert("article", article);
        let html = templates.render(ARTICLE_TEMPLATE, &context)?;
        Ok(Element::new("article").with_class("post-teaser").with_html(html))
    }
}
