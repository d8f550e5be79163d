//! Page shells.
//!
//! Each page of the site starts as a fixed shell holding the mount point its
//! renderer fills. The shells are the markup contract the renderers rely on:
//! the mount ids and classes below, and the social link anchors on the home
//! page.

use serde::Serialize;

use crate::constants::{
    ARTICLES_GRID_ID, EXPERIENCE_TIMELINE_CLASS, PROJECTS_GRID_CLASS, REVEALABLE_CONTENT_ID,
    SOCIAL_ICONS_CLASS,
};
use crate::dom::{Element, Page};

/// The pages of the site, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Articles,
    Experience,
    Projects,
}

/// Placeholder social links: element id, label, icon class and the href
/// shown until the profile supplies the real one.
const SOCIAL_PLACEHOLDERS: &[(&str, &str, &str, &str)] = &[
    ("emailIcon", "Email", "fas fa-envelope", "mailto:"),
    ("phoneLink", "Phone", "fas fa-phone", "tel:"),
    ("linkedinLink", "LinkedIn", "fab fa-linkedin", "https://www.linkedin.com/"),
    ("githubLink", "GitHub", "fab fa-github", "https://github.com/"),
    ("mediumLink", "Medium", "fab fa-medium", "https://medium.com/"),
    ("twitterLink", "Twitter", "fab fa-twitter", "https://twitter.com/"),
    ("hackerNewsLink", "Hacker News", "fab fa-hacker-news", "https://news.ycombinator.com/"),
    ("instagramLink", "Instagram", "fab fa-instagram", "https://www.instagram.com/"),
];

impl PageKind {
    pub const ALL: [PageKind; 4] = [Self::Home, Self::Articles, Self::Experience, Self::Projects];

    /// Output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Articles => "articles.html",
            Self::Experience => "experience.html",
            Self::Projects => "projects.html",
        }
    }

    /// Heading and navigation label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "About",
            Self::Articles => "Articles",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
        }
    }

    /// A fresh shell for this page.
    pub fn shell(self) -> Page {
        let section = match self {
            Self::Home => home_section(),
            Self::Articles => titled_section(
                self,
                Element::new("div").with_id(ARTICLES_GRID_ID).with_class("articles-grid"),
            ),
            Self::Experience => {
                titled_section(self, Element::new("div").with_class(EXPERIENCE_TIMELINE_CLASS))
            }
            Self::Projects => {
                titled_section(self, Element::new("div").with_class(PROJECTS_GRID_CLASS))
            }
        };
        Page::new().with_element(Element::new("main").with_class("container").with_child(section))
    }
}

fn titled_section(kind: PageKind, mount: Element) -> Element {
    Element::new("section")
        .with_class("page-section")
        .with_child(Element::new("h1").with_class("page-title").with_html(kind.title()))
        .with_child(mount)
}

fn home_section() -> Element {
    let mut icons = Element::new("div").with_class(SOCIAL_ICONS_CLASS);
    for &(id, label, icon, href) in SOCIAL_PLACEHOLDERS {
        icons = icons.with_child(
            Element::new("a")
                .with_id(id)
                .with_attribute("href", href)
                .with_attribute("aria-label", label)
                .with_child(Element::new("i").with_class(icon)),
        );
    }

    Element::new("section").with_class("hero").with_child(
        Element::new("div")
            .with_id(REVEALABLE_CONTENT_ID)
            .with_class("revealable-content")
            .with_child(icons),
    )
}
