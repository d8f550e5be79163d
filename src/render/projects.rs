//! Projects grid.
//!
//! Each skill tag gets a background colour drawn independently and uniformly
//! from [`SKILL_TAG_COLORS`]. Colours are not stable across renders; pass a
//! seeded RNG to [`ProjectsSection::new`] when a test needs them to be.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::{Rng, seq::SliceRandom};
use serde::Serialize;
use tera::Context as TeraContext;

use super::Section;
use super::templates::{FragmentTemplates, PROJECT_TEMPLATE};
use crate::constants::{PROJECTS_GRID_CLASS, PROJECTS_RESOURCE, SKILL_TAG_COLORS};
use crate::core::FolioError;
use crate::dom::{Element, Selector};
use crate::models::Project;

/// A skill label with its assigned colour, as seen by the project template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillTag<'a> {
    pub name: &'a str,
    pub color: &'static str,
}

/// Renders `projects.json` into `.projects-grid`, one `div.project-card` per
/// project.
#[derive(Debug)]
pub struct ProjectsSection<R> {
    rng: R,
}

impl ProjectsSection<StdRng> {
    /// A section seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ProjectsSection<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pair every skill with a random palette colour, keeping skill order.
    pub fn skill_tags<'a>(&mut self, skills: &'a [String]) -> Vec<SkillTag<'a>> {
        skills
            .iter()
            .map(|name| SkillTag {
                name,
                color: SKILL_TAG_COLORS
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(SKILL_TAG_COLORS[0]),
            })
            .collect()
    }
}

impl<R: Rng> Section for ProjectsSection<R> {
    type Item = Project;

    fn resource(&self) -> &'static str {
        PROJECTS_RESOURCE
    }

    fn mount(&self) -> Selector {
        Selector::class(PROJECTS_GRID_CLASS)
    }

    fn noun(&self) -> &'static str {
        "projects"
    }

    fn fragment(
        &mut self,
        templates: &FragmentTemplates,
        project: &Project,
    ) -> Result<Element, FolioError> {
        let mut context = TeraContext::new();
        context.insert("project", project);
        context.insert("skills", &self.skill_tags(&project.skills));
        let html = templates.render(PROJECT_TEMPLATE, &context)?;
        Ok(Element::new("div").with_class("project-card").with_html(html))
    }
}
