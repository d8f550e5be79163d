//! Experience timeline.

use tera::Context as TeraContext;

use super::Section;
use super::templates::{EXPERIENCE_TEMPLATE, FragmentTemplates};
use crate::constants::{EXPERIENCE_RESOURCE, EXPERIENCE_TIMELINE_CLASS};
use crate::core::FolioError;
use crate::dom::{Element, Selector};
use crate::models::Experience;

/// Renders `experience.json` into `.experience-timeline`, one
/// `div.experience-item` per role. The location line is omitted when the
/// record has none.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExperienceSection;

impl Section for ExperienceSection {
    type Item = Experience;

    fn resource(&self) -> &'static str {
        EXPERIENCE_RESOURCE
    }

    fn mount(&self) -> Selector {
        Selector::class(EXPERIENCE_TIMELINE_CLASS)
    }

    fn noun(&self) -> &'static str {
        "experience"
    }

    fn fragment(
        &mut self,
        templates: &FragmentTemplates,
        experience: &Experience,
    ) -> Result<Element, FolioError> {
        let mut context = TeraContext::new();
        context.insert("experience", experience);
        let html = templates.render(EXPERIENCE_TEMPLATE, &context)?;
        Ok(Element::new("div").with_class("experience-item").with_html(html))
    }
}
