//! Fragment templates.
//!
//! Each collection item is rendered through a small Tera template. Template
//! names end in `.html`, so Tera autoescapes every interpolated value; a
//! template can only emit unescaped text through an explicit `| safe`, which
//! none of the fragment templates do.

use tera::{Context as TeraContext, Tera};

use crate::core::FolioError;

pub const ARTICLE_TEMPLATE: &str = "article.html";
pub const EXPERIENCE_TEMPLATE: &str = "experience.html";
pub const PROJECT_TEMPLATE: &str = "project.html";

const ARTICLE_SOURCE: &str = r#"
<details class="post-details">
    <summary class="post-header">
        <div>
            <h2 class="post-title">
                <a href="{{ article.url }}">{{ article.title }}</a>
            </h2>
            <p class="post-meta">{{ article.date }}</p>
        </div>
        <i class="fas fa-chevron-down expand-icon"></i>
    </summary>
    <div class="post-content">
        <div class="post-excerpt">
            <p>{{ article.excerpt }}</p>
        </div>
        <div class="continue-reading">
            <a href="{{ article.url }}">Continue reading →</a>
        </div>
    </div>
</details>
"#;

const EXPERIENCE_SOURCE: &str = r#"
<div class="experience-card">
    <h2 class="experience-title">
        {{ experience.title }}
        <span class="experience-company">{{ experience.company }}</span>
    </h2>
    <p class="experience-date">{{ experience.date }}</p>
    {%- if experience.location %}
    <p class="experience-location">{{ experience.location }}</p>
    {%- endif %}
    <p class="experience-description">
        {{ experience.description }}
    </p>
</div>
"#;

const PROJECT_SOURCE: &str = r#"
<h2 class="project-title">
    <a href="{{ project.url }}">{{ project.title }}</a>
</h2>
<p class="project-description">
    {{ project.description }}
</p>
<div class="skills-container">
    {%- for skill in skills %}
    <span class="skill-tag" style="background: {{ skill.color }}">{{ skill.name }}</span>
    {%- endfor %}
</div>
"#;

/// The compiled fragment templates, shared by all renderers.
#[derive(Debug)]
pub struct FragmentTemplates {
    tera: Tera,
}

impl FragmentTemplates {
    /// Compile the built-in fragment templates.
    pub fn new() -> Result<Self, FolioError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (ARTICLE_TEMPLATE, ARTICLE_SOURCE),
            (EXPERIENCE_TEMPLATE, EXPERIENCE_SOURCE),
            (PROJECT_TEMPLATE, PROJECT_SOURCE),
        ])
        .map_err(|e| template_error("fragments", &e))?;
        Ok(Self { tera })
    }

    /// Render `template` with `context`, trimming surrounding whitespace.
    pub fn render(&self, template: &str, context: &TeraContext) -> Result<String, FolioError> {
        self.tera
            .render(template, context)
            .map(|html| html.trim().to_string())
            .map_err(|e| template_error(template, &e))
    }
}

/// Flatten a Tera error and its causes into a [`FolioError::TemplateError`].
pub(crate) fn template_error(template: &str, error: &tera::Error) -> FolioError {
    let mut reason = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    FolioError::TemplateError {
        template: template.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_templates_compile() {
        assert!(FragmentTemplates::new().is_ok());
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let templates = FragmentTemplates::new().unwrap();
        let err = templates.render("missing.html", &TeraContext::new()).unwrap_err();
        assert!(matches!(err, FolioError::TemplateError { ref template, .. } if template == "missing.html"));
    }

    #[test]
    fn test_experience_without_location_omits_paragraph() {
        let templates = FragmentTemplates::new().unwrap();
        let mut context = TeraContext::new();
        context.insert(
            "experience",
            &json!({"title": "Engineer", "company": "Acme", "date": "2021", "location": null, "description": "d"}),
        );

        let html = templates.render(EXPERIENCE_TEMPLATE, &context).unwrap();
        assert!(!html.contains("experience-location"));
        assert!(html.starts_with("<div class=\"experience-card\">"));
    }
}
