//! Sample content documents.
//!
//! The documents mirror the shape of a real site's `content/` directory and
//! are small enough to assert on directly.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::{
    ARTICLES_RESOURCE, EXPERIENCE_RESOURCE, PROFILE_RESOURCE, PROJECTS_RESOURCE,
    WOODWORKING_RESOURCE,
};

/// Two bio paragraphs citing two references, plus three social links.
pub const PROFILE_JSON: &str = r#"{
  "bio": [
    "I build developer tools and write about [systems programming](https://example.com/blog) [1].",
    "Previously I worked on search infrastructure [2]."
  ],
  "references": [
    { "number": 1, "description": "See the [talk](https://example.com/talk) from RustConf." },
    { "number": 2, "description": "Internal search platform, 2018-2021." }
  ],
  "social": {
    "email": "jane@example.com",
    "github": "https://github.com/janedoe",
    "medium": "https://medium.com/@jane"
  }
}"#;

pub const ARTICLES_JSON: &str = r#"[
  {
    "title": "Designing a Content Loader",
    "url": "https://example.com/blog/content-loader",
    "date": "March 2024",
    "excerpt": "Caching JSON documents for the lifetime of a page."
  },
  {
    "title": "Notes on Async Rendering",
    "url": "https://example.com/blog/async-rendering",
    "date": "January 2024",
    "excerpt": "Four renderers, one loader, no shared state."
  }
]"#;

pub const EXPERIENCE_JSON: &str = r#"[
  {
    "title": "Senior Engineer",
    "company": "Acme",
    "date": "2021 - Present",
    "location": "Remote",
    "description": "Platform and developer tooling."
  },
  {
    "title": "Software Engineer",
    "company": "Initech",
    "date": "2018 - 2021",
    "description": "Search infrastructure."
  }
]"#;

pub const PROJECTS_JSON: &str = r#"[
  {
    "title": "folio",
    "url": "https://github.com/janedoe/folio",
    "description": "Static site content pipeline.",
    "skills": ["Rust", "Tokio", "Tera"]
  },
  {
    "title": "shelf",
    "url": "https://github.com/janedoe/shelf",
    "description": "A tiny key-value store.",
    "skills": ["Rust"]
  }
]"#;

pub const WOODWORKING_JSON: &str = r#"{ "pieces": [ { "name": "Walnut side table" } ] }"#;

/// Every fixture paired with its resource name.
pub const ALL_FIXTURES: &[(&str, &str)] = &[
    (PROFILE_RESOURCE, PROFILE_JSON),
    (ARTICLES_RESOURCE, ARTICLES_JSON),
    (EXPERIENCE_RESOURCE, EXPERIENCE_JSON),
    (PROJECTS_RESOURCE, PROJECTS_JSON),
    (WOODWORKING_RESOURCE, WOODWORKING_JSON),
];

/// Write every fixture into `dir`, creating it if needed.
pub fn write_content_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create content directory {}", dir.display()))?;
    for (name, body) in ALL_FIXTURES {
        let path = dir.join(name);
        fs::write(&path, body)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
    }
    Ok(())
}
