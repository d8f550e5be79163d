//! Global constants used throughout the Folio codebase.
//!
//! Resource names, the selectors that form the contract with the page markup,
//! placeholder text, and server defaults live here so the renderers, the site
//! builder and the tests agree on a single value.

/// Resource name of the profile document.
pub const PROFILE_RESOURCE: &str = "profile.json";

/// Resource name of the articles collection.
pub const ARTICLES_RESOURCE: &str = "articles.json";

/// Resource name of the experience collection.
pub const EXPERIENCE_RESOURCE: &str = "experience.json";

/// Resource name of the projects collection.
pub const PROJECTS_RESOURCE: &str = "projects.json";

/// Resource name of the woodworking document.
///
/// An accessor exists for it but no page renders it.
pub const WOODWORKING_RESOURCE: &str = "woodworking.json";

/// Every resource the loader knows a fixed name for, in display order.
pub const ALL_RESOURCES: &[&str] = &[
    PROFILE_RESOURCE,
    ARTICLES_RESOURCE,
    EXPERIENCE_RESOURCE,
    PROJECTS_RESOURCE,
    WOODWORKING_RESOURCE,
];

/// Default content base when neither the CLI nor `folio.toml` provides one.
pub const DEFAULT_CONTENT_BASE: &str = "content/";

/// Default output directory for `folio build`.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Default site title used by the built-in layout.
pub const DEFAULT_SITE_TITLE: &str = "Portfolio";

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Default port of the development server.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Mount id of the home page bio.
pub const REVEALABLE_CONTENT_ID: &str = "revealableContent";

/// Class of the social icon block kept inside the home mount.
pub const SOCIAL_ICONS_CLASS: &str = "social-icons";

/// Mount id of the articles grid.
pub const ARTICLES_GRID_ID: &str = "articlesGrid";

/// Mount class of the experience timeline.
pub const EXPERIENCE_TIMELINE_CLASS: &str = "experience-timeline";

/// Mount class of the projects grid.
pub const PROJECTS_GRID_CLASS: &str = "projects-grid";

/// Prefix of reference block ids (`ref-1`, `ref-2`, ...).
pub const REFERENCE_ID_PREFIX: &str = "ref-";

/// Social link element ids paired with the profile `social` key they read
/// and the URI scheme prepended to the value, if any.
pub const SOCIAL_LINKS: &[(&str, &str, Option<&str>)] = &[
    ("emailIcon", "email", Some("mailto:")),
    ("phoneLink", "phone", Some("tel:")),
    ("linkedinLink", "linkedin", None),
    ("githubLink", "github", None),
    ("mediumLink", "medium", None),
    ("twitterLink", "twitter", None),
    ("hackerNewsLink", "hackernews", None),
    ("instagramLink", "instagram", None),
];

/// Background colours assigned at random to project skill tags.
pub const SKILL_TAG_COLORS: [&str; 15] = [
    "#2563eb", "#8b5cf6", "#06b6d4", "#e94560", "#f59e0b", "#10b981", "#ec4899", "#f97316",
    "#14b8a6", "#6366f1", "#a855f7", "#22c55e", "#ef4444", "#3b82f6", "#eab308",
];

/// Response headers the development server adds to every response.
pub const DEV_SERVER_HEADERS: &[(&str, &str)] = &[
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET"),
    ("cache-control", "no-store, no-cache, must-revalidate"),
];
