//! Content loading for Folio.
//!
//! Resources are named JSON documents (`profile.json`, `articles.json`, ...)
//! living under a configurable base, either a directory or a URL prefix.
//! The [`ContentLoader`] is the single entry point: it asks a
//! [`ContentSource`] for bytes on the first request for a name, parses them,
//! and serves every later request for that name from its cache.
//!
//! # Error Handling
//!
//! Nothing in this module fails loudly on behalf of a page. Missing
//! resources, non-success responses and malformed JSON are logged and become
//! `None`. [`ContentLoader::try_fetch`] exists for diagnostics that need the
//! cause.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_cli::content::{ContentBase, ContentLoader, SiteSource};
//!
//! # async fn example() {
//! let base = ContentBase::parse("http://localhost:8000/content/");
//! let loader = ContentLoader::new(SiteSource::from(&base));
//!
//! match loader.get_profile().await {
//!     Some(profile) => println!("{} bio paragraphs", profile.bio.len()),
//!     None => println!("profile unavailable"),
//! }
//! # }
//! ```

mod cache;
pub mod loader;
pub mod source;

pub use loader::ContentLoader;
pub use source::{ContentBase, ContentSource, FileSource, HttpSource, SiteSource};
