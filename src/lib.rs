//! Folio - content pipeline for a static personal website
//!
//! Folio renders a personal website from a handful of JSON content files
//! (a profile, articles, experience, projects) into HTML pages, and serves
//! the result locally for preview.
//!
//! # Architecture Overview
//!
//! - A [`content::ContentLoader`] fetches named JSON resources through a
//!   [`content::ContentSource`] (a local directory or an HTTP base URL) and
//!   caches every successful parse for the rest of the run
//! - Four renderers in [`render`] fill a mount point in a page
//!   ([`dom::Document`]) with fragments built from that content, showing a
//!   loading, empty, or error message as appropriate
//! - [`site`] runs the renderers against page shells, wraps each page in a
//!   layout, and writes the site
//! - [`server`] serves a built site with development headers
//!
//! # Core Modules
//!
//! - [`cli`] - `build`, `check`, and `serve` commands
//! - [`config`] - `folio.toml` loading and validation
//! - [`content`] - content sources and the caching loader
//! - [`core`] - error types and user-facing error display
//! - [`dom`] - the document capability traits and an in-memory page tree
//! - [`models`] - typed content records
//! - [`render`] - renderers, markup translation, and escaping
//!
//! ## Supporting Modules
//! - [`constants`] - resource names, mount ids, and defaults
//! - [`utils`] - file writes and request path validation
//!
//! # Configuration (folio.toml)
//!
//! ```toml
//! [content]
//! base = "content/"          # directory or http(s) URL prefix
//!
//! [build]
//! output = "dist"
//! title = "Jane Doe"
//!
//! [server]
//! port = 8000
//! ```
//!
//! Every section is optional.

// Core functionality modules
pub mod cli;
pub mod config;
pub mod content;
pub mod core;

// Rendering
pub mod dom;
pub mod models;
pub mod render;
pub mod site;

// Supporting modules
pub mod constants;
pub mod server;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
