//! Core types for Folio
//!
//! Error handling lives here: the strongly typed [`FolioError`] used across the
//! pipeline, and the [`ErrorContext`] / [`user_friendly_error`] pair that the
//! CLI uses to present failures with details and suggestions.
//!
//! # Example
//!
//! ```rust
//! use folio_cli::core::{FolioError, ErrorContext};
//!
//! let ctx = ErrorContext::new(FolioError::ContentUnavailable {
//!     name: "articles.json".to_string(),
//!     reason: "404 Not Found".to_string(),
//! })
//! .with_details("The content base has no articles file");
//!
//! assert!(ctx.to_string().contains("articles.json"));
//! ```

pub mod error;

pub use error::{ErrorContext, FolioError, user_friendly_error};
