//! File system and path helpers.
//!
//! - [`fs`] - atomic writes and directory creation for the built site
//! - [`path_validation`] - mapping request paths onto the served root safely

pub mod fs;
pub mod path_validation;

pub use fs::{atomic_write, copy_file, ensure_dir, safe_write};
pub use path_validation::{resolve_request_path, validate_no_traversal};
