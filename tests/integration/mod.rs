//! Integration test suite for Folio
//!
//! End-to-end tests that drive the `folio` binary against temporary content
//! directories, and the HTTP content source against a live development
//! server.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **build**: `folio build` output and empty/failed states
//! - **check**: `folio check` text and JSON reports, exit codes
//! - **config**: `folio.toml` lookup and validation errors
//! - **http_source**: loading content over HTTP from the development server

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod build;
mod check;
mod config;
mod http_source;
