//! Common test utilities for Folio integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use anyhow::{Context, Result};
use folio_cli::test_utils::fixtures;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary site project: a working directory with a `content/` folder.
pub struct TestSite {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
}

impl TestSite {
    /// An empty project.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("site");
        fs::create_dir_all(&project_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project whose `content/` holds every fixture resource.
    pub fn with_fixtures() -> Result<Self> {
        let site = Self::new()?;
        fixtures::write_content_dir(&site.content_path())?;
        Ok(site)
    }

    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    pub fn content_path(&self) -> PathBuf {
        self.project_dir.join("content")
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_dir.join("dist")
    }

    /// Write a content file, replacing any fixture of the same name.
    pub fn write_content(&self, name: &str, body: &str) -> Result<()> {
        let dir = self.content_path();
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(name), body)
            .with_context(|| format!("Failed to write content file {name}"))?;
        Ok(())
    }

    pub fn remove_content(&self, name: &str) -> Result<()> {
        fs::remove_file(self.content_path().join(name))?;
        Ok(())
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        fs::write(self.project_dir.join("folio.toml"), content)?;
        Ok(())
    }

    /// Read a file from the build output.
    pub fn read_output(&self, relative: &str) -> Result<String> {
        let path = self.output_path().join(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Run a folio command in the project directory
    pub fn run_folio(&self, args: &[&str]) -> Result<CommandOutput> {
        let folio_binary = env!("CARGO_BIN_EXE_folio");
        let output = Command::new(folio_binary)
            .args(args)
            .current_dir(&self.project_dir)
            .env_remove("FOLIO_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .context("Failed to run folio command")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "Command failed with code {:?}\nStderr: {}",
            self.code, self.stderr
        );
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }
}
