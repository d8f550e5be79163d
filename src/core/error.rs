//! Error handling for Folio
//!
//! This module provides the error types and user-friendly error reporting for
//! Folio. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling inside the pipeline
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`FolioError`] - Enumerated error types for every failure mode
//! - [`ErrorContext`] - Wrapper that adds details and a suggestion
//!
//! # Error Categories
//!
//! - **Content**: [`FolioError::ContentUnavailable`], [`FolioError::MalformedContent`],
//!   [`FolioError::NetworkError`]
//! - **Rendering**: [`FolioError::TemplateError`]
//! - **Configuration**: [`FolioError::ConfigError`], [`FolioError::ConfigNotFound`]
//! - **Server**: [`FolioError::ServerBindError`]
//! - **File System**: [`FolioError::FileSystemError`], [`FolioError::IoError`]
//!
//! Content errors never reach a page: the loader reduces them to `None` and
//! logs them. They surface to users only through `folio check`.
//!
//! # Examples
//!
//! ```rust,no_run
//! use folio_cli::core::{FolioError, user_friendly_error};
//!
//! let error = FolioError::ContentUnavailable {
//!     name: "profile.json".to_string(),
//!     reason: "404 Not Found".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Every failure mode of the Folio pipeline and CLI.
#[derive(Error, Debug)]
pub enum FolioError {
    /// A content resource could not be retrieved.
    ///
    /// Raised for missing files and non-success HTTP responses.
    #[error("Content resource '{name}' is unavailable: {reason}")]
    ContentUnavailable {
        /// Resource name (e.g. `profile.json`)
        name: String,
        /// Status line or filesystem reason
        reason: String,
    },

    /// A content resource was retrieved but is not valid JSON or does not
    /// match the expected record shape.
    #[error("Content resource '{name}' is malformed: {reason}")]
    MalformedContent {
        /// Resource name
        name: String,
        /// Parser message
        reason: String,
    },

    /// Transport-level failure while requesting a resource.
    #[error("Network error while fetching '{name}': {reason}")]
    NetworkError {
        /// Resource name
        name: String,
        /// Underlying client error
        reason: String,
    },

    /// A fragment or layout template failed to render.
    #[error("Template '{template}' failed to render: {reason}")]
    TemplateError {
        /// Template name
        template: String,
        /// Tera error chain
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was looked up
        path: String,
    },

    /// The development server could not bind its listening socket.
    #[error("Cannot bind development server to {addr}: {reason}")]
    ServerBindError {
        /// Address the server tried to bind
        addr: String,
        /// OS error message
        reason: String,
        /// Whether the port is already taken
        in_use: bool,
    },

    /// File system error
    #[error("File system error: {operation}")]
    FileSystemError {
        /// Operation that failed (e.g. "write page")
        operation: String,
        /// Path involved
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error with a message
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error context wrapper that provides user-friendly error information.
///
/// Wraps a [`FolioError`] with an optional explanation of what went wrong and
/// an optional suggestion of how to fix it.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: FolioError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`FolioError`].
    #[must_use]
    pub fn new(error: FolioError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions.
///
/// Recognizes [`FolioError`] anywhere in the chain, [`std::io::Error`],
/// [`toml::de::Error`] and tera errors; everything else is wrapped as
/// [`FolioError::Other`] carrying the full context chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(folio_error) = cause.downcast_ref::<FolioError>() {
            return create_error_context(folio_error);
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(FolioError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check file ownership and permissions of the output directory")
                .with_details(format!("{error:#}"));
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(FolioError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(format!("{error:#}"));
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(FolioError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in folio.toml. Verify quotes, brackets, and section names");
    }

    if let Some(tera_error) = error.downcast_ref::<tera::Error>() {
        return ErrorContext::new(FolioError::TemplateError {
            template: "layout".to_string(),
            reason: tera_error.to_string(),
        })
        .with_suggestion("Check the custom layout template for syntax errors");
    }

    ErrorContext::new(FolioError::Other {
        message: format!("{error:#}"),
    })
}

/// Build the tailored context for a known [`FolioError`].
fn create_error_context(error: &FolioError) -> ErrorContext {
    match error {
        FolioError::ContentUnavailable { name, reason } => {
            ErrorContext::new(FolioError::ContentUnavailable {
                name: name.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Check the content base with --content or [content].base in folio.toml")
            .with_details(format!("'{name}' must exist next to the other content JSON files"))
        }
        FolioError::MalformedContent { name, reason } => {
            ErrorContext::new(FolioError::MalformedContent {
                name: name.clone(),
                reason: reason.clone(),
            })
            .with_suggestion(format!("Validate '{name}' with a JSON linter"))
        }
        FolioError::NetworkError { name, reason } => ErrorContext::new(FolioError::NetworkError {
            name: name.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Check that the content server is running and reachable"),
        FolioError::TemplateError { template, reason } => {
            ErrorContext::new(FolioError::TemplateError {
                template: template.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Check the template syntax; variables are `title`, `nav`, `page` and `body`")
        }
        FolioError::ConfigError { message } => ErrorContext::new(FolioError::ConfigError {
            message: message.clone(),
        })
        .with_suggestion("Check folio.toml against the documented [content], [build] and [server] sections"),
        FolioError::ConfigNotFound { path } => ErrorContext::new(FolioError::ConfigNotFound {
            path: path.clone(),
        })
        .with_suggestion(format!(
            "Create the file, or unset {} and drop --config to use defaults",
            crate::constants::CONFIG_ENV_VAR
        )),
        FolioError::ServerBindError { addr, reason, in_use } => {
            let ctx = ErrorContext::new(FolioError::ServerBindError {
                addr: addr.clone(),
                reason: reason.clone(),
                in_use: *in_use,
            });
            if *in_use {
                ctx.with_suggestion("Try a different port with --port, or stop the other server")
            } else {
                ctx
            }
        }
        FolioError::FileSystemError { operation, path } => {
            ErrorContext::new(FolioError::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            })
            .with_suggestion("Check that the path exists and is writable")
        }
        FolioError::IoError(e) => ErrorContext::new(FolioError::Other {
            message: e.to_string(),
        }),
        FolioError::Other { message } => ErrorContext::new(FolioError::Other {
            message: message.clone(),
        }),
    }
}
