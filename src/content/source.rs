//! Content sources: where resource bytes come from.
//!
//! A [`ContentSource`] turns a resource name into raw bytes. The loader owns
//! parsing and caching, so sources stay dumb: one request per call, no
//! retries, no timeouts.
//!
//! - [`HttpSource`] requests `{base_url}{name}` with reqwest
//! - [`FileSource`] reads `{base_dir}/{name}` from disk
//! - [`SiteSource`] picks one of the two from a configured [`ContentBase`]

use std::future::Future;
use std::path::PathBuf;

use tracing::debug;

use crate::core::FolioError;

/// Something that can retrieve a named content resource.
pub trait ContentSource {
    /// Retrieve the raw bytes of `name`.
    ///
    /// Missing resources and non-success responses are reported as
    /// [`FolioError::ContentUnavailable`]; transport failures as
    /// [`FolioError::NetworkError`].
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Vec<u8>, FolioError>> + Send;

    /// Human-readable location of `name`, for diagnostics.
    fn locate(&self, name: &str) -> String;
}

/// Where content lives, parsed from `--content` or `[content].base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBase {
    /// URL prefix; always ends with `/`.
    Url(String),
    /// Local directory.
    Dir(PathBuf),
}

impl ContentBase {
    /// Parse a base string. `http://` and `https://` prefixes select a URL
    /// base, anything else is a directory.
    #[must_use]
    pub fn parse(base: &str) -> Self {
        if base.starts_with("http://") || base.starts_with("https://") {
            let mut url = base.to_string();
            if !url.ends_with('/') {
                url.push('/');
            }
            Self::Url(url)
        } else {
            Self::Dir(PathBuf::from(base))
        }
    }

    /// The local directory, when this base is one.
    #[must_use]
    pub fn as_dir(&self) -> Option<&PathBuf> {
        match self {
            Self::Dir(dir) => Some(dir),
            Self::Url(_) => None,
        }
    }
}

impl std::fmt::Display for ContentBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Dir(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Fetches resources over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source that requests `{base_url}{name}`.
    ///
    /// The base is concatenated verbatim, so it normally ends with `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl ContentSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FolioError> {
        let url = self.locate(name);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| FolioError::NetworkError {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::ContentUnavailable {
                name: name.to_string(),
                reason: status.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| FolioError::NetworkError {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(body.to_vec())
    }

    fn locate(&self, name: &str) -> String {
        format!("{}{}", self.base_url, name)
    }
}

/// Reads resources from a local directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    base_dir: PathBuf,
}

impl FileSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl ContentSource for FileSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FolioError> {
        let path = self.base_dir.join(name);
        debug!("Reading {}", path.display());

        tokio::fs::read(&path).await.map_err(|e| {
            let reason = if e.kind() == std::io::ErrorKind::NotFound {
                format!("file not found: {}", path.display())
            } else {
                format!("{}: {}", path.display(), e)
            };
            FolioError::ContentUnavailable {
                name: name.to_string(),
                reason,
            }
        })
    }

    fn locate(&self, name: &str) -> String {
        self.base_dir.join(name).display().to_string()
    }
}

/// The source chosen at runtime from a [`ContentBase`].
#[derive(Debug, Clone)]
pub enum SiteSource {
    Http(HttpSource),
    File(FileSource),
}

impl From<&ContentBase> for SiteSource {
    fn from(base: &ContentBase) -> Self {
        match base {
            ContentBase::Url(url) => Self::Http(HttpSource::new(url.clone())),
            ContentBase::Dir(dir) => Self::File(FileSource::new(dir.clone())),
        }
    }
}

impl ContentSource for SiteSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FolioError> {
        match self {
            Self::Http(source) => source.fetch(name).await,
            Self::File(source) => source.fetch(name).await,
        }
    }

    fn locate(&self, name: &str) -> String {
        match self {
            Self::Http(source) => source.locate(name),
            Self::File(source) => source.locate(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_content_base_parse() {
        assert_eq!(
            ContentBase::parse("http://localhost:8000/content"),
            ContentBase::Url("http://localhost:8000/content/".to_string())
        );
        assert_eq!(
            ContentBase::parse("https://example.com/content/"),
            ContentBase::Url("https://example.com/content/".to_string())
        );
        assert_eq!(ContentBase::parse("../content/"), ContentBase::Dir(PathBuf::from("../content/")));
    }

    #[test]
    fn test_http_source_concatenates_base() {
        let source = HttpSource::new("http://localhost:8000/content/");
        assert_eq!(source.locate("profile.json"), "http://localhost:8000/content/profile.json");
    }

    #[tokio::test]
    async fn test_file_source_reads_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("articles.json"), "[]").unwrap();

        let source = FileSource::new(dir.path());
        let bytes = source.fetch("articles.json").await.unwrap();
        assert_eq!(bytes, b"[]");
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let source = SiteSource::from(&ContentBase::Dir(dir.path().to_path_buf()));

        let err = source.fetch("profile.json").await.unwrap_err();
        assert!(matches!(err, FolioError::ContentUnavailable { ref name, .. } if name == "profile.json"));
    }
}
