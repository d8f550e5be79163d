//! Development server.
//!
//! Serves a built site (or any directory) over HTTP for local preview, so the
//! pages can fetch their content files without tripping over browser
//! restrictions on `file://` URLs.
//!
//! - `/` and directory paths serve `index.html`
//! - every response carries permissive CORS and no-cache headers
//! - each request is logged at info level
//! - paths containing `..` are rejected with 403
//! - only `GET` and `HEAD` are answered; other methods get 405

use axum::Router;
use axum::body::Body;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, Uri, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use std::future::Future;
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::constants::DEV_SERVER_HEADERS;
use crate::core::FolioError;
use crate::utils::path_validation::resolve_request_path;

/// A bound, not yet running, development server.
#[derive(Debug)]
pub struct DevServer {
    listener: TcpListener,
    root: PathBuf,
}

impl DevServer {
    /// Bind `addr` to serve files under `root`.
    ///
    /// # Errors
    ///
    /// [`FolioError::ServerBindError`], with `in_use` set when the port is
    /// already taken.
    pub async fn bind(root: impl Into<PathBuf>, addr: SocketAddr) -> Result<Self, FolioError> {
        let listener = TcpListener::bind(addr).await.map_err(|e| FolioError::ServerBindError {
            addr: addr.to_string(),
            reason: e.to_string(),
            in_use: e.kind() == ErrorKind::AddrInUse,
        })?;
        Ok(Self {
            listener,
            root: root.into(),
        })
    }

    /// The address actually bound (useful with port 0).
    pub fn local_addr(&self) -> Result<SocketAddr, FolioError> {
        Ok(self.listener.local_addr()?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serve until Ctrl+C.
    pub async fn run(self) -> Result<(), FolioError> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl+C: {}", e);
            }
        })
        .await
    }

    /// Serve until `shutdown` completes.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), FolioError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!("Serving {} at http://{}", self.root.display(), addr);

        let app = router(self.root);
        axum::serve(
            self.listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// The static file router, with development headers and request logging.
pub fn router(root: PathBuf) -> Router {
    Router::new()
        .fallback(serve_file)
        .with_state(Arc::new(root))
        .layer(middleware::map_response(add_dev_headers))
        .layer(middleware::from_fn(log_request))
}

async fn serve_file(State(root): State<Arc<PathBuf>>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response();
    }

    let mut path = match resolve_request_path(&root, uri.path()) {
        Ok(path) => path,
        Err(e) => {
            warn!("Rejected request for {}: {}", uri.path(), e);
            return (StatusCode::FORBIDDEN, "Forbidden").into_response();
        }
    };
    if tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_dir()) {
        path.push("index.html");
    }

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let body = if method == Method::HEAD {
                Body::empty()
            } else {
                Body::from(bytes)
            };
            (StatusCode::OK, [(header::CONTENT_TYPE, content_type(&path))], body).into_response()
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No file at {}", path.display());
            (StatusCode::NOT_FOUND, "File not found").into_response()
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

async fn add_dev_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for &(name, value) in DEV_SERVER_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    response
}

async fn log_request(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    info!("{} - \"{} {}\" {}", peer, method, path, response.status().as_u16());
    response
}

/// Content type for a served file, by extension.
pub fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
