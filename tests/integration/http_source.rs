use folio_cli::content::{ContentLoader, ContentSource, HttpSource};
use folio_cli::core::FolioError;
use folio_cli::models::Article;
use folio_cli::server::DevServer;
use std::net::SocketAddr;
use std::path::Path;
use tokio::sync::oneshot;

use crate::common::TestSite;

/// Serve `root` on an ephemeral port until the sender is dropped.
async fn serve(root: &Path) -> (SocketAddr, oneshot::Sender<()>) {
    let server = DevServer::bind(root, "127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = server.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(server.run_until(async move {
        let _ = rx.await;
    }));
    (addr, tx)
}

#[tokio::test]
async fn test_loader_fetches_over_http() {
    let site = TestSite::with_fixtures().unwrap();
    let (addr, _stop) = serve(site.project_path()).await;

    let loader = ContentLoader::new(HttpSource::new(format!("http://{addr}/content/")));
    let articles: Vec<Article> = loader.get_articles().await.unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Designing a Content Loader");

    // Second read is served from the cache
    assert!(loader.is_cached("articles.json"));
    loader.get_articles().await.unwrap();
    assert_eq!(loader.stats(), (1, 1));
}

#[tokio::test]
async fn test_missing_resource_is_unavailable() {
    let site = TestSite::with_fixtures().unwrap();
    let (addr, _stop) = serve(site.project_path()).await;

    let source = HttpSource::new(format!("http://{addr}/content/"));
    let err = source.fetch("nope.json").await.unwrap_err();
    assert!(matches!(err, FolioError::ContentUnavailable { .. }));
    assert!(err.to_string().contains("404"));

    let loader = ContentLoader::new(source);
    assert!(loader.fetch("nope.json").await.is_none());
    assert!(!loader.is_cached("nope.json"));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpSource::new(format!("http://{addr}/"));
    let err = source.fetch("profile.json").await.unwrap_err();
    assert!(matches!(err, FolioError::NetworkError { .. }));
}

/// `folio build` against a content base served over HTTP
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_build_from_http_content() {
    let content_host = TestSite::with_fixtures().unwrap();
    let (addr, _stop) = serve(content_host.project_path()).await;

    let site = TestSite::new().unwrap();
    let base = format!("http://{addr}/content/");
    let output = tokio::task::spawn_blocking(move || {
        let output = site.run_folio(&["build", "--content", &base]).unwrap();
        (site, output)
    })
    .await
    .unwrap();
    let (site, output) = output;

    output.assert_success().assert_stdout_contains("Built 4 pages");
    let experience = site.read_output("experience.html").unwrap();
    assert!(experience.contains("Senior Engineer"));
    // Remote content is not copied into the output
    assert!(!site.output_path().join("content").exists());
}
