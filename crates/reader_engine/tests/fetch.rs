use std::fs;

use pretty_assertions::assert_eq;
use reader_engine::{
    ArtifactFetcher, FailureKind, FsArtifactFetcher, HttpArtifactFetcher, ManifestDoc,
    ManifestPageDoc, PageDoc,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_manifest() -> ManifestDoc {
    ManifestDoc {
        title: "Sample".to_string(),
        total_pages: 2,
        pages: vec![ManifestPageDoc {
            page: 1,
            title: "Cover".to_string(),
            has_content: true,
        }],
    }
}

fn sample_page() -> PageDoc {
    PageDoc {
        page: 1,
        title: "Cover".to_string(),
        content: "<h1>Cover</h1>".to_string(),
    }
}

#[tokio::test]
async fn fs_fetcher_reads_artifacts_from_output_root() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data/pages")).unwrap();
    fs::write(
        temp.path().join("data/manifest.json"),
        serde_json::to_string_pretty(&sample_manifest()).unwrap(),
    )
    .unwrap();
    fs::write(
        temp.path().join("data/pages/page-001.json"),
        serde_json::to_string_pretty(&sample_page()).unwrap(),
    )
    .unwrap();

    let fetcher = FsArtifactFetcher::new(temp.path().to_path_buf());
    assert_eq!(fetcher.fetch_manifest().await.unwrap(), sample_manifest());
    assert_eq!(fetcher.fetch_page(1).await.unwrap(), sample_page());
}

#[tokio::test]
async fn fs_fetcher_maps_missing_artifacts_to_not_found() {
    let temp = TempDir::new().unwrap();
    let fetcher = FsArtifactFetcher::new(temp.path().to_path_buf());

    let err = fetcher.fetch_page(42).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::NotFound);
}

#[tokio::test]
async fn fs_fetcher_maps_malformed_artifacts_to_decode() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data/manifest.json"), "{ not json").unwrap();

    let fetcher = FsArtifactFetcher::new(temp.path().to_path_buf());
    let err = fetcher.fetch_manifest().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn http_fetcher_reads_artifacts_from_static_host() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/manifest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_manifest()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/pages/page-001.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_page()))
        .mount(&server)
        .await;

    let fetcher = HttpArtifactFetcher::new(&server.uri()).unwrap();
    assert_eq!(fetcher.fetch_manifest().await.unwrap(), sample_manifest());
    assert_eq!(fetcher.fetch_page(1).await.unwrap(), sample_page());
}

#[tokio::test]
async fn http_fetcher_joins_base_paths_without_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/docs/reader/data/manifest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_manifest()))
        .mount(&server)
        .await;

    let base = format!("{}/docs/reader", server.uri());
    let fetcher = HttpArtifactFetcher::new(&base).unwrap();
    assert_eq!(fetcher.fetch_manifest().await.unwrap(), sample_manifest());
}

#[tokio::test]
async fn http_fetcher_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/pages/page-009.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpArtifactFetcher::new(&server.uri()).unwrap();
    let err = fetcher.fetch_page(9).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::NotFound);
}

#[tokio::test]
async fn http_fetcher_surfaces_other_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/manifest.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = HttpArtifactFetcher::new(&server.uri()).unwrap();
    let err = fetcher.fetch_manifest().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn http_fetcher_maps_bad_json_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/manifest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ nope"))
        .mount(&server)
        .await;

    let fetcher = HttpArtifactFetcher::new(&server.uri()).unwrap();
    let err = fetcher.fetch_manifest().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[test]
fn http_fetcher_rejects_invalid_base_urls() {
    let err = HttpArtifactFetcher::new("not a url").unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
