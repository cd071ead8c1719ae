use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use flagdeck_kernel::domain::config::FlagHostConfig;
use flagdeck_kernel::error::SourceError;
use flagdeck_kernel::source::{FlagSource, HttpFlagSource};
use tokio::net::TcpListener;

const CODES: &str = r#"{"fr":"France","de":"Germany","ua":"Ukraine"}"#;
const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 3 2"><path fill="#0055A4" d="M0 0h1v2H0z"/></svg>"##;
const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

async fn serve(app: Router) -> FlagHostConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake flag host");
    });

    FlagHostConfig { base_url: format!("http://{addr}"), ..FlagHostConfig::default() }
}

fn healthy_host() -> Router {
    Router::new()
        .route("/en/codes.json", get(|| async { ([(header::CONTENT_TYPE, "application/json")], CODES) }))
        .route("/fr.svg", get(|| async { ([(header::CONTENT_TYPE, "image/svg+xml")], SVG) }))
        .route("/256x192/fr.png", get(|| async { ([(header::CONTENT_TYPE, "image/png")], PNG) }))
}

#[tokio::test]
async fn fetches_directory_in_document_order() {
    let host = serve(healthy_host()).await;
    let source = HttpFlagSource::new(host);

    let directory = source.fetch_directory().await.expect("directory");
    let codes: Vec<_> = directory.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, ["fr", "de", "ua"]);
    assert_eq!(directory.get("ua"), Some("Ukraine"));
}

#[tokio::test]
async fn fetches_svg_text_verbatim() {
    let host = serve(healthy_host()).await;
    let url = host.svg_url("fr");
    let source = HttpFlagSource::new(host);

    assert_eq!(source.fetch_text(&url).await.expect("svg"), SVG);
}

#[tokio::test]
async fn fetches_png_bytes_verbatim() {
    let host = serve(healthy_host()).await;
    let url = host.png_url("fr");
    let source = HttpFlagSource::new(host);

    assert_eq!(source.fetch_bytes(&url).await.expect("png"), PNG);
}

#[tokio::test]
async fn server_error_is_a_status_error() {
    let app = Router::new()
        .route("/en/codes.json", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));
    let source = HttpFlagSource::new(serve(app).await);

    let err = source.fetch_directory().await.expect_err("500 must fail");
    assert!(matches!(err, SourceError::Status { status: 500, .. }), "got {err}");
}

#[tokio::test]
async fn missing_flag_is_a_status_error() {
    let host = serve(healthy_host()).await;
    let url = host.svg_url("xx");
    let source = HttpFlagSource::new(host);

    let err = source.fetch_text(&url).await.expect_err("404 must fail");
    assert!(matches!(err, SourceError::Status { status: 404, .. }), "got {err}");
}

#[tokio::test]
async fn malformed_directory_is_a_decode_error() {
    let app = Router::new().route("/en/codes.json", get(|| async { "<html>maintenance</html>" }));
    let source = HttpFlagSource::new(serve(app).await);

    let err = source.fetch_directory().await.expect_err("html must fail");
    assert!(matches!(err, SourceError::Decode { .. }), "got {err}");
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let host = FlagHostConfig { base_url: format!("http://{addr}"), ..FlagHostConfig::default() };
    let err = HttpFlagSource::new(host).fetch_directory().await.expect_err("closed port");
    assert!(matches!(err, SourceError::Request { .. }), "got {err}");
}
