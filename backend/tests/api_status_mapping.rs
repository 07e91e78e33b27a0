//! Runs the client against an in-process stand-in for the parsing API.

use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Multipart, Query};
use axum::http::StatusCode;
use axum::routing::{get, post};
use backend::client_utils::summarease_client::SummareaseClient;
use backend::config::ApiSettings;
use common::api_error::{SERVER_DOWN_MESSAGE, api_error_message, ApiEndpoint};
use common::pdf_file::UploadedPdf;
use serde_json::json;

async fn serve(router: Router) -> SummareaseClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    SummareaseClient::new(ApiSettings::new(format!("http://{addr}/"), Duration::from_secs(5))).unwrap()
}

fn sample_pdf() -> UploadedPdf {
    UploadedPdf::new("paper.pdf", "application/pdf", b"%PDF-1.4 test".to_vec())
}

fn failing_upload(code: u16) -> Router {
    Router::new().route(
        "/upload",
        post(move || async move {
            (StatusCode::from_u16(code).unwrap(), Json(json!({"detail": "nope"})))
        }),
    )
}

#[tokio::test]
async fn upload_returns_the_parsed_article() {
    let router = Router::new().route(
        "/upload",
        post(|mut multipart: Multipart| async move {
            let field = multipart.next_field().await.unwrap().unwrap();
            assert_eq!(field.name(), Some("file"));
            assert_eq!(field.file_name(), Some("paper.pdf"));
            assert_eq!(field.content_type(), Some("application/pdf"));
            let bytes = field.bytes().await.unwrap();
            assert!(bytes.starts_with(b"%PDF"));
            Json(json!({
                "article": {"bibliography": {"title": "On Testing"}, "keywords": [], "citations": {}, "sections": [], "tables": {}},
                "common_words": [["test", 3]],
                "phrase_ranks": [],
                "summary": ["Tests are good."]
            }))
        }),
    );
    let client = serve(router).await;
    let response = client.upload_pdf(sample_pdf()).await.unwrap();
    assert_eq!(response.article.bibliography.title, "On Testing");
    assert_eq!(response.summary, vec!["Tests are good.".to_string()]);
}

#[tokio::test]
async fn upload_statuses_map_to_their_messages() {
    for code in [400, 415, 500, 503] {
        let client = serve(failing_upload(code)).await;
        let failure = client.upload_pdf(sample_pdf()).await.unwrap_err();
        assert_eq!(failure.status, Some(code));
        assert_eq!(failure.detail, "nope");
        assert_eq!(failure.user_message(), api_error_message(ApiEndpoint::Upload, Some(code)));
        assert_ne!(failure.user_message(), SERVER_DOWN_MESSAGE);
    }
}

#[tokio::test]
async fn unexpected_status_falls_back_to_server_down() {
    let client = serve(failing_upload(502)).await;
    let failure = client.upload_pdf(sample_pdf()).await.unwrap_err();
    assert_eq!(failure.user_message(), SERVER_DOWN_MESSAGE);
}

#[tokio::test]
async fn unreachable_api_is_server_down() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = SummareaseClient::new(ApiSettings::new(format!("http://{addr}"), Duration::from_secs(2))).unwrap();
    let failure = client.upload_pdf(sample_pdf()).await.unwrap_err();
    assert_eq!(failure.status, None);
    assert_eq!(failure.user_message(), SERVER_DOWN_MESSAGE);
}

#[tokio::test]
async fn undecodable_body_is_an_unexpected_error() {
    let router = Router::new().route("/upload", post(|| async { "not json" }));
    let client = serve(router).await;
    let failure = client.upload_pdf(sample_pdf()).await.unwrap_err();
    assert_eq!(failure.status, Some(500));
}

#[derive(serde::Deserialize)]
struct UrlQuery {
    url: String,
}

#[tokio::test]
async fn validate_url_forwards_the_link() {
    let router = Router::new().route(
        "/validate_url/",
        get(|Query(query): Query<UrlQuery>| async move {
            if query.url == "https://example.org/paper.pdf" {
                (StatusCode::OK, Json(json!({"detail": "PDF URL is valid"})))
            } else {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, Json(json!({"detail": "File has unsupported extension type"})))
            }
        }),
    );
    let client = serve(router).await;
    assert_eq!(client.validate_url("https://example.org/paper.pdf").await, Ok(true));

    let failure = client.validate_url("https://example.org/other.pdf").await.unwrap_err();
    assert_eq!(failure.user_message(), api_error_message(ApiEndpoint::ValidateUrl, Some(415)));

    assert_eq!(client.validate_url("https://example.org/page.html").await, Ok(false));
}
