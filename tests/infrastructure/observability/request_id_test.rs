use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::routing::get;
use pdfchat::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, is_acceptable_request_id, request_id_middleware,
};
use tower::ServiceExt;

fn app() -> Router {
    Router::new()
        .route(
            "/",
            get(|axum::Extension(id): axum::Extension<RequestId>| async move { id.0 }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[tokio::test]
async fn given_caller_request_id_when_handling_then_echoes_it() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "client-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "client-42");
}

#[tokio::test]
async fn given_unsafe_request_id_when_handling_then_replaces_it() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "bad id with spaces")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let echoed = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_ne!(echoed, "bad id with spaces");
    assert!(uuid::Uuid::parse_str(echoed).is_ok());
}

#[test]
fn given_candidate_ids_when_validating_then_accepts_only_safe_tokens() {
    assert!(is_acceptable_request_id("abc-123_x.y"));
    assert!(!is_acceptable_request_id(""));
    assert!(!is_acceptable_request_id("line\nbreak"));
    assert!(!is_acceptable_request_id(&"a".repeat(129)));
}
