use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::util::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = health_routes::<()>()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let response = health_routes::<()>()
        .oneshot(Request::builder().method("POST").uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found_without_site_fallback() {
    let response = health_routes::<()>()
        .oneshot(Request::builder().uri("/api/tickets/create").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
