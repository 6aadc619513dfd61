use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::config::HostConfig;

fn api_router(upstream: Option<String>) -> Router {
    let state =
        HostState::new(&HostConfig { port: 0, api_upstream: upstream, proxy_timeout_secs: 5 }).unwrap();
    api_routes(state)
}

#[tokio::test]
async fn healthz_responds_ok_through_router() {
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = api_router(None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_without_upstream_is_service_unavailable_through_router() {
    let req = Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap();
    let resp = api_router(None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
