//! `/api/*` forwarding to the identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Requests under `/api` are
//! relayed to `MEMOIR_API_UPSTREAM` unchanged apart from hop-by-hop headers,
//! so the client can use same-origin URLs in every environment.

use axum::Json;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;
use thiserror::Error;

use crate::state::HostState;

/// Largest request body relayed upstream.
const MAX_BODY_BYTES: usize = 1 << 20;

/// Headers that describe a single connection and must not be relayed.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("api upstream not configured")]
    NotConfigured,
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("request body exceeds {} bytes", MAX_BODY_BYTES)]
    TooLarge,
    #[error("request body rejected: {0}")]
    Body(String),
}

impl From<axum::Error> for ProxyError {
    fn from(err: axum::Error) -> Self {
        let inner = err.into_inner();
        if inner.downcast_ref::<LengthLimitError>().is_some() {
            ProxyError::TooLarge
        } else {
            ProxyError::Body(inner.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ProxyError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ProxyError::Body(_) => StatusCode::BAD_REQUEST,
        };
        tracing::warn!(error = %self, %status, "api forwarding failed");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Join the upstream base and the incoming path + query.
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Copy of `headers` without hop-by-hop, `host`, and `content-length`
/// entries; the outgoing client recomputes the latter two.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| {
            let name = name.as_str();
            name != header::HOST.as_str()
                && name != header::CONTENT_LENGTH.as_str()
                && !HOP_BY_HOP.contains(&name)
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Relay one request upstream and the response back.
pub async fn forward(State(state): State<HostState>, req: Request) -> Result<Response, ProxyError> {
    let upstream = state.upstream.as_deref().ok_or(ProxyError::NotConfigured)?;
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or(parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(upstream, path_and_query);
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES).await?;

    tracing::debug!(method = %parts.method, %url, "forwarding api request");
    let resp = state
        .http
        .request(parts.method, &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = resp.status();
    let headers = forwardable_headers(resp.headers());
    let bytes = resp.bytes().await?;

    let mut out = Response::new(Body::from(bytes));
    *out.status_mut() = status;
    *out.headers_mut() = headers;
    Ok(out)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
