//! Shared host state.
//!
//! DESIGN
//! ======
//! `HostState` is injected into the `/api` forwarding handler via the `State`
//! extractor. Clone is required by Axum; the HTTP client is internally
//! reference-counted.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct HostState {
    pub http: reqwest::Client,
    pub upstream: Option<Arc<str>>,
}

impl HostState {
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, upstream: config.api_upstream.as_deref().map(Arc::from) })
    }
}
