// src/core/net.rs
// HTTP GET of dataset resources (reqwest, rustls).

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::resource::Resource;

/// Retrieves the raw text of one dataset resource.
///
/// The façade only ever talks to this trait, so tests can hand it
/// canned text or canned failures instead of the network.
pub trait Fetch: Send + Sync {
    fn fetch_text(&self, resource: Resource) -> impl Future<Output = Result<String, FetchError>> + Send;
}

impl<T: Fetch> Fetch for Arc<T> {
    fn fetch_text(&self, resource: Resource) -> impl Future<Output = Result<String, FetchError>> + Send {
        (**self).fetch_text(resource)
    }
}

/// Production fetcher: one pooled client, one GET per call, no caching.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, base_url: s!(config.base_url()) })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch_text(&self, resource: Resource) -> Result<String, FetchError> {
        let url = resource.url(&self.base_url);
        let t = Instant::now();
        debug!(%resource, %url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        let body = resp
            .text()
            .await
            .map_err(|source| FetchError::Body { url: url.clone(), source })?;

        debug!(%resource, bytes = body.len(), elapsed = ?t.elapsed(), "fetched");
        Ok(body)
    }
}
