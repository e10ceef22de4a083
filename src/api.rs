//! Lead REST Client
//!
//! `LeadApi` over gloo-net against `{api_url}/api/lead`.
//! Straight passthrough: no retry, no timeout, no caching.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use lead_core::{Lead, LeadApi, LeadDraft, LeadId, StatusPatch};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;

/// REST resource path under the configured origin
pub const LEADS_PATH: &str = "/api/lead";

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    leads_url: String,
}

impl ApiClient {
    pub fn new(api_url: &str) -> Self {
        Self {
            leads_url: format!("{}{}", api_url.trim_end_matches('/'), LEADS_PATH),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api_url)
    }

    pub fn leads_url(&self) -> &str {
        &self.leads_url
    }

    fn lead_url(&self, id: &LeadId) -> String {
        format!("{}/{}", self.leads_url, utf8_percent_encode(id.as_str(), PATH_SEGMENT))
    }
}

/// Decode a 2xx body, anything else is an `ApiError::Http`
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(ApiError::Http(resp.status()))
    }
}

#[async_trait(?Send)]
impl LeadApi for ApiClient {
    type Error = ApiError;

    async fn list(&self) -> Result<Vec<Lead>, ApiError> {
        let resp = Request::get(&self.leads_url).send().await?;
        read_json(resp).await
    }

    async fn get(&self, id: &LeadId) -> Result<Lead, ApiError> {
        let resp = Request::get(&self.lead_url(id)).send().await?;
        read_json(resp).await
    }

    async fn create(&self, draft: &LeadDraft) -> Result<Lead, ApiError> {
        let resp = Request::post(&self.leads_url).json(draft)?.send().await?;
        read_json(resp).await
    }

    async fn update(&self, id: &LeadId, draft: &LeadDraft) -> Result<Lead, ApiError> {
        let resp = Request::put(&self.lead_url(id)).json(draft)?.send().await?;
        read_json(resp).await
    }

    async fn update_status(&self, id: &LeadId, patch: StatusPatch) -> Result<Lead, ApiError> {
        let resp = Request::put(&self.lead_url(id)).json(&patch)?.send().await?;
        read_json(resp).await
    }

    async fn delete(&self, id: &LeadId) -> Result<(), ApiError> {
        let resp = Request::delete(&self.lead_url(id)).send().await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(ApiError::Http(resp.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.leads_url(), "http://localhost:5000/api/lead");
        assert_eq!(
            client.lead_url(&LeadId::new("65f1c0ffee")),
            "http://localhost:5000/api/lead/65f1c0ffee"
        );
    }

    #[test]
    fn test_id_is_path_escaped() {
        let client = ApiClient::new("");
        assert_eq!(client.lead_url(&LeadId::new("a/b c?")), "/api/lead/a%2Fb%20c%3F");
    }
}
