use crate::api::models::{PERSON_SEARCH_ENDPOINT, SearchRequest, SearchResponse};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};

pub const DEFAULT_BASE_URL: &str = "https://api.peopledatalabs.com";
const USER_AGENT: &str = concat!("pdl-cli/", env!("CARGO_PKG_VERSION"));

/// Anything that can run a person search.
///
/// Implemented by [`PdlClient`] for the hosted API; tests substitute their own.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run one search. Non-success statuses come back as a response carrying
    /// that status; only transport and decoding failures are errors here.
    async fn search_person(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct PdlClient {
    client: Client,
    pub base_url: String,
    api_key: String,
}

impl PdlClient {
    // No request timeout: a hung call hangs the process.
    pub fn with_api_key(base_url: String, api_key: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init"))?;

        Ok(PdlClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header("X-Api-Key", &self.api_key)
    }
}

#[async_trait]
impl SearchBackend for PdlClient {
    async fn search_person(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let endpoint = PERSON_SEARCH_ENDPOINT;

        let response = self
            .build_request(Method::POST, endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| convert_request_error(e, endpoint))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| convert_request_error(e, endpoint))?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| ApiError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            });
        }

        // Error bodies are best effort; the HTTP status is authoritative.
        let mut failed: SearchResponse = serde_json::from_str(&body).unwrap_or_default();
        failed.status = status.as_u16();
        failed.data.clear();
        log::debug!("PDL responded {} for {}: {}", status, endpoint, body);
        Ok(failed)
    }
}

fn convert_request_error(error: reqwest::Error, endpoint: &str) -> ApiError {
    ApiError::Transport {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}
