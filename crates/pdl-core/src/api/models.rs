use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An untyped person record exactly as PDL returns it.
pub type RawRecord = Map<String, Value>;

pub const PERSON_SEARCH_ENDPOINT: &str = "/v5/person/search";

/// Dataset scope searched by every query.
pub const SEARCH_DATASET: &str = "all";

/// Result cap per query. There is no pagination beyond it.
pub const SEARCH_SIZE: u32 = 10;

// Person search request body
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchRequest {
    pub dataset: String,
    pub size: u32,
    pub pretty: bool,
    pub sql: String,
}

impl SearchRequest {
    /// Wrap an SQL search expression in the fixed search configuration.
    pub fn sql(search_query: impl Into<String>) -> Self {
        Self {
            dataset: SEARCH_DATASET.to_string(),
            size: SEARCH_SIZE,
            pretty: true,
            sql: search_query.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SearchResponse {
    pub status: u16,
    #[serde(default)]
    pub data: Vec<RawRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Server supplied error text, or an empty string.
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

/// The record's own identifier, when it has a non-empty string one.
pub fn record_id(record: &RawRecord) -> Option<&str> {
    record
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}
