use crate::api::client::SearchBackend;
use crate::api::models::{RawRecord, SearchResponse};
use crate::error::{ApiError, SchemaError};
use async_trait::async_trait;
use serde::Serialize;

/// A PDL query: how to render it, send it, and narrow what comes back.
///
/// [`QueryExecutor`](crate::core::services::query_executor::QueryExecutor)
/// drives any implementation through one request/response cycle.
#[async_trait]
pub trait Query: Send + Sync {
    /// Narrowed shape each returned record is parsed into.
    type Record: Serialize + Send;

    /// True once at least one predicate has been added.
    fn has_data(&self) -> bool;

    /// Render the flat SQL search expression.
    fn build_query(&self) -> String;

    /// Output filename for this query, with an optional suffix.
    fn file_name(&self, suffix: &str) -> String;

    /// Narrow one raw record.
    fn parse(&self, raw: &RawRecord) -> Result<Self::Record, SchemaError>;

    /// Send the rendered query to the backend.
    async fn send(
        &self,
        backend: &dyn SearchBackend,
        search_query: &str,
    ) -> Result<SearchResponse, ApiError>;
}
