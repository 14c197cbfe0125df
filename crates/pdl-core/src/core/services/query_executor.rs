use crate::AppError;
use crate::api::client::SearchBackend;
use crate::api::models::{RawRecord, record_id};
use crate::core::query::Query;
use crate::error::{ApiError, QueryError};
use crate::storage::output::ResultWriter;

/// Runs a [`Query`] end to end: send, check status, narrow, persist.
pub struct QueryExecutor<B: SearchBackend> {
    backend: B,
    writer: ResultWriter,
}

impl<B: SearchBackend> QueryExecutor<B> {
    /// Create new QueryExecutor instance
    pub fn new(backend: B, writer: ResultWriter) -> Self {
        Self { backend, writer }
    }

    /// Execute the query and write the results to json files.
    ///
    /// The raw batch goes to `<name>.full.json` first, then each narrowed
    /// record to `<name>.<record id>.json` in response order. A record that
    /// fails narrowing aborts the run. Returns the raw batch.
    pub async fn execute<Q>(&self, query: &Q) -> Result<Vec<RawRecord>, AppError>
    where
        Q: Query + ?Sized,
    {
        if !query.has_data() {
            return Err(QueryError::EmptyQuery.into());
        }

        let search_query = query.build_query();
        log::debug!("Sending PDL query: {}", search_query);

        let response = query.send(&self.backend, &search_query).await?;

        if !response.is_success() {
            return Err(ApiError::RequestFailed {
                status: response.status,
                message: response.error_message(),
            }
            .into());
        }

        log::debug!(
            "PDL returned {} record(s) of {} total",
            response.data.len(),
            response.total.unwrap_or(response.data.len() as u64)
        );

        self.writer
            .write_json(&query.file_name("full"), &response.data)
            .await?;

        for (index, record) in response.data.iter().enumerate() {
            let narrowed = query.parse(record)?;
            let suffix = record_suffix(record, index);
            self.writer
                .write_json(&query.file_name(&suffix), &narrowed)
                .await?;
        }

        Ok(response.data)
    }
}

// Records without an id fall back to their 1-based position.
fn record_suffix(record: &RawRecord, index: usize) -> String {
    match record_id(record) {
        Some(id) => id.replace(['/', '\\'], "_"),
        None => format!("record-{}", index + 1),
    }
}
