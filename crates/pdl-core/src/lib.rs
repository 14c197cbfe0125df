//! # pdl-core
//!
//! Core library for People Data Labs person search.
//!
//! This crate builds person search queries, sends them to the PDL API,
//! narrows each returned record to a fixed schema and writes the results
//! to JSON files. The `pdl-cli` binary is a thin shell around it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pdl_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> pdl_core::Result<()> {
//!     let client = PdlClient::with_api_key(DEFAULT_BASE_URL.to_string(), api_key)?;
//!     let executor = QueryExecutor::new(client, ResultWriter::new("data"));
//!
//!     let mut query = PersonQuery::new();
//!     query.add_username("github", "octocat")?;
//!     query.add_email("octocat@github.com")?;
//!
//!     let records = executor.execute(&query).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           API Layer                 │  HTTP client, request/response models
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  Query builder, schema, executor
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  Configuration, result files
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  Validation, case conversion, logging
//! └─────────────────────────────────────┘
//! ```

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::api::client::{DEFAULT_BASE_URL, PdlClient, SearchBackend};
    pub use crate::api::models::{RawRecord, SearchRequest, SearchResponse};

    pub use crate::core::network::SocialNetwork;
    pub use crate::core::person_query::PersonQuery;
    pub use crate::core::query::Query;
    pub use crate::core::schema::{PersonRecord, narrow_person};
    pub use crate::core::services::query_executor::QueryExecutor;

    pub use crate::storage::config::{Config, ConfigOverrides, Settings};
    pub use crate::storage::output::ResultWriter;

    pub use crate::utils::logging::{LogLevel, init_logger};
}

/// API layer - PDL HTTP client and wire models.
pub mod api;

/// Business logic layer - query building, narrowing and execution.
///
/// - [`core::person_query`]: person query builder
/// - [`core::schema`]: record narrowing
/// - [`core::services::query_executor`]: send, validate, persist
pub mod core;

/// Storage layer - configuration and result files.
pub mod storage;

/// Utilities layer - shared helpers.
pub mod utils;

/// Error handling - hierarchical error system.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
