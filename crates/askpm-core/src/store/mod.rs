//! The data-store boundary: the six read operations the dispatcher can
//! issue, their error taxonomy, and connection configuration.

pub mod cache;
pub mod postgres;

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use thiserror::Error;

use crate::records::{
    Allocation, Invoice, LateProject, ProjectDetails, ProjectRevenue, RevenueSummary,
};

pub use cache::CachedStore;
pub use postgres::PgStore;

/// Infrastructure failures below the dispatch boundary. "Row not found" is
/// not a store error; the dispatcher decides what emptiness means per
/// intent.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Connect(#[source] tokio_postgres::Error),

    #[error("query failed: {0}")]
    Query(#[from] tokio_postgres::Error),

    #[error("query timed out after {0:?}")]
    Timeout(Duration),
}

/// The six read-only operations over the project database. Object-safe so
/// callers can layer wrappers (caching, fakes in tests) without caring
/// about the backend.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn late_projects(&self) -> Result<Vec<LateProject>, StoreError>;
    async fn project_details(&self, project_code: i32)
        -> Result<Option<ProjectDetails>, StoreError>;
    async fn aggregate_revenue(&self) -> Result<RevenueSummary, StoreError>;
    async fn project_revenue(&self, project_code: i32)
        -> Result<Option<ProjectRevenue>, StoreError>;
    async fn allocations(&self, project_code: i32) -> Result<Vec<Allocation>, StoreError>;
    async fn invoices(&self, project_code: i32) -> Result<Vec<Invoice>, StoreError>;
}

/// Connection settings, read from the environment at process start.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database_url: String,
    /// Upper bound on any single query round trip. A hung query fails with
    /// [`StoreError::Timeout`] instead of blocking the interaction.
    pub query_timeout: Duration,
}

impl StoreConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let query_timeout = std::env::var("QUERY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            query_timeout: Duration::from_secs(query_timeout),
        })
    }
}
