//! Read-through TTL cache over a store, so repeated identical questions
//! within the window do not issue redundant round trips.

use std::time::Duration;

use async_trait::async_trait;
use moka::sync::Cache;

use crate::records::{
    Allocation, Invoice, LateProject, ProjectDetails, ProjectRevenue, RevenueSummary,
};
use crate::sql;

use super::{ProjectStore, StoreError};

/// Cached results, one variant per operation. Failures are never cached.
#[derive(Debug, Clone)]
enum Cached {
    LateProjects(Vec<LateProject>),
    ProjectDetails(Option<ProjectDetails>),
    Revenue(RevenueSummary),
    ProjectRevenue(Option<ProjectRevenue>),
    Allocations(Vec<Allocation>),
    Invoices(Vec<Invoice>),
}

/// Wraps any [`ProjectStore`], keyed by the exact query text plus the bound
/// project code. Entries expire by wall clock only; nothing invalidates
/// them when the underlying data changes.
pub struct CachedStore<S> {
    inner: S,
    cache: Cache<String, Cached>,
}

impl<S> CachedStore<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::builder().time_to_live(ttl).build(),
        }
    }
}

fn keyed(statement: &str, project_code: i32) -> String {
    format!("{statement}#{project_code}")
}

#[async_trait]
impl<S: ProjectStore> ProjectStore for CachedStore<S> {
    async fn late_projects(&self) -> Result<Vec<LateProject>, StoreError> {
        let key = sql::LATE_PROJECTS.to_string();
        if let Some(Cached::LateProjects(rows)) = self.cache.get(&key) {
            return Ok(rows);
        }
        let rows = self.inner.late_projects().await?;
        self.cache.insert(key, Cached::LateProjects(rows.clone()));
        Ok(rows)
    }

    async fn project_details(
        &self,
        project_code: i32,
    ) -> Result<Option<ProjectDetails>, StoreError> {
        let key = keyed(sql::PROJECT_DETAILS, project_code);
        if let Some(Cached::ProjectDetails(row)) = self.cache.get(&key) {
            return Ok(row);
        }
        let row = self.inner.project_details(project_code).await?;
        self.cache.insert(key, Cached::ProjectDetails(row.clone()));
        Ok(row)
    }

    async fn aggregate_revenue(&self) -> Result<RevenueSummary, StoreError> {
        let key = sql::AGGREGATE_REVENUE.to_string();
        if let Some(Cached::Revenue(summary)) = self.cache.get(&key) {
            return Ok(summary);
        }
        let summary = self.inner.aggregate_revenue().await?;
        self.cache.insert(key, Cached::Revenue(summary.clone()));
        Ok(summary)
    }

    async fn project_revenue(
        &self,
        project_code: i32,
    ) -> Result<Option<ProjectRevenue>, StoreError> {
        let key = keyed(sql::PROJECT_REVENUE, project_code);
        if let Some(Cached::ProjectRevenue(row)) = self.cache.get(&key) {
            return Ok(row);
        }
        let row = self.inner.project_revenue(project_code).await?;
        self.cache.insert(key, Cached::ProjectRevenue(row.clone()));
        Ok(row)
    }

    async fn allocations(&self, project_code: i32) -> Result<Vec<Allocation>, StoreError> {
        let key = keyed(sql::ALLOCATIONS, project_code);
        if let Some(Cached::Allocations(rows)) = self.cache.get(&key) {
            return Ok(rows);
        }
        let rows = self.inner.allocations(project_code).await?;
        self.cache.insert(key, Cached::Allocations(rows.clone()));
        Ok(rows)
    }

    async fn invoices(&self, project_code: i32) -> Result<Vec<Invoice>, StoreError> {
        let key = keyed(sql::INVOICES, project_code);
        if let Some(Cached::Invoices(rows)) = self.cache.get(&key) {
            return Ok(rows);
        }
        let rows = self.inner.invoices(project_code).await?;
        self.cache.insert(key, Cached::Invoices(rows.clone()));
        Ok(rows)
    }
}
