//! PostgreSQL-backed store. The connection is established lazily on first
//! use and memoized for the process lifetime; the connection task runs in
//! the background.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls, Row};

use crate::records::{
    Allocation, Invoice, LateProject, ProjectDetails, ProjectRevenue, RevenueSummary,
};
use crate::sql;

use super::{ProjectStore, StoreConfig, StoreError};

pub struct PgStore {
    config: StoreConfig,
    client: OnceCell<Client>,
}

impl PgStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> Result<&Client, StoreError> {
        self.client
            .get_or_try_init(|| async {
                let (client, connection) =
                    tokio_postgres::connect(&self.config.database_url, NoTls)
                        .await
                        .map_err(StoreError::Connect)?;

                tokio::spawn(async move {
                    if let Err(e) = connection.await {
                        tracing::error!("db connection error: {e}");
                    }
                });

                tracing::info!("connected to project database");
                Ok(client)
            })
            .await
    }

    async fn query(
        &self,
        statement: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<Row>, StoreError> {
        let client = self.client().await?;
        match tokio::time::timeout(self.config.query_timeout, client.query(statement, params))
            .await
        {
            Ok(rows) => Ok(rows?),
            Err(_) => Err(StoreError::Timeout(self.config.query_timeout)),
        }
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn late_projects(&self) -> Result<Vec<LateProject>, StoreError> {
        let rows = self.query(sql::LATE_PROJECTS, &[]).await?;
        rows.iter()
            .map(|row| late_project(row).map_err(StoreError::Query))
            .collect()
    }

    async fn project_details(
        &self,
        project_code: i32,
    ) -> Result<Option<ProjectDetails>, StoreError> {
        let rows = self.query(sql::PROJECT_DETAILS, &[&project_code]).await?;
        rows.first()
            .map(|row| project_details(row).map_err(StoreError::Query))
            .transpose()
    }

    async fn aggregate_revenue(&self) -> Result<RevenueSummary, StoreError> {
        let rows = self.query(sql::AGGREGATE_REVENUE, &[]).await?;
        match rows.first() {
            Some(row) => revenue_summary(row).map_err(StoreError::Query),
            // an aggregate with no GROUP BY always yields one row
            None => Ok(RevenueSummary {
                active_projects: 0,
                total_revenue: 0.0,
                average_revenue: 0.0,
            }),
        }
    }

    async fn project_revenue(
        &self,
        project_code: i32,
    ) -> Result<Option<ProjectRevenue>, StoreError> {
        let rows = self.query(sql::PROJECT_REVENUE, &[&project_code]).await?;
        rows.first()
            .map(|row| project_revenue(row).map_err(StoreError::Query))
            .transpose()
    }

    async fn allocations(&self, project_code: i32) -> Result<Vec<Allocation>, StoreError> {
        let rows = self.query(sql::ALLOCATIONS, &[&project_code]).await?;
        rows.iter()
            .map(|row| allocation(row).map_err(StoreError::Query))
            .collect()
    }

    async fn invoices(&self, project_code: i32) -> Result<Vec<Invoice>, StoreError> {
        let rows = self.query(sql::INVOICES, &[&project_code]).await?;
        rows.iter()
            .map(|row| invoice(row).map_err(StoreError::Query))
            .collect()
    }
}

fn late_project(row: &Row) -> Result<LateProject, tokio_postgres::Error> {
    Ok(LateProject {
        project_id: row.try_get("project_id")?,
        project_name: row.try_get("project_name")?,
        owner: row.try_get("owner")?,
        due_date: row.try_get("due_date")?,
        days_late: row.try_get("days_late")?,
        total_revenue: row.try_get("total_revenue")?,
    })
}

fn project_details(row: &Row) -> Result<ProjectDetails, tokio_postgres::Error> {
    Ok(ProjectDetails {
        project_id: row.try_get("project_id")?,
        project_name: row.try_get("project_name")?,
        owner: row.try_get("owner")?,
        started_at: row.try_get("started_at")?,
        due_date: row.try_get("due_date")?,
        is_active: row.try_get("is_active")?,
        days_late: row.try_get("days_late")?,
        total_revenue: row.try_get("total_revenue")?,
        invoiced_revenue: row.try_get("invoiced_revenue")?,
    })
}

fn revenue_summary(row: &Row) -> Result<RevenueSummary, tokio_postgres::Error> {
    Ok(RevenueSummary {
        active_projects: row.try_get("active_projects")?,
        total_revenue: row.try_get("total_revenue")?,
        average_revenue: row.try_get("average_revenue")?,
    })
}

fn project_revenue(row: &Row) -> Result<ProjectRevenue, tokio_postgres::Error> {
    Ok(ProjectRevenue {
        project_id: row.try_get("project_id")?,
        project_name: row.try_get("project_name")?,
        total_revenue: row.try_get("total_revenue")?,
        paid_revenue: row.try_get("paid_revenue")?,
        scheduled_revenue: row.try_get("scheduled_revenue")?,
    })
}

fn allocation(row: &Row) -> Result<Allocation, tokio_postgres::Error> {
    Ok(Allocation {
        staff_name: row.try_get("staff_name")?,
        allocated_hours: row.try_get("allocated_hours")?,
        worked_hours: row.try_get("worked_hours")?,
    })
}

fn invoice(row: &Row) -> Result<Invoice, tokio_postgres::Error> {
    Ok(Invoice {
        description: row.try_get("description")?,
        amount: row.try_get("amount")?,
        invoiced_at: row.try_get("invoiced_at")?,
        status: row.try_get("status")?,
    })
}
