#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use askpm_core::records::{
    Allocation, Invoice, LateProject, ProjectDetails, ProjectRevenue, RevenueSummary,
};
use askpm_core::store::{ProjectStore, StoreError};

/// In-memory store that records every operation issued against it.
pub struct FakeStore {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub late: Vec<LateProject>,
    pub details: Option<ProjectDetails>,
    pub revenue: RevenueSummary,
    pub revenue_by_project: Option<ProjectRevenue>,
    pub allocations: Vec<Allocation>,
    pub invoices: Vec<Invoice>,
    /// When set, every operation fails as if the database were unreachable.
    pub unreachable: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            late: Vec::new(),
            details: None,
            revenue: RevenueSummary {
                active_projects: 0,
                total_revenue: 0.0,
                average_revenue: 0.0,
            },
            revenue_by_project: None,
            allocations: Vec::new(),
            invoices: Vec::new(),
            unreachable: false,
        }
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().expect("call log lock").clone()
    }

    fn record(&self, call: String) -> Result<(), StoreError> {
        self.calls.lock().expect("call log lock").push(call);
        if self.unreachable {
            Err(StoreError::Timeout(Duration::from_secs(1)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProjectStore for FakeStore {
    async fn late_projects(&self) -> Result<Vec<LateProject>, StoreError> {
        self.record("late_projects".to_string())?;
        Ok(self.late.clone())
    }

    async fn project_details(
        &self,
        project_code: i32,
    ) -> Result<Option<ProjectDetails>, StoreError> {
        self.record(format!("project_details({project_code})"))?;
        Ok(self.details.clone())
    }

    async fn aggregate_revenue(&self) -> Result<RevenueSummary, StoreError> {
        self.record("aggregate_revenue".to_string())?;
        Ok(self.revenue.clone())
    }

    async fn project_revenue(
        &self,
        project_code: i32,
    ) -> Result<Option<ProjectRevenue>, StoreError> {
        self.record(format!("project_revenue({project_code})"))?;
        Ok(self.revenue_by_project.clone())
    }

    async fn allocations(&self, project_code: i32) -> Result<Vec<Allocation>, StoreError> {
        self.record(format!("allocations({project_code})"))?;
        Ok(self.allocations.clone())
    }

    async fn invoices(&self, project_code: i32) -> Result<Vec<Invoice>, StoreError> {
        self.record(format!("invoices({project_code})"))?;
        Ok(self.invoices.clone())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn sample_late_project(project_id: i32, days_late: i32) -> LateProject {
    LateProject {
        project_id,
        project_name: format!("Project {project_id}"),
        owner: Some("Ana".to_string()),
        due_date: date(2026, 1, 15),
        days_late,
        total_revenue: 125_000.0,
    }
}

pub fn sample_details(project_id: i32) -> ProjectDetails {
    ProjectDetails {
        project_id,
        project_name: format!("Project {project_id}"),
        owner: Some("Ana".to_string()),
        started_at: Some(date(2025, 6, 1)),
        due_date: date(2026, 3, 31),
        is_active: true,
        days_late: -12,
        total_revenue: 98_000.0,
        invoiced_revenue: 40_000.0,
    }
}

pub fn sample_project_revenue(project_id: i32) -> ProjectRevenue {
    ProjectRevenue {
        project_id,
        project_name: format!("Project {project_id}"),
        total_revenue: 98_000.0,
        paid_revenue: 30_000.0,
        scheduled_revenue: 10_000.0,
    }
}

pub fn sample_allocation(staff_name: &str) -> Allocation {
    Allocation {
        staff_name: staff_name.to_string(),
        allocated_hours: 120.0,
        worked_hours: 87.5,
    }
}

pub fn sample_invoice(description: &str) -> Invoice {
    Invoice {
        description: description.to_string(),
        amount: 15_000.0,
        invoiced_at: date(2026, 2, 10),
        status: "Paid".to_string(),
    }
}
