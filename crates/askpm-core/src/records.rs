//! Typed row schemas, one per retrieval operation. The rendering layer only
//! ever sees these shapes inside a Success envelope, never raw rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// One overdue project from the late-projects query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateProject {
    pub project_id: i32,
    pub project_name: String,
    pub owner: Option<String>, // LEFT JOIN: a project may have no owner
    pub due_date: NaiveDate,
    pub days_late: i32,
    pub total_revenue: f64,
}

// Full detail row for a single project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub project_id: i32,
    pub project_name: String,
    pub owner: Option<String>,
    pub started_at: Option<NaiveDate>,
    pub due_date: NaiveDate,
    pub is_active: bool,
    /// Negative while the project is still ahead of its due date.
    pub days_late: i32,
    pub total_revenue: f64,
    /// Revenue already invoiced (paid or scheduled payments).
    pub invoiced_revenue: f64,
}

// Portfolio-wide revenue aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub active_projects: i64,
    pub total_revenue: f64,
    pub average_revenue: f64,
}

// Revenue for one project, broken out by invoice status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRevenue {
    pub project_id: i32,
    pub project_name: String,
    pub total_revenue: f64,
    pub paid_revenue: f64,
    pub scheduled_revenue: f64,
}

// Hours for one staff member on one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub staff_name: String,
    pub allocated_hours: f64,
    pub worked_hours: f64,
}

// One invoice line for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub description: String,
    pub amount: f64,
    pub invoiced_at: NaiveDate,
    pub status: String, // 'Paid' | 'Scheduled' | 'Pending'
}
