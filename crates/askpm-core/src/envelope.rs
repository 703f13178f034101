//! The uniform Success/Failure envelope handed to the rendering layer, and
//! the failure taxonomy behind it. Every retrieval outcome is normalized
//! here; the renderer never sees raw store errors or empty markers.

use serde::Serialize;
use thiserror::Error;

use crate::records::{
    Allocation, Invoice, LateProject, ProjectDetails, ProjectRevenue, RevenueSummary,
};
use crate::store::StoreError;

/// Typed payloads, one shape per retrieval operation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Payload {
    LateProjects(Vec<LateProject>),
    Project(ProjectDetails),
    Revenue(RevenueSummary),
    ProjectRevenue(ProjectRevenue),
    Allocations(Vec<Allocation>),
    Invoices(Vec<Invoice>),
}

/// Why a dispatch produced no data. "Not found" outcomes are deliberately
/// distinct from [`DispatchError::Store`] so callers can tell a recoverable
/// empty answer from an unreachable database.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("intent not recognized")]
    UnrecognizedIntent,

    #[error("project code not specified")]
    MissingProjectCode,

    #[error("project not found")]
    ProjectNotFound,

    #[error("no allocations")]
    NoAllocations,

    #[error("no invoices")]
    NoInvoices,

    #[error("data store unavailable: {0}")]
    Store(#[from] StoreError),
}

impl DispatchError {
    /// Stable machine-readable tag for the failure, for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::UnrecognizedIntent => "unrecognized_intent",
            DispatchError::MissingProjectCode => "missing_project_code",
            DispatchError::ProjectNotFound => "project_not_found",
            DispatchError::NoAllocations => "no_allocations",
            DispatchError::NoInvoices => "no_invoices",
            DispatchError::Store(_) => "store_unavailable",
        }
    }
}

/// Tagged outcome of one dispatched question.
#[derive(Debug)]
pub enum Envelope {
    Success(Payload),
    Failure(DispatchError),
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    /// Promote an at-most-one-row result, treating absence as `missing`.
    pub(crate) fn single<T>(
        row: Option<T>,
        missing: DispatchError,
        payload: impl FnOnce(T) -> Payload,
    ) -> Envelope {
        match row {
            Some(row) => Envelope::Success(payload(row)),
            None => Envelope::Failure(missing),
        }
    }

    /// Promote a row set that must not be empty for its intent.
    pub(crate) fn non_empty<T>(
        rows: Vec<T>,
        empty: DispatchError,
        payload: impl FnOnce(Vec<T>) -> Payload,
    ) -> Envelope {
        if rows.is_empty() {
            Envelope::Failure(empty)
        } else {
            Envelope::Success(payload(rows))
        }
    }
}
