use askpm_core::envelope::{DispatchError, Payload};
use askpm_core::records::RevenueSummary;
use askpm_core::Intent;
use serde_json::json;

#[test]
fn intents_serialize_with_their_registry_names() {
    let cases = [
        (Intent::ProjectsLate, "PROJECTS_LATE"),
        (Intent::ProjectQuery, "PROJECT_QUERY"),
        (Intent::RevenueQuery, "REVENUE_QUERY"),
        (Intent::InvoiceQuery, "INVOICE_QUERY"),
        (Intent::AllocationQuery, "ALLOCATION_QUERY"),
    ];
    for (intent, name) in cases {
        assert_eq!(serde_json::to_value(intent).expect("serialize"), json!(name));
    }
}

#[test]
fn payloads_are_tagged_by_kind() {
    let payload = Payload::Revenue(RevenueSummary {
        active_projects: 3,
        total_revenue: 1000.0,
        average_revenue: 333.25,
    });

    assert_eq!(
        serde_json::to_value(&payload).expect("serialize"),
        json!({
            "kind": "revenue",
            "data": {
                "active_projects": 3,
                "total_revenue": 1000.0,
                "average_revenue": 333.25,
            }
        })
    );
}

#[test]
fn failure_kinds_and_messages_are_stable() {
    let cases: [(DispatchError, &str, &str); 5] = [
        (
            DispatchError::UnrecognizedIntent,
            "unrecognized_intent",
            "intent not recognized",
        ),
        (
            DispatchError::MissingProjectCode,
            "missing_project_code",
            "project code not specified",
        ),
        (
            DispatchError::ProjectNotFound,
            "project_not_found",
            "project not found",
        ),
        (DispatchError::NoAllocations, "no_allocations", "no allocations"),
        (DispatchError::NoInvoices, "no_invoices", "no invoices"),
    ];
    for (error, kind, message) in cases {
        assert_eq!(error.kind(), kind);
        assert_eq!(error.to_string(), message);
    }
}
