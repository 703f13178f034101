//! Single-step dispatch: route an [`Interpretation`] to one of the six
//! retrieval operations, enforcing per-intent parameter preconditions and
//! the per-intent emptiness policy.

use crate::agents::{Intent, Interpretation};
use crate::envelope::{DispatchError, Envelope, Payload};
use crate::store::{ProjectStore, StoreError};

/// Dispatch an interpretation against the store. Issues at most one store
/// round trip; precondition failures and unrecognized intents issue none.
/// Store faults come back as a distinct `Failure` kind, never a panic.
pub async fn dispatch<S>(store: &S, interpretation: &Interpretation) -> Envelope
where
    S: ProjectStore + ?Sized,
{
    match route(store, interpretation).await {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(question = %interpretation.question, "store failure: {err}");
            Envelope::Failure(DispatchError::Store(err))
        }
    }
}

async fn route<S>(store: &S, interpretation: &Interpretation) -> Result<Envelope, StoreError>
where
    S: ProjectStore + ?Sized,
{
    let Some(intent) = interpretation.intent else {
        return Ok(Envelope::Failure(DispatchError::UnrecognizedIntent));
    };
    let code = interpretation.project_code;

    let envelope = match intent {
        // zero late projects is a meaningful answer, so empty stays Success
        Intent::ProjectsLate => {
            Envelope::Success(Payload::LateProjects(store.late_projects().await?))
        }

        Intent::ProjectQuery => {
            let Some(code) = code else {
                return Ok(missing_code());
            };
            Envelope::single(
                store.project_details(code).await?,
                DispatchError::ProjectNotFound,
                Payload::Project,
            )
        }

        // without a project code this falls back to the portfolio aggregate
        Intent::RevenueQuery => match code {
            Some(code) => Envelope::single(
                store.project_revenue(code).await?,
                DispatchError::ProjectNotFound,
                Payload::ProjectRevenue,
            ),
            None => Envelope::Success(Payload::Revenue(store.aggregate_revenue().await?)),
        },

        Intent::AllocationQuery => {
            let Some(code) = code else {
                return Ok(missing_code());
            };
            Envelope::non_empty(
                store.allocations(code).await?,
                DispatchError::NoAllocations,
                Payload::Allocations,
            )
        }

        Intent::InvoiceQuery => {
            let Some(code) = code else {
                return Ok(missing_code());
            };
            Envelope::non_empty(
                store.invoices(code).await?,
                DispatchError::NoInvoices,
                Payload::Invoices,
            )
        }
    };

    Ok(envelope)
}

fn missing_code() -> Envelope {
    Envelope::Failure(DispatchError::MissingProjectCode)
}
