//! Keyword question-answering pipeline over the project database.
//!
//! Free text goes in, a typed Success/Failure envelope comes out:
//! [`interpret`] classifies the question by weighted keyword matching and
//! extracts an optional project code; [`dispatch`] routes the
//! interpretation to one of six fixed retrieval operations and normalizes
//! the outcome into an [`Envelope`] the rendering layer can consume as-is.

pub mod agents;
pub mod dispatch;
pub mod envelope;
pub mod records;
pub mod sql;
pub mod store;

pub use agents::{interpret, Intent, Interpretation};
pub use dispatch::dispatch;
pub use envelope::{DispatchError, Envelope, Payload};
