//! Interpretation stage: keyword intent classification plus numeric entity
//! extraction, composed into one [`Interpretation`] per question.

pub mod entity;
pub mod intent;

use serde::{Deserialize, Serialize};

pub use entity::extract_project_code;
pub use intent::{detect_intent, score_question, Intent, IntentSpec, REGISTRY};

/// What the interpretation stage understood about one question. Ephemeral:
/// built once per question, consumed by the dispatcher, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretation {
    /// `None` means the question was not recognized.
    pub intent: Option<Intent>,
    pub project_code: Option<i32>,
    pub question: String,
}

/// Interpret a free-text question. Entity extraction runs regardless of
/// whether any intent matched.
pub fn interpret(question: &str) -> Interpretation {
    let interpretation = Interpretation {
        intent: detect_intent(question),
        project_code: extract_project_code(question),
        question: question.to_string(),
    };

    tracing::debug!(
        intent = ?interpretation.intent,
        project_code = ?interpretation.project_code,
        "interpreted question"
    );

    interpretation
}
