use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The closed set of question intents. Declaration order in [`REGISTRY`] is
/// the tie-break priority: on equal scores the earliest intent wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    ProjectsLate,
    ProjectQuery,
    RevenueQuery,
    InvoiceQuery,
    AllocationQuery,
}

/// Trigger configuration for one intent.
#[derive(Debug, Clone, Copy)]
pub struct IntentSpec {
    pub intent: Intent,
    /// Matched as lower-case substrings of the question.
    pub keywords: &'static [&'static str],
    /// Added once per keyword present, regardless of how often it repeats.
    pub weight: u32,
}

/// Process-wide intent configuration. The question corpus is Portuguese, so
/// the trigger keywords are too.
pub const REGISTRY: &[IntentSpec] = &[
    IntentSpec {
        intent: Intent::ProjectsLate,
        keywords: &["atrasado", "atrasados", "atraso", "pendente", "vencido"],
        weight: 3,
    },
    IntentSpec {
        intent: Intent::ProjectQuery,
        keywords: &["projeto", "status", "situação", "andamento"],
        weight: 1,
    },
    IntentSpec {
        intent: Intent::RevenueQuery,
        keywords: &["receita", "faturamento", "valor", "quanto"],
        weight: 2,
    },
    IntentSpec {
        intent: Intent::InvoiceQuery,
        keywords: &["fatura", "pagamento", "pago", "programado"],
        weight: 2,
    },
    IntentSpec {
        intent: Intent::AllocationQuery,
        keywords: &["alocação", "equipe", "time", "quem está", "pessoas", "alocado", "trabalha"],
        weight: 2,
    },
];

/// Score every registered intent against a question. Every intent gets an
/// entry, zero when nothing matched; iteration order follows [`REGISTRY`].
pub fn score_question(question: &str) -> IndexMap<Intent, u32> {
    let lowered = question.to_lowercase();
    let mut scores = IndexMap::with_capacity(REGISTRY.len());

    for spec in REGISTRY {
        let matched = spec
            .keywords
            .iter()
            .filter(|keyword| lowered.contains(**keyword))
            .count() as u32;
        scores.insert(spec.intent, matched * spec.weight);
    }

    scores
}

/// Classify a question. The strictly highest score wins; an all-zero score
/// map means the question was not recognized, which is a normal outcome
/// rather than an error.
pub fn detect_intent(question: &str) -> Option<Intent> {
    let scores = score_question(question);

    let mut best: Option<(Intent, u32)> = None;
    for (&intent, &score) in &scores {
        match best {
            Some((_, leader)) if score <= leader => {}
            _ => best = Some((intent, score)),
        }
    }

    best.filter(|&(_, score)| score > 0).map(|(intent, _)| intent)
}
