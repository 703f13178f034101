use once_cell::sync::Lazy;
use regex::Regex;

/// First run of 4 to 6 decimal digits on word boundaries.
static PROJECT_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4,6})\b").expect("project code pattern compiles"));

/// Extract a project code from free text. Only the first matching run
/// counts; later runs are ignored. Absence is a normal outcome.
pub fn extract_project_code(question: &str) -> Option<i32> {
    PROJECT_CODE
        .captures(question)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
