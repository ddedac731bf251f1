use super::{Severity, ValidationIssue, ValidationPolicy};
use crate::assessment::domain::{AnswerSet, CompanyProfile, Declared, LocationRecord, TaskRecord};

// Point allocation across input buckets; a bucket with no data earns zero.
const COMPANY_POINTS: f64 = 25.0;
const LOCATION_POINTS: f64 = 25.0;
const ANSWER_POINTS: f64 = 30.0;
const TASK_POINTS: f64 = 20.0;

const COMPANY_FIELDS: f64 = 4.0;
const LOCATION_FIELDS: f64 = 3.0;

fn declared_present<T>(value: &Option<Declared<T>>) -> bool {
    match value {
        None => false,
        Some(Declared::Known(_)) => true,
        Some(Declared::Other(raw)) => !raw.is_empty(),
    }
}

/// Fraction of expected input fields actually populated, expressed 0-100.
pub(crate) fn completeness(
    company: &CompanyProfile,
    locations: &[LocationRecord],
    answers: &AnswerSet,
    tasks: &[TaskRecord],
) -> f64 {
    let total_points = COMPANY_POINTS + LOCATION_POINTS + ANSWER_POINTS + TASK_POINTS;
    let mut earned = 0.0;

    let mut company_fields = 0usize;
    if !company.name.is_empty() {
        company_fields += 1;
    }
    if declared_present(&company.sector) {
        company_fields += 1;
    }
    if company.employees.is_some_and(|count| count != 0) {
        company_fields += 1;
    }
    if company.established_year.is_some_and(|year| year != 0) {
        company_fields += 1;
    }
    earned += company_fields as f64 / COMPANY_FIELDS * COMPANY_POINTS;

    if !locations.is_empty() {
        let filled: f64 = locations
            .iter()
            .map(|location| {
                let mut fields = 0usize;
                if !location.name.is_empty() {
                    fields += 1;
                }
                if location.total_floor_area.is_some_and(|area| area != 0.0) {
                    fields += 1;
                }
                if !location.utilities.is_empty() {
                    fields += 1;
                }
                fields as f64 / LOCATION_FIELDS
            })
            .sum();
        earned += filled / locations.len() as f64 * LOCATION_POINTS;
    }

    if !answers.is_empty() {
        let answered = answers.values().filter(|record| record.is_answered()).count();
        earned += answered as f64 / answers.len() as f64 * ANSWER_POINTS;
    }

    if !tasks.is_empty() {
        let complete = tasks
            .iter()
            .filter(|task| {
                !task.title.is_empty()
                    && declared_present(&task.category)
                    && declared_present(&task.status)
            })
            .count();
        earned += complete as f64 / tasks.len() as f64 * TASK_POINTS;
    }

    earned / total_points * 100.0
}

/// Completeness adjusted downward for detected issues, clamped to 0-100.
pub(crate) fn quality(
    policy: &ValidationPolicy,
    issues: &[ValidationIssue],
    completeness_score: f64,
) -> f64 {
    let mut score = completeness_score;
    for issue in issues {
        score -= match issue.severity {
            Severity::Error => policy.error_penalty,
            Severity::Warning => policy.warning_penalty,
            Severity::Info => policy.info_penalty,
        };
    }
    score.clamp(0.0, 100.0)
}
