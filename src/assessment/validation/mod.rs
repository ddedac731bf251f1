//! Input audit for assessment generation.
//!
//! The validator never rejects: every problem in the business data becomes a
//! [`ValidationIssue`], accumulated in order across company, locations,
//! answers, tasks, and cross-source consistency. Callers branch on
//! [`ValidationResult::is_valid`] before treating the other engine outputs
//! as authoritative.

mod checks;
mod scores;

pub(crate) use scores::{completeness, quality};

use serde::{Deserialize, Serialize};

use super::domain::{AnswerSet, CompanyProfile, LocationRecord, TaskRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Critical, blocks trustworthy reporting.
    Error,
    /// Important, degrades data quality.
    Warning,
    /// Minor, informational only.
    Info,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A single finding against the input data. `field` is a dotted path into
/// the offending record (`locations[0].totalFloorArea`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    pub(crate) fn new(
        severity: Severity,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
            value: None,
            suggestion: None,
        }
    }

    pub(crate) fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, field, message)
    }

    pub(crate) fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, field, message)
    }

    pub(crate) fn info(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, field, message)
    }

    pub(crate) fn with_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub(crate) fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Issue counts by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub total_issues: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

/// Outcome of a validation pass. Scores are full precision; the report views
/// round them for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub completeness_score: f64,
    pub quality_score: f64,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn summary(&self) -> IssueSummary {
        let errors = self.count(Severity::Error);
        let warnings = self.count(Severity::Warning);
        let info = self.count(Severity::Info);
        IssueSummary {
            total_issues: self.issues.len(),
            errors,
            warnings,
            info,
        }
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

/// Thresholds and penalties backing validation. Undocumented policy choices
/// from the assessment methodology are preserved here as named fields rather
/// than re-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub established_year_min: i32,
    /// Fixed cutoff year; the engine owns no clock.
    pub established_year_max: i32,
    /// Floor areas above this (in sqm) are flagged as implausible.
    pub max_plausible_floor_area: f64,
    pub min_area_per_employee: f64,
    pub max_area_per_employee: f64,
    /// Unanswered fraction above which an aggregate warning fires.
    pub unanswered_warning_ratio: f64,
    /// Task completion percentage below which an informational flag fires.
    pub low_completion_rate: f64,
    /// Minimum completeness score for `is_valid`.
    pub validity_threshold: f64,
    pub error_penalty: f64,
    pub warning_penalty: f64,
    pub info_penalty: f64,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            established_year_min: 1900,
            established_year_max: 2024,
            max_plausible_floor_area: 1_000_000.0,
            min_area_per_employee: 5.0,
            max_area_per_employee: 100.0,
            unanswered_warning_ratio: 0.5,
            low_completion_rate: 30.0,
            validity_threshold: 60.0,
            error_penalty: 10.0,
            warning_penalty: 3.0,
            info_penalty: 1.0,
        }
    }
}

/// Standalone validator over an owned policy. [`crate::AssessmentEngine`]
/// delegates here with the policy from its configuration.
#[derive(Debug, Clone, Default)]
pub struct DataValidator {
    policy: ValidationPolicy,
}

impl DataValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn validate(
        &self,
        company: &CompanyProfile,
        locations: &[LocationRecord],
        answers: &AnswerSet,
        tasks: &[TaskRecord],
    ) -> ValidationResult {
        validate(&self.policy, company, locations, answers, tasks)
    }
}

pub(crate) fn validate(
    policy: &ValidationPolicy,
    company: &CompanyProfile,
    locations: &[LocationRecord],
    answers: &AnswerSet,
    tasks: &[TaskRecord],
) -> ValidationResult {
    let mut issues = Vec::new();

    checks::check_company(policy, company, &mut issues);
    checks::check_locations(policy, locations, &mut issues);
    checks::check_answers(policy, answers, &mut issues);
    checks::check_tasks(policy, tasks, &mut issues);
    checks::check_consistency(policy, company, locations, answers, tasks, &mut issues);

    let completeness_score = completeness(company, locations, answers, tasks);
    let quality_score = quality(policy, &issues, completeness_score);

    let errors = issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count();
    let is_valid = errors == 0 && completeness_score >= policy.validity_threshold;

    tracing::debug!(
        issues = issues.len(),
        errors,
        completeness = completeness_score,
        quality = quality_score,
        is_valid,
        "validation pass complete"
    );

    ValidationResult {
        is_valid,
        completeness_score,
        quality_score,
        issues,
    }
}
