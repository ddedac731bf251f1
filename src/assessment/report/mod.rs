//! Report data assembly: metadata, rounded views of every engine output,
//! and prioritized recommendations in one serializable value. Rendering to
//! any document format belongs to the consumer.

mod recommendations;
pub mod views;

pub use recommendations::{Recommendation, RecommendationTopic};

pub(crate) use recommendations::generate as generate_recommendations;
pub use views::{CarbonFootprintView, ComplianceRateView, EsgScoresView, ScoreBand, ValidationView};

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::benchmark::BenchmarkComparison;
use super::domain::{AnswerSet, CompanyProfile, LocationRecord, TaskRecord};
use super::Assessment;
use views::round1;

const UNKNOWN_COMPANY: &str = "Unknown Company";
const UNKNOWN_SECTOR: &str = "unknown";

/// Report header describing what was assessed and how complete the
/// underlying data was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    pub company_name: String,
    pub sector: String,
    pub reporting_period: String,
    pub generated_on: NaiveDate,
    pub frameworks: Vec<String>,
    pub locations_count: usize,
    pub data_completeness: f64,
}

/// The complete assessment report a presentation layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub metadata: ReportMetadata,
    pub validation: ValidationView,
    pub esg_scores: EsgScoresView,
    pub carbon_footprint: CarbonFootprintView,
    pub compliance_rates: Vec<ComplianceRateView>,
    pub benchmark_comparison: BenchmarkComparison,
    pub recommendations: Vec<Recommendation>,
}

/// Sorted union of framework tags across answers and tasks.
pub fn extract_frameworks(answers: &AnswerSet, tasks: &[TaskRecord]) -> Vec<String> {
    let mut frameworks: BTreeSet<&str> = answers
        .values()
        .flat_map(|record| record.frameworks.iter().flatten())
        .map(String::as_str)
        .collect();
    frameworks.extend(
        tasks
            .iter()
            .flat_map(|task| &task.frameworks)
            .map(String::as_str),
    );
    frameworks.into_iter().map(str::to_owned).collect()
}

/// Reporting period label for a date, e.g. `Q3 2026`.
pub fn reporting_period(date: NaiveDate) -> String {
    format!("Q{} {}", (date.month0() / 3) + 1, date.year())
}

pub(crate) fn assemble(
    company: &CompanyProfile,
    locations: &[LocationRecord],
    assessment: &Assessment,
    generated_on: NaiveDate,
) -> AssessmentReport {
    let company_name = if company.name.is_empty() {
        UNKNOWN_COMPANY.to_string()
    } else {
        company.name.clone()
    };
    let sector_label = company
        .known_sector()
        .map_or(UNKNOWN_SECTOR, |sector| sector.label());

    let recommendations = generate_recommendations(
        &assessment.scores,
        &assessment.compliance,
        &assessment.benchmark,
        company.known_sector(),
    );

    AssessmentReport {
        metadata: ReportMetadata {
            company_name,
            sector: sector_label.to_string(),
            reporting_period: reporting_period(generated_on),
            generated_on,
            frameworks: assessment.frameworks.clone(),
            locations_count: locations.len(),
            data_completeness: round1(assessment.validation.completeness_score),
        },
        validation: ValidationView::from_result(&assessment.validation),
        esg_scores: EsgScoresView::from_scores(&assessment.scores),
        carbon_footprint: CarbonFootprintView::from_footprint(&assessment.footprint),
        compliance_rates: assessment
            .compliance
            .iter()
            .map(ComplianceRateView::from_rate)
            .collect(),
        benchmark_comparison: assessment.benchmark,
        recommendations,
    }
}
