//! Sustainability assessment engine: validation, scoring, footprint,
//! compliance, benchmarking, and report assembly over plain input records.

pub mod benchmark;
pub mod compliance;
pub mod domain;
pub mod footprint;
pub mod report;
pub mod scoring;
pub mod validation;

#[cfg(test)]
mod tests;

pub use benchmark::{BenchmarkComparison, BenchmarkTable, PerformanceBand};
pub use compliance::ComplianceRate;
pub use domain::{
    AnswerRecord, AnswerSet, AnswerValue, BusinessSector, CompanyProfile, Declared, EsgCategory,
    LocationRecord, TaskCategory, TaskPriority, TaskRecord, TaskStatus, UtilityKind,
    UtilityReading,
};
pub use footprint::{CarbonFootprint, EmissionFactors};
pub use report::{AssessmentReport, Recommendation, ReportMetadata};
pub use scoring::{EsgScores, SectorWeightTable, SectorWeights};
pub use validation::{
    DataValidator, IssueSummary, Severity, ValidationIssue, ValidationPolicy, ValidationResult,
};

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{ConfigError, EngineConfig};

/// Raw, full-precision outputs of one assessment run. [`AssessmentReport`]
/// is the rounded, presentation-ready projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub validation: ValidationResult,
    pub scores: EsgScores,
    pub footprint: CarbonFootprint,
    pub compliance: Vec<ComplianceRate>,
    pub benchmark: BenchmarkComparison,
    /// Frameworks in scope, the sorted union across answers and tasks.
    pub frameworks: Vec<String>,
}

/// Stateless engine applying the validated static configuration to input
/// records. Holds only read-only tables, so one instance is freely shareable
/// across threads.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    config: EngineConfig,
}

impl AssessmentEngine {
    /// Engine over the built-in tables, which are known to satisfy the
    /// configuration contract.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Engine over a custom configuration. Fails loudly on an invalid static
    /// table instead of producing silently skewed assessments.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Audit the raw inputs. Advisory only: every downstream operation still
    /// produces a best-effort result regardless of the outcome.
    pub fn validate(
        &self,
        company: &CompanyProfile,
        locations: &[LocationRecord],
        answers: &AnswerSet,
        tasks: &[TaskRecord],
    ) -> ValidationResult {
        validation::validate(&self.config.policy, company, locations, answers, tasks)
    }

    /// Weighted ESG category scores combined via sector weights.
    pub fn scores(
        &self,
        answers: &AnswerSet,
        tasks: &[TaskRecord],
        sector: Option<BusinessSector>,
    ) -> EsgScores {
        scoring::score(&self.config.weights, answers, tasks, sector)
    }

    /// Scope 1/2 footprint with per-sqm and per-employee intensities.
    pub fn footprint(
        &self,
        locations: &[LocationRecord],
        company: &CompanyProfile,
    ) -> CarbonFootprint {
        footprint::calculate(&self.config.factors, locations, company)
    }

    /// Completion rate per framework, preserving the given ordering.
    pub fn compliance_rates(
        &self,
        tasks: &[TaskRecord],
        frameworks: &[String],
    ) -> Vec<ComplianceRate> {
        compliance::rates(tasks, frameworks)
    }

    /// Classify computed intensities against the sector benchmark bands.
    pub fn compare_to_benchmarks(
        &self,
        locations: &[LocationRecord],
        footprint: &CarbonFootprint,
        sector: Option<BusinessSector>,
    ) -> BenchmarkComparison {
        benchmark::compare(&self.config.benchmarks, locations, footprint, sector)
    }

    /// Full assessment in dependency order. Never fails; partially onboarded
    /// companies come back flagged by the validation section.
    pub fn assess(
        &self,
        company: &CompanyProfile,
        locations: &[LocationRecord],
        answers: &AnswerSet,
        tasks: &[TaskRecord],
    ) -> Assessment {
        let validation = self.validate(company, locations, answers, tasks);
        let sector = company.known_sector();
        let scores = self.scores(answers, tasks, sector);
        let footprint = self.footprint(locations, company);
        let frameworks = report::extract_frameworks(answers, tasks);
        let compliance = self.compliance_rates(tasks, &frameworks);
        let benchmark = self.compare_to_benchmarks(locations, &footprint, sector);

        tracing::info!(
            company = %company.name,
            is_valid = validation.is_valid,
            overall = scores.overall,
            total_annual = footprint.total_annual,
            "assessment complete"
        );

        Assessment {
            validation,
            scores,
            footprint,
            compliance,
            benchmark,
            frameworks,
        }
    }

    /// Full assessment assembled into the presentation-ready report.
    /// `generated_on` is caller-supplied; the engine owns no clock.
    pub fn report(
        &self,
        company: &CompanyProfile,
        locations: &[LocationRecord],
        answers: &AnswerSet,
        tasks: &[TaskRecord],
        generated_on: NaiveDate,
    ) -> AssessmentReport {
        let assessment = self.assess(company, locations, answers, tasks);
        report::assemble(company, locations, &assessment, generated_on)
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
