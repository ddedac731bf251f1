use serde::Serialize;

use crate::assessment::compliance::ComplianceRate;
use crate::assessment::footprint::CarbonFootprint;
use crate::assessment::scoring::EsgScores;
use crate::assessment::validation::{IssueSummary, ValidationIssue, ValidationResult};

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Presentation band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

/// Validation outcome with scores rounded for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationView {
    pub is_valid: bool,
    pub completeness_score: f64,
    pub quality_score: f64,
    pub issues: Vec<ValidationIssue>,
    pub summary: IssueSummary,
}

impl ValidationView {
    pub(crate) fn from_result(result: &ValidationResult) -> Self {
        Self {
            is_valid: result.is_valid,
            completeness_score: round1(result.completeness_score),
            quality_score: round1(result.quality_score),
            issues: result.issues.clone(),
            summary: result.summary(),
        }
    }
}

/// ESG scores rounded to one decimal, with the overall presentation band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EsgScoresView {
    pub overall: f64,
    pub overall_band: ScoreBand,
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

impl EsgScoresView {
    pub(crate) fn from_scores(scores: &EsgScores) -> Self {
        Self {
            overall: round1(scores.overall),
            overall_band: ScoreBand::for_score(scores.overall),
            environmental: round1(scores.environmental),
            social: round1(scores.social),
            governance: round1(scores.governance),
        }
    }
}

/// Footprint figures rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarbonFootprintView {
    pub total_annual: f64,
    pub scope1: f64,
    pub scope2: f64,
    pub emissions_per_sqm: f64,
    pub emissions_per_employee: f64,
}

impl CarbonFootprintView {
    pub(crate) fn from_footprint(footprint: &CarbonFootprint) -> Self {
        Self {
            total_annual: round2(footprint.total_annual),
            scope1: round2(footprint.scope1),
            scope2: round2(footprint.scope2),
            emissions_per_sqm: round2(footprint.emissions_per_sqm),
            emissions_per_employee: round2(footprint.emissions_per_employee),
        }
    }
}

/// Compliance rate rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceRateView {
    pub framework: String,
    pub rate: f64,
    pub completed: usize,
    pub total: usize,
}

impl ComplianceRateView {
    pub(crate) fn from_rate(rate: &ComplianceRate) -> Self {
        Self {
            framework: rate.framework.clone(),
            rate: round1(rate.rate),
            completed: rate.completed,
            total: rate.total,
        }
    }
}
