use std::cmp::Ordering;

use serde::Serialize;

use crate::assessment::benchmark::{BenchmarkComparison, PerformanceBand};
use crate::assessment::compliance::ComplianceRate;
use crate::assessment::domain::{BusinessSector, EsgCategory, TaskPriority};
use crate::assessment::scoring::EsgScores;

pub(crate) const MAX_RECOMMENDATIONS: usize = 10;

const LOW_SCORE: f64 = 60.0;
const CRITICAL_SCORE: f64 = 40.0;
const LOW_COMPLIANCE: f64 = 80.0;
const CRITICAL_COMPLIANCE: f64 = 50.0;
const BENCHMARK_PRIORITY_SCORE: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTopic {
    Environmental,
    Social,
    Governance,
    Compliance,
}

impl From<EsgCategory> for RecommendationTopic {
    fn from(category: EsgCategory) -> Self {
        match category {
            EsgCategory::Environmental => Self::Environmental,
            EsgCategory::Social => Self::Social,
            EsgCategory::Governance => Self::Governance,
        }
    }
}

/// A prioritized improvement action derived from the assessment outputs.
/// Data only; rendering belongs to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub topic: RecommendationTopic,
    pub priority: TaskPriority,
    pub priority_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_impact: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<&'static str>,
}

/// Generate recommendations from scores, compliance, benchmarks, and sector
/// advice, sorted by priority score descending and capped at
/// [`MAX_RECOMMENDATIONS`].
pub(crate) fn generate(
    scores: &EsgScores,
    compliance: &[ComplianceRate],
    comparison: &BenchmarkComparison,
    sector: Option<BusinessSector>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    score_recommendations(scores, &mut recommendations);
    compliance_recommendations(compliance, &mut recommendations);
    benchmark_recommendations(comparison, &mut recommendations);
    sector_recommendations(sector, &mut recommendations);

    recommendations.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(Ordering::Equal)
    });
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

fn category_title(category: EsgCategory) -> &'static str {
    match category {
        EsgCategory::Environmental => "Environmental",
        EsgCategory::Social => "Social",
        EsgCategory::Governance => "Governance",
    }
}

fn score_recommendations(scores: &EsgScores, out: &mut Vec<Recommendation>) {
    for category in EsgCategory::ordered() {
        let score = scores.for_category(category);
        if score < LOW_SCORE {
            out.push(Recommendation {
                title: format!("Improve {} Performance", category_title(category)),
                description: format!(
                    "The {} score of {:.1} is below the {}-point threshold. \
                     Focus on completing {} tasks and strengthening policies.",
                    category.label(),
                    score,
                    LOW_SCORE,
                    category.label()
                ),
                topic: category.into(),
                priority: if score < CRITICAL_SCORE {
                    TaskPriority::High
                } else {
                    TaskPriority::Medium
                },
                priority_score: 100.0 - score,
                estimated_impact: Some("high"),
                timeframe: Some("3-6 months"),
            });
        }
    }
}

fn compliance_recommendations(compliance: &[ComplianceRate], out: &mut Vec<Recommendation>) {
    for rate in compliance {
        if rate.rate < LOW_COMPLIANCE {
            let remaining = rate.total - rate.completed;
            out.push(Recommendation {
                title: format!("Complete {} Tasks", rate.framework),
                description: format!(
                    "Complete {} remaining tasks to lift {} compliance from {:.1}% to 100%.",
                    remaining, rate.framework, rate.rate
                ),
                topic: RecommendationTopic::Compliance,
                priority: if rate.rate < CRITICAL_COMPLIANCE {
                    TaskPriority::High
                } else {
                    TaskPriority::Medium
                },
                priority_score: 100.0 - rate.rate,
                estimated_impact: Some("high"),
                timeframe: Some("1-3 months"),
            });
        }
    }
}

fn benchmark_recommendations(comparison: &BenchmarkComparison, out: &mut Vec<Recommendation>) {
    let areas = [
        ("electricity", comparison.electricity_performance, "Improve Energy Efficiency"),
        ("water", comparison.water_performance, "Improve Water Conservation"),
        ("carbon", comparison.carbon_performance, "Improve Carbon Reduction"),
    ];

    for (metric, performance, title) in areas {
        if performance == PerformanceBand::Inefficient {
            out.push(Recommendation {
                title: title.to_string(),
                description: format!(
                    "{} performance is below sector benchmarks. \
                     Implement efficiency measures to reduce consumption.",
                    capitalize(metric)
                ),
                topic: RecommendationTopic::Environmental,
                priority: TaskPriority::High,
                priority_score: BENCHMARK_PRIORITY_SCORE,
                estimated_impact: Some("medium"),
                timeframe: Some("6-12 months"),
            });
        }
    }
}

fn sector_recommendations(sector: Option<BusinessSector>, out: &mut Vec<Recommendation>) {
    match sector {
        Some(BusinessSector::Hospitality) => out.push(Recommendation {
            title: "Implement Guest Engagement Programs".to_string(),
            description: "Develop towel and linen reuse programs to reduce water and energy \
                          consumption."
                .to_string(),
            topic: RecommendationTopic::Environmental,
            priority: TaskPriority::Medium,
            priority_score: 60.0,
            estimated_impact: None,
            timeframe: None,
        }),
        Some(BusinessSector::Manufacturing) => out.push(Recommendation {
            title: "Optimize Production Efficiency".to_string(),
            description: "Apply lean manufacturing principles to reduce waste and energy \
                          consumption."
                .to_string(),
            topic: RecommendationTopic::Environmental,
            priority: TaskPriority::High,
            priority_score: 75.0,
            estimated_impact: None,
            timeframe: None,
        }),
        _ => {}
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
