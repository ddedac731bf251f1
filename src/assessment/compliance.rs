//! Per-framework completion rates from tagged tasks.

use serde::{Deserialize, Serialize};

use super::domain::TaskRecord;

/// Completion rate against one named framework. A framework no task
/// references reports `{rate: 0, completed: 0, total: 0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRate {
    pub framework: String,
    pub rate: f64,
    pub completed: usize,
    pub total: usize,
}

/// Rates per framework, preserving the input ordering.
pub(crate) fn rates(tasks: &[TaskRecord], frameworks: &[String]) -> Vec<ComplianceRate> {
    frameworks
        .iter()
        .map(|framework| {
            let referencing: Vec<&TaskRecord> = tasks
                .iter()
                .filter(|task| task.references(framework))
                .collect();

            if referencing.is_empty() {
                return ComplianceRate {
                    framework: framework.clone(),
                    rate: 0.0,
                    completed: 0,
                    total: 0,
                };
            }

            let completed = referencing.iter().filter(|task| task.is_completed()).count();
            ComplianceRate {
                framework: framework.clone(),
                rate: completed as f64 / referencing.len() as f64 * 100.0,
                completed,
                total: referencing.len(),
            }
        })
        .collect()
}
