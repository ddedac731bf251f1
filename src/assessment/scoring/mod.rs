//! Weighted ESG category scoring from questionnaire answers and task
//! completion, combined into an overall score via sector weights.

mod weights;

pub use weights::{SectorWeightTable, SectorWeights};

use serde::{Deserialize, Serialize};

use super::domain::{
    AnswerRecord, AnswerSet, AnswerValue, BusinessSector, Declared, EsgCategory, TaskPriority,
    TaskRecord,
};

/// Share of a category score earned from questionnaire answers versus tasks.
const QUESTION_SHARE: f64 = 0.4;
const TASK_SHARE: f64 = 0.6;

/// Composite ESG score breakdown, each component 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EsgScores {
    pub overall: f64,
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

impl EsgScores {
    pub fn for_category(&self, category: EsgCategory) -> f64 {
        match category {
            EsgCategory::Environmental => self.environmental,
            EsgCategory::Social => self.social,
            EsgCategory::Governance => self.governance,
        }
    }
}

pub(crate) fn score(
    table: &SectorWeightTable,
    answers: &AnswerSet,
    tasks: &[TaskRecord],
    sector: Option<BusinessSector>,
) -> EsgScores {
    let environmental = category_score(answers, tasks, EsgCategory::Environmental);
    let social = category_score(answers, tasks, EsgCategory::Social);
    let governance = category_score(answers, tasks, EsgCategory::Governance);

    let weights = table.weights_for(sector);
    let overall = environmental * weights.environmental
        + social * weights.social
        + governance * weights.governance;

    tracing::debug!(overall, environmental, social, governance, "esg scores computed");

    EsgScores {
        overall,
        environmental,
        social,
        governance,
    }
}

fn category_score(answers: &AnswerSet, tasks: &[TaskRecord], category: EsgCategory) -> f64 {
    let category_answers: Vec<&AnswerRecord> = answers
        .values()
        .filter(|record| record.known_category() == Some(category))
        .collect();
    let category_tasks: Vec<&TaskRecord> = tasks
        .iter()
        .filter(|task| task.esg_category() == Some(category))
        .collect();

    if category_answers.is_empty() && category_tasks.is_empty() {
        return 0.0;
    }

    let question_score = question_score(&category_answers);
    let task_score = task_score(&category_tasks);

    (question_score * QUESTION_SHARE + task_score * TASK_SHARE).clamp(0.0, 100.0)
}

/// Weighted mean over answers; answers tagged against more frameworks carry
/// more weight.
fn question_score(answers: &[&AnswerRecord]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for record in answers {
        let weight = (record.framework_count() as f64).max(1.0);
        total += answer_score(record.answer.as_ref()) * weight;
        weight_sum += weight;
    }

    if weight_sum > 0.0 {
        total / weight_sum
    } else {
        0.0
    }
}

/// Affirmative booleans and substantive text score full marks; everything
/// else scores zero.
fn answer_score(answer: Option<&AnswerValue>) -> f64 {
    match answer {
        Some(AnswerValue::Bool(true)) => 100.0,
        Some(AnswerValue::Bool(false)) => 0.0,
        Some(AnswerValue::Text(text)) => {
            if text.trim().is_empty() {
                0.0
            } else {
                100.0
            }
        }
        None => 0.0,
    }
}

/// Weighted mean over tasks; weight combines priority and framework count.
fn task_score(tasks: &[&TaskRecord]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for task in tasks {
        let weight = priority_weight(task) * (task.frameworks.len() as f64).max(1.0);
        let value = task
            .known_status()
            .map_or(0.0, |status| status.progress_score());
        total += value * weight;
        weight_sum += weight;
    }

    if weight_sum > 0.0 {
        total / weight_sum
    } else {
        0.0
    }
}

/// A missing priority is treated as medium; an unrecognized one carries the
/// lowest weight.
fn priority_weight(task: &TaskRecord) -> f64 {
    match &task.priority {
        None => TaskPriority::Medium.weight(),
        Some(Declared::Known(priority)) => priority.weight(),
        Some(Declared::Other(_)) => 1.0,
    }
}
