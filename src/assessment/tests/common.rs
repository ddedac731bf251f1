use std::collections::BTreeMap;

use crate::assessment::domain::{
    AnswerRecord, AnswerSet, AnswerValue, BusinessSector, CompanyProfile, Declared, EsgCategory,
    LocationRecord, TaskCategory, TaskPriority, TaskRecord, TaskStatus, UtilityKind,
    UtilityReading,
};
use crate::assessment::AssessmentEngine;

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new()
}

pub(super) fn hospitality_company() -> CompanyProfile {
    CompanyProfile {
        name: "Radiance Bay Hotel".to_string(),
        sector: Some(Declared::Known(BusinessSector::Hospitality)),
        employees: Some(50),
        established_year: Some(2015),
    }
}

pub(super) fn reading(monthly_consumption: f64) -> UtilityReading {
    UtilityReading {
        monthly_consumption,
        provider: None,
    }
}

pub(super) fn marina_location() -> LocationRecord {
    let mut utilities = BTreeMap::new();
    utilities.insert(UtilityKind::Electricity, reading(15_000.0));
    utilities.insert(UtilityKind::Water, reading(50.0));
    LocationRecord {
        name: "Marina Tower".to_string(),
        total_floor_area: Some(1_000.0),
        utilities,
    }
}

pub(super) fn answer(
    category: EsgCategory,
    value: AnswerValue,
    frameworks: &[&str],
) -> AnswerRecord {
    AnswerRecord {
        question: Some("Does the company track this topic?".to_string()),
        answer: Some(value),
        frameworks: Some(frameworks.iter().map(|tag| tag.to_string()).collect()),
        category: Some(Declared::Known(category)),
    }
}

pub(super) fn answer_set(entries: Vec<(&str, AnswerRecord)>) -> AnswerSet {
    entries
        .into_iter()
        .map(|(id, record)| (id.to_string(), record))
        .collect()
}

pub(super) fn task(
    title: &str,
    category: TaskCategory,
    status: TaskStatus,
    priority: TaskPriority,
    frameworks: &[&str],
) -> TaskRecord {
    TaskRecord {
        title: title.to_string(),
        category: Some(Declared::Known(category)),
        status: Some(Declared::Known(status)),
        priority: Some(Declared::Known(priority)),
        frameworks: frameworks.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// Maximally complete, internally consistent inputs: every field populated,
/// every check green, so completeness and quality both land on 100.
pub(super) fn complete_inputs() -> (
    CompanyProfile,
    Vec<LocationRecord>,
    AnswerSet,
    Vec<TaskRecord>,
) {
    let company = hospitality_company();
    let locations = vec![marina_location()];
    let answers = answer_set(vec![
        (
            "env_energy_policy",
            answer(EsgCategory::Environmental, AnswerValue::Bool(true), &["DST"]),
        ),
        (
            "soc_training",
            answer(
                EsgCategory::Social,
                AnswerValue::Text("Annual program in place".to_string()),
                &["GRI"],
            ),
        ),
        (
            "gov_board_oversight",
            answer(EsgCategory::Governance, AnswerValue::Bool(true), &["GRI"]),
        ),
    ]);
    let tasks = vec![
        task(
            "Switch to LED lighting",
            TaskCategory::Environmental,
            TaskStatus::Completed,
            TaskPriority::High,
            &["DST"],
        ),
        task(
            "Publish code of conduct",
            TaskCategory::Governance,
            TaskStatus::Completed,
            TaskPriority::Medium,
            &["GRI"],
        ),
    ];
    (company, locations, answers, tasks)
}
