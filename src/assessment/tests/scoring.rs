use std::collections::BTreeMap;

use super::common::*;
use crate::assessment::domain::{
    AnswerValue, BusinessSector, Declared, EsgCategory, TaskCategory, TaskPriority, TaskStatus,
};

#[test]
fn empty_inputs_score_zero_everywhere() {
    let scores = engine().scores(&BTreeMap::new(), &[], Some(BusinessSector::Hospitality));

    assert_eq!(scores.overall, 0.0);
    assert_eq!(scores.environmental, 0.0);
    assert_eq!(scores.social, 0.0);
    assert_eq!(scores.governance, 0.0);
}

#[test]
fn questions_alone_earn_forty_percent_of_a_category() {
    let answers = answer_set(vec![(
        "env_policy",
        answer(EsgCategory::Environmental, AnswerValue::Bool(true), &["DST"]),
    )]);

    let scores = engine().scores(&answers, &[], Some(BusinessSector::Hospitality));

    assert_eq!(scores.environmental, 40.0);
    assert_eq!(scores.social, 0.0);
    assert_eq!(scores.governance, 0.0);
    // Hospitality weights the environmental pillar at 0.45.
    assert!((scores.overall - 18.0).abs() < 1e-9);
}

#[test]
fn affirmative_and_substantive_answers_score_alike() {
    let answers = answer_set(vec![
        (
            "bool_q",
            answer(EsgCategory::Governance, AnswerValue::Bool(true), &[]),
        ),
        (
            "text_q",
            answer(
                EsgCategory::Governance,
                AnswerValue::Text("Quarterly board review".to_string()),
                &[],
            ),
        ),
    ]);

    let scores = engine().scores(&answers, &[], None);
    assert_eq!(scores.governance, 40.0);
}

#[test]
fn blank_and_negative_answers_score_zero() {
    let answers = answer_set(vec![
        (
            "blank",
            answer(EsgCategory::Social, AnswerValue::Text("   ".to_string()), &[]),
        ),
        (
            "declined",
            answer(EsgCategory::Social, AnswerValue::Bool(false), &[]),
        ),
    ]);

    let scores = engine().scores(&answers, &[], None);
    assert_eq!(scores.social, 0.0);
}

#[test]
fn framework_count_weights_answers() {
    // A three-framework yes against a no: (100*3 + 0*1) / 4 = 75.
    let answers = answer_set(vec![
        (
            "tagged",
            answer(
                EsgCategory::Environmental,
                AnswerValue::Bool(true),
                &["DST", "GRI", "CDP"],
            ),
        ),
        (
            "untagged",
            answer(EsgCategory::Environmental, AnswerValue::Bool(false), &[]),
        ),
    ]);

    let scores = engine().scores(&answers, &[], None);
    assert!((scores.environmental - 30.0).abs() < 1e-9, "0.4 * 75");
}

#[test]
fn task_progress_and_priority_weight_the_task_share() {
    // High completed (weight 3, 100) against low todo (weight 1, 0): 75.
    let tasks = vec![
        task(
            "Energy retrofit",
            TaskCategory::Environmental,
            TaskStatus::Completed,
            TaskPriority::High,
            &[],
        ),
        task(
            "Waste audit",
            TaskCategory::Environmental,
            TaskStatus::Todo,
            TaskPriority::Low,
            &[],
        ),
    ];

    let scores = engine().scores(&BTreeMap::new(), &tasks, None);
    assert!((scores.environmental - 45.0).abs() < 1e-9, "0.6 * 75");
}

#[test]
fn in_progress_work_earns_half_credit_and_pending_review_none() {
    let tasks = vec![
        task(
            "Draft policy",
            TaskCategory::Governance,
            TaskStatus::InProgress,
            TaskPriority::Medium,
            &[],
        ),
        task(
            "Review policy",
            TaskCategory::Governance,
            TaskStatus::PendingReview,
            TaskPriority::Medium,
            &[],
        ),
    ];

    let scores = engine().scores(&BTreeMap::new(), &tasks, None);
    // (50 + 0) / 2 tasks of equal weight, then the 0.6 task share.
    assert!((scores.governance - 15.0).abs() < 1e-9);
}

#[test]
fn operational_task_categories_do_not_feed_pillar_scores() {
    let tasks = vec![
        task(
            "Install sub-meters",
            TaskCategory::Energy,
            TaskStatus::Completed,
            TaskPriority::High,
            &["DST"],
        ),
        task(
            "Map suppliers",
            TaskCategory::SupplyChain,
            TaskStatus::Completed,
            TaskPriority::High,
            &["DST"],
        ),
    ];

    let scores = engine().scores(&BTreeMap::new(), &tasks, None);
    assert_eq!(scores.environmental, 0.0);
    assert_eq!(scores.social, 0.0);
    assert_eq!(scores.governance, 0.0);
    assert_eq!(scores.overall, 0.0);
}

#[test]
fn missing_priority_counts_as_medium_and_unrecognized_as_lowest() {
    let mut untagged = task(
        "Untagged priority",
        TaskCategory::Social,
        TaskStatus::Completed,
        TaskPriority::Medium,
        &[],
    );
    untagged.priority = None;
    let mut odd = task(
        "Odd priority",
        TaskCategory::Social,
        TaskStatus::Todo,
        TaskPriority::Medium,
        &[],
    );
    odd.priority = Some(Declared::Other("urgent".to_string()));

    // weights: none -> 2 (completed, 100), other -> 1 (todo, 0): 200/3.
    let scores = engine().scores(&BTreeMap::new(), &[untagged, odd], None);
    let expected = 200.0 / 3.0 * 0.6;
    assert!((scores.social - expected).abs() < 1e-9);
}

#[test]
fn unknown_sector_uses_fallback_weights() {
    let answers = answer_set(vec![
        (
            "env",
            answer(EsgCategory::Environmental, AnswerValue::Bool(true), &[]),
        ),
        (
            "soc",
            answer(EsgCategory::Social, AnswerValue::Bool(true), &[]),
        ),
        (
            "gov",
            answer(EsgCategory::Governance, AnswerValue::Bool(true), &[]),
        ),
    ]);

    let scores = engine().scores(&answers, &[], None);
    // Each pillar lands at 40; fallback weights sum to 1.0.
    assert!((scores.overall - 40.0).abs() < 1e-9);

    let retail = engine().scores(&answers, &[], Some(BusinessSector::Retail));
    assert_eq!(retail.overall, scores.overall, "retail has no weight entry");
}

#[test]
fn overall_stays_within_bounds_for_extreme_categories() {
    let (_, _, answers, tasks) = complete_inputs();

    for sector in BusinessSector::ordered() {
        let scores = engine().scores(&answers, &tasks, Some(sector));
        for value in [
            scores.overall,
            scores.environmental,
            scores.social,
            scores.governance,
        ] {
            assert!((0.0..=100.0).contains(&value), "{value} out of range");
        }
    }
}

#[test]
fn fully_green_inputs_max_out_every_pillar() {
    let answers = answer_set(vec![
        (
            "env",
            answer(EsgCategory::Environmental, AnswerValue::Bool(true), &["DST"]),
        ),
        (
            "soc",
            answer(EsgCategory::Social, AnswerValue::Bool(true), &["DST"]),
        ),
        (
            "gov",
            answer(EsgCategory::Governance, AnswerValue::Bool(true), &["DST"]),
        ),
    ]);
    let tasks = vec![
        task(
            "Env task",
            TaskCategory::Environmental,
            TaskStatus::Completed,
            TaskPriority::High,
            &["DST"],
        ),
        task(
            "Soc task",
            TaskCategory::Social,
            TaskStatus::Completed,
            TaskPriority::Low,
            &["DST"],
        ),
        task(
            "Gov task",
            TaskCategory::Governance,
            TaskStatus::Completed,
            TaskPriority::Medium,
            &["DST"],
        ),
    ];

    let scores = engine().scores(&answers, &tasks, Some(BusinessSector::Manufacturing));
    assert_eq!(scores.environmental, 100.0);
    assert_eq!(scores.social, 100.0);
    assert_eq!(scores.governance, 100.0);
    assert!((scores.overall - 100.0).abs() < 1e-9);
}
