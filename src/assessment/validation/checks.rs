use std::collections::BTreeSet;

use serde_json::json;

use super::{ValidationIssue, ValidationPolicy};
use crate::assessment::domain::{
    AnswerSet, BusinessSector, CompanyProfile, Declared, EsgCategory, LocationRecord, TaskPriority,
    TaskRecord, TaskStatus, UtilityKind,
};

fn sector_list() -> String {
    BusinessSector::ordered()
        .iter()
        .map(|sector| sector.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn category_list() -> String {
    EsgCategory::ordered()
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn status_list() -> String {
    TaskStatus::ordered()
        .iter()
        .map(|status| status.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether a declared enum field carries anything usable. An empty raw
/// string is treated as absent, mirroring how the intake forms submit
/// untouched fields.
fn declared_present<T>(value: &Option<Declared<T>>) -> bool {
    match value {
        None => false,
        Some(Declared::Known(_)) => true,
        Some(Declared::Other(raw)) => !raw.is_empty(),
    }
}

pub(super) fn check_company(
    policy: &ValidationPolicy,
    company: &CompanyProfile,
    issues: &mut Vec<ValidationIssue>,
) {
    if company.name.is_empty() {
        issues.push(
            ValidationIssue::error("company.name", "Required field 'name' is missing or empty")
                .with_suggestion("Provide the registered company name"),
        );
    }
    if !declared_present(&company.sector) {
        issues.push(
            ValidationIssue::error(
                "company.sector",
                "Required field 'sector' is missing or empty",
            )
            .with_suggestion("Provide the business sector"),
        );
    }
    if company.employees.is_none_or(|count| count == 0) {
        issues.push(
            ValidationIssue::error(
                "company.employees",
                "Required field 'employees' is missing or empty",
            )
            .with_suggestion("Provide the employee headcount"),
        );
    }
    if company.established_year.is_none_or(|year| year == 0) {
        issues.push(
            ValidationIssue::error(
                "company.establishedYear",
                "Required field 'establishedYear' is missing or empty",
            )
            .with_suggestion("Provide the establishment year"),
        );
    }

    if let Some(employees) = company.employees {
        if employees <= 0 {
            issues.push(
                ValidationIssue::warning(
                    "company.employees",
                    "Employee count should be a positive number",
                )
                .with_value(employees)
                .with_suggestion("Provide an accurate employee count for intensity metrics"),
            );
        }
    }

    if let Some(year) = company.established_year {
        if year < policy.established_year_min || year > policy.established_year_max {
            issues.push(
                ValidationIssue::warning(
                    "company.establishedYear",
                    "Establishment year seems invalid",
                )
                .with_value(year)
                .with_suggestion(format!(
                    "Provide a year between {} and {}",
                    policy.established_year_min, policy.established_year_max
                )),
            );
        }
    }

    if let Some(raw) = company.sector.as_ref().and_then(Declared::unrecognized) {
        issues.push(
            ValidationIssue::warning("company.sector", "Sector not recognized for benchmarking")
                .with_value(raw)
                .with_suggestion(format!("Use one of: {}", sector_list())),
        );
    }
}

pub(super) fn check_locations(
    policy: &ValidationPolicy,
    locations: &[LocationRecord],
    issues: &mut Vec<ValidationIssue>,
) {
    if locations.is_empty() {
        issues.push(
            ValidationIssue::error(
                "locations",
                "At least one location is required for carbon footprint calculations",
            )
            .with_suggestion("Add facility records with utility consumption data"),
        );
        return;
    }

    for (index, location) in locations.iter().enumerate() {
        let prefix = format!("locations[{index}]");

        if location.name.is_empty() {
            issues.push(ValidationIssue::error(
                format!("{prefix}.name"),
                "Required location field 'name' is missing",
            ));
        }
        if location.total_floor_area.is_none_or(|area| area == 0.0) {
            issues.push(
                ValidationIssue::error(
                    format!("{prefix}.totalFloorArea"),
                    "Required location field 'totalFloorArea' is missing",
                )
                .with_suggestion("Provide the floor area in square meters"),
            );
        }
        if location.utilities.is_empty() {
            issues.push(
                ValidationIssue::error(
                    format!("{prefix}.utilities"),
                    "Required location field 'utilities' is missing",
                )
                .with_suggestion("Provide monthly utility consumption per meter"),
            );
        }

        if let Some(area) = location.total_floor_area {
            if area <= 0.0 {
                issues.push(
                    ValidationIssue::error(
                        format!("{prefix}.totalFloorArea"),
                        "Floor area must be a positive number",
                    )
                    .with_value(area)
                    .with_suggestion("Provide the floor area in square meters"),
                );
            } else if area > policy.max_plausible_floor_area {
                issues.push(
                    ValidationIssue::warning(
                        format!("{prefix}.totalFloorArea"),
                        "Floor area seems unusually large",
                    )
                    .with_value(area)
                    .with_suggestion("Verify the floor area is in square meters"),
                );
            }
        }

        check_utilities(location, &prefix, issues);
    }
}

fn check_utilities(location: &LocationRecord, prefix: &str, issues: &mut Vec<ValidationIssue>) {
    for kind in UtilityKind::required() {
        match location.utilities.get(&kind) {
            None => {
                issues.push(
                    ValidationIssue::warning(
                        format!("{prefix}.utilities.{}", kind.label()),
                        format!("Missing {} consumption data", kind.label()),
                    )
                    .with_suggestion(format!(
                        "Add {} data for a complete carbon footprint",
                        kind.label()
                    )),
                );
            }
            Some(reading) => {
                if reading.monthly_consumption < 0.0 {
                    issues.push(
                        ValidationIssue::error(
                            format!("{prefix}.utilities.{}.monthlyConsumption", kind.label()),
                            format!("{} consumption must be non-negative", kind.label()),
                        )
                        .with_value(reading.monthly_consumption)
                        .with_suggestion("Provide the monthly consumption as a positive number"),
                    );
                } else if reading.monthly_consumption == 0.0 {
                    issues.push(
                        ValidationIssue::warning(
                            format!("{prefix}.utilities.{}.monthlyConsumption", kind.label()),
                            format!("Zero {} consumption seems unusual", kind.label()),
                        )
                        .with_suggestion("Verify the consumption data is accurate"),
                    );
                }
            }
        }
    }

    for kind in UtilityKind::optional() {
        if let Some(reading) = location.utilities.get(&kind) {
            if reading.monthly_consumption < 0.0 {
                issues.push(
                    ValidationIssue::error(
                        format!("{prefix}.utilities.{}.monthlyConsumption", kind.label()),
                        format!("{} consumption cannot be negative", kind.label()),
                    )
                    .with_value(reading.monthly_consumption),
                );
            }
        }
    }
}

pub(super) fn check_answers(
    policy: &ValidationPolicy,
    answers: &AnswerSet,
    issues: &mut Vec<ValidationIssue>,
) {
    if answers.is_empty() {
        issues.push(
            ValidationIssue::error(
                "scoping_answers",
                "ESG scoping questionnaire responses are required",
            )
            .with_suggestion("Complete the ESG assessment questionnaire"),
        );
        return;
    }

    let mut unanswered = 0usize;
    for (question_id, record) in answers {
        let prefix = format!("scoping_answers.{question_id}");

        if record.question.is_none() {
            issues.push(ValidationIssue::warning(
                format!("{prefix}.question"),
                "Missing question in answer data",
            ));
        }
        if record.answer.is_none() {
            issues.push(ValidationIssue::warning(
                format!("{prefix}.answer"),
                "Missing answer in answer data",
            ));
        }
        if record.frameworks.is_none() {
            issues.push(ValidationIssue::warning(
                format!("{prefix}.frameworks"),
                "Missing frameworks in answer data",
            ));
        }
        if record.category.is_none() {
            issues.push(ValidationIssue::warning(
                format!("{prefix}.category"),
                "Missing category in answer data",
            ));
        }

        if !record.is_answered() {
            unanswered += 1;
            issues.push(
                ValidationIssue::info(format!("{prefix}.answer"), "Question not answered")
                    .with_suggestion("Complete the answer for better ESG scoring"),
            );
        }

        if let Some(raw) = record.category.as_ref().and_then(Declared::unrecognized) {
            if !raw.is_empty() {
                issues.push(
                    ValidationIssue::warning(format!("{prefix}.category"), "Invalid ESG category")
                        .with_value(raw)
                        .with_suggestion(format!("Use one of: {}", category_list())),
                );
            }
        }
    }

    if unanswered as f64 > answers.len() as f64 * policy.unanswered_warning_ratio {
        issues.push(
            ValidationIssue::warning("scoping_answers", "Many questions remain unanswered")
                .with_suggestion("Complete more questions for an accurate ESG assessment"),
        );
    }
}

pub(super) fn check_tasks(
    policy: &ValidationPolicy,
    tasks: &[TaskRecord],
    issues: &mut Vec<ValidationIssue>,
) {
    if tasks.is_empty() {
        issues.push(
            ValidationIssue::warning("tasks", "No tasks found").with_suggestion(
                "Create ESG improvement tasks for better compliance tracking",
            ),
        );
        return;
    }

    let mut completed = 0usize;
    let mut high_priority_incomplete = 0usize;

    for (index, task) in tasks.iter().enumerate() {
        let prefix = format!("tasks[{index}]");

        if task.title.is_empty() {
            issues.push(ValidationIssue::warning(
                format!("{prefix}.title"),
                "Task missing title",
            ));
        }
        if !declared_present(&task.category) {
            issues.push(ValidationIssue::warning(
                format!("{prefix}.category"),
                "Task missing category",
            ));
        }
        if !declared_present(&task.status) {
            issues.push(ValidationIssue::warning(
                format!("{prefix}.status"),
                "Task missing status",
            ));
        }
        if !declared_present(&task.priority) {
            issues.push(ValidationIssue::warning(
                format!("{prefix}.priority"),
                "Task missing priority",
            ));
        }

        match &task.status {
            Some(Declared::Known(status)) => {
                if *status == TaskStatus::Completed {
                    completed += 1;
                }
            }
            Some(Declared::Other(raw)) => {
                issues.push(
                    ValidationIssue::warning(format!("{prefix}.status"), "Invalid task status")
                        .with_value(raw.as_str())
                        .with_suggestion(format!("Use one of: {}", status_list())),
                );
            }
            None => {
                issues.push(
                    ValidationIssue::warning(format!("{prefix}.status"), "Invalid task status")
                        .with_suggestion(format!("Use one of: {}", status_list())),
                );
            }
        }

        let high_priority = task.priority.as_ref().and_then(Declared::known) == Some(TaskPriority::High);
        if high_priority && !task.is_completed() {
            high_priority_incomplete += 1;
        }
    }

    let completion_rate = completed as f64 / tasks.len() as f64 * 100.0;
    if completion_rate < policy.low_completion_rate {
        issues.push(
            ValidationIssue::info("tasks", "Low task completion rate")
                .with_value(format!("{completion_rate:.1}%"))
                .with_suggestion("Focus on completing more ESG improvement tasks"),
        );
    }

    if high_priority_incomplete > 0 {
        issues.push(
            ValidationIssue::warning(
                "tasks",
                format!("{high_priority_incomplete} high-priority tasks incomplete"),
            )
            .with_suggestion("Prioritize completing high-impact ESG tasks"),
        );
    }
}

pub(super) fn check_consistency(
    policy: &ValidationPolicy,
    company: &CompanyProfile,
    locations: &[LocationRecord],
    answers: &AnswerSet,
    tasks: &[TaskRecord],
    issues: &mut Vec<ValidationIssue>,
) {
    if !locations.is_empty() {
        if let Some(employees) = company.employees {
            let total_area: f64 = locations
                .iter()
                .map(|location| location.total_floor_area.unwrap_or(0.0))
                .sum();

            if total_area > 0.0 && employees > 0 {
                let area_per_employee = total_area / employees as f64;

                // Typical office space runs 10-25 sqm per employee.
                if area_per_employee < policy.min_area_per_employee {
                    issues.push(
                        ValidationIssue::warning(
                            "consistency.area_per_employee",
                            "Very low floor area per employee",
                        )
                        .with_value(format!("{area_per_employee:.1} sqm/employee"))
                        .with_suggestion("Verify floor area and employee count accuracy"),
                    );
                } else if area_per_employee > policy.max_area_per_employee {
                    issues.push(
                        ValidationIssue::warning(
                            "consistency.area_per_employee",
                            "Very high floor area per employee",
                        )
                        .with_value(format!("{area_per_employee:.1} sqm/employee"))
                        .with_suggestion("Verify floor area and employee count accuracy"),
                    );
                }
            }
        }
    }

    let answer_frameworks: BTreeSet<&str> = answers
        .values()
        .flat_map(|record| record.frameworks.iter().flatten())
        .map(String::as_str)
        .collect();
    let task_frameworks: BTreeSet<&str> = tasks
        .iter()
        .flat_map(|task| &task.frameworks)
        .map(String::as_str)
        .collect();

    if !answer_frameworks.is_empty() && !task_frameworks.is_empty() {
        let missing: Vec<&str> = answer_frameworks
            .difference(&task_frameworks)
            .copied()
            .collect();
        if !missing.is_empty() {
            issues.push(
                ValidationIssue::info(
                    "consistency.frameworks",
                    "Some frameworks from answers not found in tasks",
                )
                .with_value(json!(missing))
                .with_suggestion("Ensure tasks cover all applicable frameworks"),
            );
        }
    }
}
