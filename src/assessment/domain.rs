use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Questionnaire answers keyed by question id.
pub type AnswerSet = BTreeMap<String, AnswerRecord>;

/// A boundary value that either parsed into a closed enum or carries the
/// unrecognized string verbatim for the validator to flag. Engines only ever
/// act on the `Known` side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Declared<T> {
    Known(T),
    Other(String),
}

impl<T: Copy> Declared<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Declared::Known(value) => Some(*value),
            Declared::Other(_) => None,
        }
    }
}

impl<T> Declared<T> {
    /// The unrecognized raw string, when parsing into the closed enum failed.
    pub fn unrecognized(&self) -> Option<&str> {
        match self {
            Declared::Known(_) => None,
            Declared::Other(raw) => Some(raw.as_str()),
        }
    }
}

/// Business sectors with weighting or benchmark coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessSector {
    Hospitality,
    Construction,
    Manufacturing,
    Education,
    Healthcare,
    Logistics,
    Retail,
    ProfessionalServices,
}

impl BusinessSector {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Hospitality,
            Self::Construction,
            Self::Manufacturing,
            Self::Education,
            Self::Healthcare,
            Self::Logistics,
            Self::Retail,
            Self::ProfessionalServices,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hospitality => "hospitality",
            Self::Construction => "construction",
            Self::Manufacturing => "manufacturing",
            Self::Education => "education",
            Self::Healthcare => "healthcare",
            Self::Logistics => "logistics",
            Self::Retail => "retail",
            Self::ProfessionalServices => "professional_services",
        }
    }
}

/// The three assessed ESG dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EsgCategory {
    Environmental,
    Social,
    Governance,
}

impl EsgCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Environmental, Self::Social, Self::Governance]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Environmental => "environmental",
            Self::Social => "social",
            Self::Governance => "governance",
        }
    }
}

/// Company profile as onboarded; every field may be absent and the validator
/// reports on what is missing rather than rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: Option<Declared<BusinessSector>>,
    #[serde(default)]
    pub employees: Option<i64>,
    #[serde(default)]
    pub established_year: Option<i32>,
}

impl CompanyProfile {
    /// Sector usable for weighting and benchmarking, when recognized.
    pub fn known_sector(&self) -> Option<BusinessSector> {
        self.sector.as_ref().and_then(Declared::known)
    }
}

/// Metered utility kinds tracked per location. Wire names match the intake
/// payloads (`districtCooling`, `naturalGas`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UtilityKind {
    Electricity,
    Water,
    DistrictCooling,
    NaturalGas,
    Lpg,
}

impl UtilityKind {
    /// Utilities every location is expected to meter.
    pub const fn required() -> [Self; 2] {
        [Self::Electricity, Self::Water]
    }

    /// Utilities only some facilities have.
    pub const fn optional() -> [Self; 3] {
        [Self::DistrictCooling, Self::NaturalGas, Self::Lpg]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Electricity => "electricity",
            Self::Water => "water",
            Self::DistrictCooling => "districtCooling",
            Self::NaturalGas => "naturalGas",
            Self::Lpg => "lpg",
        }
    }
}

/// Monthly metered consumption for one utility at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityReading {
    #[serde(default)]
    pub monthly_consumption: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// A facility with floor area and utility consumption. Aggregates additively
/// across a company's locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_floor_area: Option<f64>,
    #[serde(default)]
    pub utilities: BTreeMap<UtilityKind, UtilityReading>,
}

impl LocationRecord {
    pub fn monthly_consumption(&self, kind: UtilityKind) -> f64 {
        self.utilities
            .get(&kind)
            .map_or(0.0, |reading| reading.monthly_consumption)
    }

    pub fn annual_consumption(&self, kind: UtilityKind) -> f64 {
        self.monthly_consumption(kind) * 12.0
    }
}

/// Value of a questionnaire answer. Booleans and free text arrive untagged;
/// an absent or null answer is `None` on the surrounding record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Text(String),
}

impl AnswerValue {
    /// Whether the question counts as answered for completeness purposes.
    /// A `false` boolean is an answer; an empty string is not.
    pub fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Bool(_) => true,
            AnswerValue::Text(text) => !text.is_empty(),
        }
    }
}

/// One questionnaire response with its framework tags and ESG category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<AnswerValue>,
    #[serde(default)]
    pub frameworks: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<Declared<EsgCategory>>,
}

impl AnswerRecord {
    pub fn is_answered(&self) -> bool {
        self.answer.as_ref().is_some_and(AnswerValue::is_answered)
    }

    pub fn known_category(&self) -> Option<EsgCategory> {
        self.category.as_ref().and_then(Declared::known)
    }

    pub fn framework_count(&self) -> usize {
        self.frameworks.as_ref().map_or(0, Vec::len)
    }
}

/// Improvement-task categories. Only the three that mirror an ESG dimension
/// feed category scoring; the operational ones (energy, water, waste, supply
/// chain) count toward compliance and completion only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Governance,
    Energy,
    Water,
    Waste,
    SupplyChain,
    Social,
    Environmental,
}

impl TaskCategory {
    pub const fn esg_category(self) -> Option<EsgCategory> {
        match self {
            Self::Environmental => Some(EsgCategory::Environmental),
            Self::Social => Some(EsgCategory::Social),
            Self::Governance => Some(EsgCategory::Governance),
            Self::Energy | Self::Water | Self::Waste | Self::SupplyChain => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Governance => "governance",
            Self::Energy => "energy",
            Self::Water => "water",
            Self::Waste => "waste",
            Self::SupplyChain => "supply_chain",
            Self::Social => "social",
            Self::Environmental => "environmental",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    PendingReview,
    Completed,
}

impl TaskStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Todo,
            Self::InProgress,
            Self::PendingReview,
            Self::Completed,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::PendingReview => "pending_review",
            Self::Completed => "completed",
        }
    }

    /// Progress credit toward category scores. Work pending review has not
    /// delivered its outcome yet and earns nothing.
    pub const fn progress_score(self) -> f64 {
        match self {
            Self::Completed => 100.0,
            Self::InProgress => 50.0,
            Self::Todo | Self::PendingReview => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub const fn weight(self) -> f64 {
        match self {
            Self::High => 3.0,
            Self::Medium => 2.0,
            Self::Low => 1.0,
        }
    }
}

/// One improvement task with its framework tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: Option<Declared<TaskCategory>>,
    #[serde(default)]
    pub status: Option<Declared<TaskStatus>>,
    #[serde(default)]
    pub priority: Option<Declared<TaskPriority>>,
    #[serde(default)]
    pub frameworks: Vec<String>,
}

impl TaskRecord {
    pub fn known_status(&self) -> Option<TaskStatus> {
        self.status.as_ref().and_then(Declared::known)
    }

    pub fn is_completed(&self) -> bool {
        self.known_status() == Some(TaskStatus::Completed)
    }

    /// The ESG dimension this task scores toward, when its category maps to
    /// one.
    pub fn esg_category(&self) -> Option<EsgCategory> {
        self.category
            .as_ref()
            .and_then(Declared::known)
            .and_then(TaskCategory::esg_category)
    }

    pub fn references(&self, framework: &str) -> bool {
        self.frameworks.iter().any(|tag| tag == framework)
    }
}
