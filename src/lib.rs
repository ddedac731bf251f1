//! Core assessment engine for SME sustainability reporting.
//!
//! The crate computes a standardized sustainability assessment for a business
//! entity: composite ESG scores, a greenhouse-gas footprint with scope
//! breakdown, per-framework compliance rates, a sector-benchmark comparison,
//! and a data-quality audit gating whether the other results are trustworthy.
//!
//! Everything is a pure function over immutable input records. Malformed or
//! missing business data never fails an assessment; it surfaces as validation
//! issues, zero results, or `unknown` classifications. Only invalid static
//! configuration (see [`config::EngineConfig::validate`]) fails loudly.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{Assessment, AssessmentEngine};
pub use config::{ConfigError, EngineConfig};
pub use error::EngineError;
