//! Scope 1/2 greenhouse-gas footprint from location utility consumption.

mod factors;

pub use factors::EmissionFactors;

use serde::{Deserialize, Serialize};

use super::domain::{CompanyProfile, LocationRecord, UtilityKind};

pub(crate) const KG_PER_TONNE: f64 = 1000.0;

/// Annual emissions in tonnes CO2e with intensity metrics. Scope 1 covers
/// on-site combustion (gas, LPG); Scope 2 covers purchased energy
/// (electricity, district cooling).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonFootprint {
    pub total_annual: f64,
    pub scope1: f64,
    pub scope2: f64,
    pub emissions_per_sqm: f64,
    pub emissions_per_employee: f64,
}

pub(crate) fn calculate(
    factors: &EmissionFactors,
    locations: &[LocationRecord],
    company: &CompanyProfile,
) -> CarbonFootprint {
    let mut scope1 = 0.0;
    let mut scope2 = 0.0;
    let mut total_floor_area = 0.0;

    for location in locations {
        total_floor_area += location.total_floor_area.unwrap_or(0.0);
        scope1 += scope1_emissions(factors, location);
        scope2 += scope2_emissions(factors, location);
    }

    let total_annual = scope1 + scope2;

    // An undeclared headcount reports the absolute total as the per-employee
    // figure rather than suppressing it.
    let employees = company.employees.unwrap_or(1);
    let emissions_per_sqm = if total_floor_area > 0.0 {
        total_annual / total_floor_area
    } else {
        0.0
    };
    let emissions_per_employee = if employees > 0 {
        total_annual / employees as f64
    } else {
        0.0
    };

    tracing::debug!(total_annual, scope1, scope2, "carbon footprint computed");

    CarbonFootprint {
        total_annual,
        scope1,
        scope2,
        emissions_per_sqm,
        emissions_per_employee,
    }
}

fn scope1_emissions(factors: &EmissionFactors, location: &LocationRecord) -> f64 {
    location.annual_consumption(UtilityKind::NaturalGas) * factors.natural_gas_kg / KG_PER_TONNE
        + location.annual_consumption(UtilityKind::Lpg) * factors.lpg_kg / KG_PER_TONNE
}

fn scope2_emissions(factors: &EmissionFactors, location: &LocationRecord) -> f64 {
    location.annual_consumption(UtilityKind::Electricity) * factors.electricity_kwh / KG_PER_TONNE
        + location.annual_consumption(UtilityKind::DistrictCooling) * factors.district_cooling_kwh
            / KG_PER_TONNE
}
