use serde::{Deserialize, Serialize};

/// Grid and fuel emission factors, kg CO2e per unit of consumption
/// (kWh for electricity and cooling, kg for gas and LPG, litres for fleet
/// fuels). Defaults reflect the UAE grid averages the methodology was
/// calibrated against; swap the table to retarget another region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    pub electricity_kwh: f64,
    pub natural_gas_kg: f64,
    pub lpg_kg: f64,
    pub district_cooling_kwh: f64,
    /// Reserved for fleet reporting; no utility feeds these yet.
    pub diesel_litre: f64,
    pub petrol_litre: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            electricity_kwh: 0.469,
            natural_gas_kg: 2.75,
            lpg_kg: 3.03,
            district_cooling_kwh: 0.385,
            diesel_litre: 2.68,
            petrol_litre: 2.31,
        }
    }
}

impl EmissionFactors {
    pub(crate) fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("electricity_kwh", self.electricity_kwh),
            ("natural_gas_kg", self.natural_gas_kg),
            ("lpg_kg", self.lpg_kg),
            ("district_cooling_kwh", self.district_cooling_kwh),
            ("diesel_litre", self.diesel_litre),
            ("petrol_litre", self.petrol_litre),
        ]
    }
}
