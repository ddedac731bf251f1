use serde::{Deserialize, Serialize};

use crate::assessment::domain::{BusinessSector, EsgCategory};

/// Relative importance of each ESG dimension for one sector. Every triple
/// must sum to 1.0; [`crate::config::EngineConfig::validate`] enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorWeights {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

impl SectorWeights {
    pub const fn new(environmental: f64, social: f64, governance: f64) -> Self {
        Self {
            environmental,
            social,
            governance,
        }
    }

    pub fn sum(&self) -> f64 {
        self.environmental + self.social + self.governance
    }

    pub fn for_category(&self, category: EsgCategory) -> f64 {
        match category {
            EsgCategory::Environmental => self.environmental,
            EsgCategory::Social => self.social,
            EsgCategory::Governance => self.governance,
        }
    }
}

/// Static per-sector weighting table. Sectors without an entry, and
/// unrecognized or missing sectors, fall back to a neutral weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorWeightTable {
    entries: Vec<(BusinessSector, SectorWeights)>,
    fallback: SectorWeights,
}

impl Default for SectorWeightTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (
                    BusinessSector::Hospitality,
                    SectorWeights::new(0.45, 0.35, 0.20),
                ),
                (
                    BusinessSector::Manufacturing,
                    SectorWeights::new(0.50, 0.30, 0.20),
                ),
                (
                    BusinessSector::Construction,
                    SectorWeights::new(0.45, 0.35, 0.20),
                ),
                (
                    BusinessSector::Healthcare,
                    SectorWeights::new(0.35, 0.45, 0.20),
                ),
                (
                    BusinessSector::Education,
                    SectorWeights::new(0.30, 0.50, 0.20),
                ),
                (
                    BusinessSector::Logistics,
                    SectorWeights::new(0.50, 0.25, 0.25),
                ),
            ],
            fallback: SectorWeights::new(0.40, 0.30, 0.30),
        }
    }
}

impl SectorWeightTable {
    pub fn new(entries: Vec<(BusinessSector, SectorWeights)>, fallback: SectorWeights) -> Self {
        Self { entries, fallback }
    }

    pub fn weights_for(&self, sector: Option<BusinessSector>) -> &SectorWeights {
        sector
            .and_then(|sector| {
                self.entries
                    .iter()
                    .find(|(entry, _)| *entry == sector)
                    .map(|(_, weights)| weights)
            })
            .unwrap_or(&self.fallback)
    }

    pub fn entries(&self) -> impl Iterator<Item = (BusinessSector, &SectorWeights)> {
        self.entries.iter().map(|(sector, weights)| (*sector, weights))
    }

    pub fn fallback(&self) -> &SectorWeights {
        &self.fallback
    }
}
