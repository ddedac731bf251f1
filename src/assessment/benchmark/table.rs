use serde::{Deserialize, Serialize};

use super::PerformanceBand;
use crate::assessment::domain::BusinessSector;

/// Annual intensity thresholds for one metric. At or below `efficient` is
/// efficient, at or below `average` is average, anything above is
/// inefficient; the `inefficient` figure documents the band ceiling for
/// reporting and is not a cut-off itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityBands {
    pub efficient: f64,
    pub average: f64,
    pub inefficient: f64,
}

impl IntensityBands {
    pub const fn new(efficient: f64, average: f64, inefficient: f64) -> Self {
        Self {
            efficient,
            average,
            inefficient,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.efficient <= self.average && self.average <= self.inefficient
    }

    pub fn classify(&self, value: f64) -> PerformanceBand {
        if value <= self.efficient {
            PerformanceBand::Efficient
        } else if value <= self.average {
            PerformanceBand::Average
        } else {
            PerformanceBand::Inefficient
        }
    }
}

/// Benchmark bands for one sector: electricity in kWh/sqm/year, water in
/// L/sqm/year, carbon in kg CO2e/sqm/year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorBenchmarks {
    pub electricity: IntensityBands,
    pub water: IntensityBands,
    pub carbon: IntensityBands,
}

/// Static per-sector benchmark table. Sectors without survey coverage
/// (retail, professional services) have no entry and compare as unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTable {
    entries: Vec<(BusinessSector, SectorBenchmarks)>,
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (
                    BusinessSector::Hospitality,
                    SectorBenchmarks {
                        electricity: IntensityBands::new(100.0, 150.0, 200.0),
                        water: IntensityBands::new(300.0, 500.0, 700.0),
                        carbon: IntensityBands::new(50.0, 75.0, 100.0),
                    },
                ),
                (
                    BusinessSector::Manufacturing,
                    SectorBenchmarks {
                        electricity: IntensityBands::new(200.0, 300.0, 400.0),
                        water: IntensityBands::new(100.0, 200.0, 300.0),
                        carbon: IntensityBands::new(100.0, 150.0, 200.0),
                    },
                ),
                (
                    BusinessSector::Construction,
                    SectorBenchmarks {
                        electricity: IntensityBands::new(80.0, 120.0, 160.0),
                        water: IntensityBands::new(150.0, 250.0, 350.0),
                        carbon: IntensityBands::new(40.0, 60.0, 80.0),
                    },
                ),
                (
                    BusinessSector::Education,
                    SectorBenchmarks {
                        electricity: IntensityBands::new(60.0, 90.0, 120.0),
                        water: IntensityBands::new(200.0, 300.0, 400.0),
                        carbon: IntensityBands::new(30.0, 45.0, 60.0),
                    },
                ),
                (
                    BusinessSector::Healthcare,
                    SectorBenchmarks {
                        electricity: IntensityBands::new(250.0, 350.0, 450.0),
                        water: IntensityBands::new(400.0, 600.0, 800.0),
                        carbon: IntensityBands::new(120.0, 170.0, 220.0),
                    },
                ),
                (
                    BusinessSector::Logistics,
                    SectorBenchmarks {
                        electricity: IntensityBands::new(40.0, 60.0, 80.0),
                        water: IntensityBands::new(50.0, 100.0, 150.0),
                        // Fleet-heavy operations carry higher carbon bands.
                        carbon: IntensityBands::new(200.0, 300.0, 400.0),
                    },
                ),
            ],
        }
    }
}

impl BenchmarkTable {
    pub fn new(entries: Vec<(BusinessSector, SectorBenchmarks)>) -> Self {
        Self { entries }
    }

    pub fn benchmarks_for(&self, sector: Option<BusinessSector>) -> Option<&SectorBenchmarks> {
        sector.and_then(|sector| {
            self.entries
                .iter()
                .find(|(entry, _)| *entry == sector)
                .map(|(_, benchmarks)| benchmarks)
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = (BusinessSector, &SectorBenchmarks)> {
        self.entries
            .iter()
            .map(|(sector, benchmarks)| (*sector, benchmarks))
    }
}
