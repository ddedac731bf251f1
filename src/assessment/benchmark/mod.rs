//! Classification of computed utility and carbon intensities against the
//! sector benchmark table.

mod table;

pub use table::{BenchmarkTable, IntensityBands, SectorBenchmarks};

use serde::{Deserialize, Serialize};

use super::domain::{BusinessSector, LocationRecord, UtilityKind};
use super::footprint::{CarbonFootprint, KG_PER_TONNE};

const LITRES_PER_CUBIC_METRE: f64 = 1000.0;

// Overall ranking: average the per-metric points and bucket the mean.
const EFFICIENT_MEAN: f64 = 2.5;
const AVERAGE_MEAN: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    Efficient,
    Average,
    Inefficient,
    Unknown,
}

impl PerformanceBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Efficient => "efficient",
            Self::Average => "average",
            Self::Inefficient => "inefficient",
            Self::Unknown => "unknown",
        }
    }

    const fn points(self) -> f64 {
        match self {
            Self::Efficient => 3.0,
            Self::Average => 2.0,
            Self::Inefficient => 1.0,
            Self::Unknown => 0.0,
        }
    }
}

/// Per-metric classification plus the overall ranking. Everything is
/// `unknown` when the sector has no benchmark entry or no floor area was
/// declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub electricity_performance: PerformanceBand,
    pub water_performance: PerformanceBand,
    pub carbon_performance: PerformanceBand,
    pub overall_ranking: PerformanceBand,
}

impl BenchmarkComparison {
    const fn unknown() -> Self {
        Self {
            electricity_performance: PerformanceBand::Unknown,
            water_performance: PerformanceBand::Unknown,
            carbon_performance: PerformanceBand::Unknown,
            overall_ranking: PerformanceBand::Unknown,
        }
    }
}

pub(crate) fn compare(
    table: &BenchmarkTable,
    locations: &[LocationRecord],
    footprint: &CarbonFootprint,
    sector: Option<BusinessSector>,
) -> BenchmarkComparison {
    let Some(benchmarks) = table.benchmarks_for(sector) else {
        return BenchmarkComparison::unknown();
    };

    let total_floor_area: f64 = locations
        .iter()
        .map(|location| location.total_floor_area.unwrap_or(0.0))
        .sum();
    if total_floor_area == 0.0 {
        return BenchmarkComparison::unknown();
    }

    let annual_electricity: f64 = locations
        .iter()
        .map(|location| location.annual_consumption(UtilityKind::Electricity))
        .sum();
    let annual_water: f64 = locations
        .iter()
        .map(|location| location.annual_consumption(UtilityKind::Water))
        .sum();

    let electricity_intensity = annual_electricity / total_floor_area;
    // Water is metered in cubic metres; the bands are in litres.
    let water_intensity = annual_water * LITRES_PER_CUBIC_METRE / total_floor_area;
    let carbon_intensity = footprint.emissions_per_sqm * KG_PER_TONNE;

    let electricity_performance = benchmarks.electricity.classify(electricity_intensity);
    let water_performance = benchmarks.water.classify(water_intensity);
    let carbon_performance = benchmarks.carbon.classify(carbon_intensity);

    let mean = (electricity_performance.points()
        + water_performance.points()
        + carbon_performance.points())
        / 3.0;
    let overall_ranking = if mean >= EFFICIENT_MEAN {
        PerformanceBand::Efficient
    } else if mean >= AVERAGE_MEAN {
        PerformanceBand::Average
    } else {
        PerformanceBand::Inefficient
    };

    BenchmarkComparison {
        electricity_performance,
        water_performance,
        carbon_performance,
        overall_ranking,
    }
}
