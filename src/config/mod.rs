//! Static engine configuration: emission factors, sector weights, benchmark
//! bands, and validation policy. Tables load once into read-only structures
//! and are validated at engine construction, keeping every assessment call
//! lock-free.

use serde::{Deserialize, Serialize};

use crate::assessment::benchmark::BenchmarkTable;
use crate::assessment::footprint::EmissionFactors;
use crate::assessment::scoring::SectorWeightTable;
use crate::assessment::validation::ValidationPolicy;

/// Tolerance when checking that a sector weight triple sums to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

const FALLBACK_SECTOR: &str = "fallback";

/// Complete static configuration. `Default` carries the built-in tables the
/// assessment methodology was calibrated with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub factors: EmissionFactors,
    pub weights: SectorWeightTable,
    pub benchmarks: BenchmarkTable,
    pub policy: ValidationPolicy,
}

impl EngineConfig {
    /// Enforce the static contracts the engines rely on. Business data never
    /// fails an assessment, but a broken table would skew every result, so
    /// it fails loudly here instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (sector, weights) in self.weights.entries() {
            let sum = weights.sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(ConfigError::WeightsNotNormalized {
                    sector: sector.label(),
                    sum,
                });
            }
        }
        let fallback_sum = self.weights.fallback().sum();
        if (fallback_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightsNotNormalized {
                sector: FALLBACK_SECTOR,
                sum: fallback_sum,
            });
        }

        for (sector, benchmarks) in self.benchmarks.entries() {
            let metrics = [
                ("electricity", &benchmarks.electricity),
                ("water", &benchmarks.water),
                ("carbon", &benchmarks.carbon),
            ];
            for (metric, bands) in metrics {
                if !bands.is_ordered() {
                    return Err(ConfigError::UnorderedBands {
                        sector: sector.label(),
                        metric,
                    });
                }
            }
        }

        for (name, value) in self.factors.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidEmissionFactor { name, value });
            }
        }

        let penalties = [
            ("error_penalty", self.policy.error_penalty),
            ("warning_penalty", self.policy.warning_penalty),
            ("info_penalty", self.policy.info_penalty),
        ];
        for (name, value) in penalties {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPenalty { name, value });
            }
        }

        Ok(())
    }
}

/// Contract violations in the static configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("sector weights for '{sector}' sum to {sum:.4}, expected 1.0")]
    WeightsNotNormalized { sector: &'static str, sum: f64 },
    #[error("benchmark bands for '{sector}' {metric} are not ordered efficient <= average <= inefficient")]
    UnorderedBands {
        sector: &'static str,
        metric: &'static str,
    },
    #[error("emission factor '{name}' must be finite and non-negative, found {value}")]
    InvalidEmissionFactor { name: &'static str, value: f64 },
    #[error("validation penalty '{name}' must be finite and non-negative, found {value}")]
    InvalidPenalty { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::benchmark::{IntensityBands, SectorBenchmarks};
    use crate::assessment::domain::BusinessSector;
    use crate::assessment::scoring::SectorWeights;
    use crate::assessment::AssessmentEngine;

    #[test]
    fn built_in_tables_satisfy_the_contract() {
        EngineConfig::default()
            .validate()
            .expect("built-in configuration is valid");
    }

    #[test]
    fn every_sector_weight_triple_sums_to_one() {
        let config = EngineConfig::default();
        for (sector, weights) in config.weights.entries() {
            assert!(
                (weights.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE,
                "weights for {} sum to {}",
                sector.label(),
                weights.sum()
            );
        }
        assert!((config.weights.fallback().sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn engine_construction_rejects_unordered_bands() {
        let mut config = EngineConfig::default();
        config.benchmarks = BenchmarkTable::new(vec![(
            BusinessSector::Hospitality,
            SectorBenchmarks {
                electricity: IntensityBands::new(150.0, 100.0, 200.0),
                water: IntensityBands::new(300.0, 500.0, 700.0),
                carbon: IntensityBands::new(50.0, 75.0, 100.0),
            },
        )]);

        let err = AssessmentEngine::with_config(config).expect_err("unordered bands rejected");
        assert!(matches!(
            err,
            ConfigError::UnorderedBands {
                sector: "hospitality",
                metric: "electricity",
            }
        ));
    }

    #[test]
    fn engine_construction_rejects_unnormalized_weights() {
        let mut config = EngineConfig::default();
        config.weights = SectorWeightTable::new(Vec::new(), SectorWeights::new(0.4, 0.3, 0.5));

        let err = AssessmentEngine::with_config(config).expect_err("bad weights rejected");
        assert!(matches!(
            err,
            ConfigError::WeightsNotNormalized {
                sector: "fallback",
                ..
            }
        ));
    }

    #[test]
    fn engine_construction_rejects_negative_emission_factor() {
        let mut config = EngineConfig::default();
        config.factors.lpg_kg = -1.0;
        let err = AssessmentEngine::with_config(config).expect_err("negative factor rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidEmissionFactor { name: "lpg_kg", .. }
        ));
    }
}
