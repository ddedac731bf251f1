use super::common::*;
use crate::assessment::benchmark::{IntensityBands, PerformanceBand};
use crate::assessment::domain::{BusinessSector, LocationRecord, UtilityKind};

fn hotel_location(monthly_electricity: f64, monthly_water: f64, area: f64) -> LocationRecord {
    LocationRecord {
        name: "Marina Tower".to_string(),
        total_floor_area: Some(area),
        utilities: [
            (UtilityKind::Electricity, reading(monthly_electricity)),
            (UtilityKind::Water, reading(monthly_water)),
        ]
        .into_iter()
        .collect(),
    }
}

fn all_unknown(comparison: &crate::assessment::BenchmarkComparison) -> bool {
    comparison.electricity_performance == PerformanceBand::Unknown
        && comparison.water_performance == PerformanceBand::Unknown
        && comparison.carbon_performance == PerformanceBand::Unknown
        && comparison.overall_ranking == PerformanceBand::Unknown
}

#[test]
fn missing_sector_compares_as_unknown() {
    let locations = vec![hotel_location(8_000.0, 20.0, 1_000.0)];
    let footprint = engine().footprint(&locations, &hospitality_company());

    let comparison = engine().compare_to_benchmarks(&locations, &footprint, None);
    assert!(all_unknown(&comparison));
}

#[test]
fn sector_without_bands_compares_as_unknown() {
    let locations = vec![hotel_location(8_000.0, 20.0, 1_000.0)];
    let footprint = engine().footprint(&locations, &hospitality_company());

    let comparison =
        engine().compare_to_benchmarks(&locations, &footprint, Some(BusinessSector::Retail));
    assert!(all_unknown(&comparison));
}

#[test]
fn zero_floor_area_compares_as_unknown() {
    let mut location = hotel_location(8_000.0, 20.0, 1_000.0);
    location.total_floor_area = None;
    let locations = vec![location];
    let footprint = engine().footprint(&locations, &hospitality_company());

    let comparison = engine().compare_to_benchmarks(
        &locations,
        &footprint,
        Some(BusinessSector::Hospitality),
    );
    assert!(all_unknown(&comparison));
}

#[test]
fn lean_hotel_ranks_efficient_across_the_board() {
    // 96 kWh/sqm, 240 L/sqm, 45.02 kg CO2e/sqm: all inside the efficient
    // hospitality bands.
    let locations = vec![hotel_location(8_000.0, 20.0, 1_000.0)];
    let footprint = engine().footprint(&locations, &hospitality_company());

    let comparison = engine().compare_to_benchmarks(
        &locations,
        &footprint,
        Some(BusinessSector::Hospitality),
    );

    assert_eq!(comparison.electricity_performance, PerformanceBand::Efficient);
    assert_eq!(comparison.water_performance, PerformanceBand::Efficient);
    assert_eq!(comparison.carbon_performance, PerformanceBand::Efficient);
    assert_eq!(comparison.overall_ranking, PerformanceBand::Efficient);
}

#[test]
fn heavy_consumption_ranks_inefficient() {
    // 300 kWh/sqm and 960 L/sqm blow past the hospitality average bands.
    let locations = vec![hotel_location(25_000.0, 80.0, 1_000.0)];
    let footprint = engine().footprint(&locations, &hospitality_company());

    let comparison = engine().compare_to_benchmarks(
        &locations,
        &footprint,
        Some(BusinessSector::Hospitality),
    );

    assert_eq!(comparison.electricity_performance, PerformanceBand::Inefficient);
    assert_eq!(comparison.water_performance, PerformanceBand::Inefficient);
    assert_eq!(comparison.carbon_performance, PerformanceBand::Inefficient);
    assert_eq!(comparison.overall_ranking, PerformanceBand::Inefficient);
}

#[test]
fn mixed_performance_averages_out() {
    // Electricity efficient (96), water inefficient (960 L), carbon
    // efficient (45.02 kg): mean (3 + 1 + 3) / 3 = 2.33 -> average.
    let locations = vec![hotel_location(8_000.0, 80.0, 1_000.0)];
    let footprint = engine().footprint(&locations, &hospitality_company());

    let comparison = engine().compare_to_benchmarks(
        &locations,
        &footprint,
        Some(BusinessSector::Hospitality),
    );

    assert_eq!(comparison.electricity_performance, PerformanceBand::Efficient);
    assert_eq!(comparison.water_performance, PerformanceBand::Inefficient);
    assert_eq!(comparison.carbon_performance, PerformanceBand::Efficient);
    assert_eq!(comparison.overall_ranking, PerformanceBand::Average);
}

#[test]
fn band_classification_is_inclusive_at_thresholds() {
    let bands = IntensityBands::new(100.0, 150.0, 200.0);

    assert_eq!(bands.classify(100.0), PerformanceBand::Efficient);
    assert_eq!(bands.classify(100.1), PerformanceBand::Average);
    assert_eq!(bands.classify(150.0), PerformanceBand::Average);
    assert_eq!(bands.classify(150.1), PerformanceBand::Inefficient);
}

#[test]
fn water_intensity_converts_cubic_metres_to_litres() {
    // 25 m3/month * 12 = 300 m3/year over 1000 sqm = 300 L/sqm/year,
    // exactly on the efficient hospitality band edge.
    let locations = vec![hotel_location(8_000.0, 25.0, 1_000.0)];
    let footprint = engine().footprint(&locations, &hospitality_company());

    let comparison = engine().compare_to_benchmarks(
        &locations,
        &footprint,
        Some(BusinessSector::Hospitality),
    );
    assert_eq!(comparison.water_performance, PerformanceBand::Efficient);
}
