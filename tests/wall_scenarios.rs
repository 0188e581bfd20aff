//! End-to-end planning scenarios through the public API.

use ledwall_planner::config::{load_config, PlanningConfig};
use ledwall_planner::error::PlanError;
use ledwall_planner::planning::distribution::{assign_balanced, group_counts};
use ledwall_planner::planning::hierarchy::group_circuits;
use ledwall_planner::planning::{Environment, PlanRequest, Planner, ResolutionClass};

// =============================================================================
// Reference Wall
// =============================================================================

#[test]
fn test_reference_indoor_wall() {
    let planner = Planner::default();
    let result = planner
        .calculator()
        .calculate(&PlanRequest::new(5000.0, 3000.0, 2.5, Environment::Indoor))
        .expect("reference wall should calculate");

    assert_eq!(result.cabinets_width, 10);
    assert_eq!(result.cabinets_height, 3);
    assert_eq!(result.total_cabinets, 30);
    assert_eq!((result.resolution_width, result.resolution_height), (2000, 1200));
    assert_eq!(result.resolution_class, ResolutionClass::Fhd);
    assert_eq!(result.lan_ports, 5);
    assert_eq!(result.controller, "VX16s");
    assert!((result.peak_power_watts - 7500.0).abs() < 1e-9);
    assert!((result.supply_amps - 34.09).abs() < 0.01);
    assert_eq!(result.circuits, 3);
    assert!((result.main_breaker_amps - 50.0).abs() < f64::EPSILON);
    assert!((result.area_sq_m - 15.0).abs() < 1e-9);
}

#[test]
fn test_reference_wall_distribution_has_zero_variance() {
    let plan = Planner::default()
        .plan(&PlanRequest::new(5000.0, 3000.0, 2.5, Environment::Indoor))
        .expect("reference wall should plan");

    assert!(plan.ports.iter().all(|p| p.cabinet_count == 6));
    assert!(plan.circuits.iter().all(|c| c.cabinet_count == 10));
}

#[test]
fn test_eleven_items_over_four_groups() {
    let counts = group_counts(&assign_balanced(11, 4).unwrap(), 4);
    assert_eq!(counts, vec![3, 3, 3, 2]);
}

#[test]
fn test_three_circuits_make_one_block() {
    let plan = Planner::default()
        .plan(&PlanRequest::new(5000.0, 3000.0, 2.5, Environment::Indoor))
        .unwrap();
    assert_eq!(plan.circuits.len(), 3);
    assert_eq!(plan.blocks.len(), 1);
    assert_eq!(plan.blocks[0].circuit_ids, vec![0, 1, 2]);

    let direct = group_circuits(&plan.circuits, 6, &[32.0, 40.0, 63.0], 1.25);
    assert_eq!(direct, plan.blocks);
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn test_zero_dimensions_are_rejected() {
    let planner = Planner::default();
    for (w, h) in [(0.0, 3000.0), (5000.0, 0.0)] {
        let err = planner
            .plan(&PlanRequest::new(w, h, 2.5, Environment::Indoor))
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidDimension { .. }));

        let err = planner.compare(w, h, Environment::Indoor).unwrap_err();
        assert!(matches!(err, PlanError::InvalidDimension { .. }));
    }
}

#[test]
fn test_wall_beyond_integer_range_is_rejected() {
    let err = Planner::default()
        .plan(&PlanRequest::new(1e19, 1e19, 1.2, Environment::Indoor))
        .unwrap_err();
    assert!(matches!(err, PlanError::WallTooLarge { .. }));
    assert!(err.to_string().contains("exceeds"));
}

#[test]
fn test_unsupported_pitch_is_rejected() {
    let err = Planner::default()
        .plan(&PlanRequest::new(5000.0, 3000.0, 3.0, Environment::Indoor))
        .unwrap_err();
    assert!(matches!(err, PlanError::UnsupportedPitch { .. }));
}

// =============================================================================
// Large Walls
// =============================================================================

#[test]
fn test_large_outdoor_wall_uses_multiple_controllers() {
    // 30 m x 10 m at 2.5 mm: 60 x 10 cabinets, 6 per port
    let plan = Planner::default()
        .plan(&PlanRequest::new(30_000.0, 10_000.0, 2.5, Environment::Outdoor))
        .unwrap();

    assert_eq!(plan.result.total_cabinets, 600);
    assert_eq!(plan.result.lan_ports, 100);
    assert_eq!(plan.result.controller, "Multiple VX16s");
    assert_eq!(plan.result.controller_units, 7);
    assert_eq!(plan.result.resolution_class, ResolutionClass::Uhd4k);

    // 7 cabinets per outdoor circuit, 86 circuits, 15 blocks
    assert_eq!(plan.result.circuits, 86);
    assert_eq!(plan.blocks.len(), 15);
    assert_eq!(plan.blocks.last().unwrap().circuit_ids, vec![84, 85]);
    assert!(plan.result.main_breaker_at_ceiling);
}

#[test]
fn test_width_just_past_a_cabinet_edge_adds_a_column() {
    let result = Planner::default()
        .calculator()
        .calculate(&PlanRequest::new(5000.000_000_1, 3000.0, 2.5, Environment::Indoor))
        .unwrap();
    assert_eq!(result.cabinets_width, 11);
    assert_eq!(result.total_cabinets, 33);
}

#[test]
fn test_single_cabinet_wall() {
    let plan = Planner::default()
        .plan(&PlanRequest::new(400.0, 800.0, 10.0, Environment::Indoor))
        .unwrap();

    assert_eq!(plan.result.total_cabinets, 1);
    assert_eq!(plan.result.lan_ports, 1);
    assert_eq!(plan.result.controller, "TB20");
    assert_eq!(plan.result.circuits, 1);
    assert_eq!(plan.result.resolution_class, ResolutionClass::Sd);
    assert_eq!(plan.cells.len(), 1);
    assert!((plan.result.main_breaker_amps - 20.0).abs() < f64::EPSILON);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_custom_config_changes_results() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "planning": {
                "supply_voltage": 230,
                "circuits_per_block": 2,
                "supported_pitches": [2.5, 3.9]
            }
        }"#,
    )
    .expect("Failed to write config");

    let config = load_config(Some(&path)).expect("config should load");
    let planner = Planner::new(config.planning);

    let results = planner.compare(5000.0, 3000.0, Environment::Indoor).unwrap();
    assert_eq!(results.len(), 2);

    let plan = planner
        .plan(&PlanRequest::new(5000.0, 3000.0, 2.5, Environment::Indoor))
        .unwrap();
    assert!((plan.result.supply_amps - 7500.0 / 230.0).abs() < 1e-9);
    assert_eq!(plan.blocks.len(), 2);
}

#[test]
fn test_config_tables_are_swappable() {
    let config = PlanningConfig {
        main_breaker_sizes: vec![16.0, 32.0, 63.0, 125.0],
        ..PlanningConfig::default()
    };
    let result = Planner::new(config)
        .plan(&PlanRequest::new(5000.0, 3000.0, 2.5, Environment::Indoor))
        .unwrap()
        .result;
    assert!((result.main_breaker_amps - 63.0).abs() < f64::EPSILON);
}

#[test]
fn test_example_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/example-config.json");
    let config = load_config(Some(&path)).expect("example config should load");

    let defaults = PlanningConfig::default();
    assert_eq!(config.planning.main_breaker_sizes, defaults.main_breaker_sizes);
    assert_eq!(config.planning.block_breaker_sizes, defaults.block_breaker_sizes);
    assert_eq!(config.planning.supported_pitches, defaults.supported_pitches);
    assert_eq!(config.planning.max_pixels_per_port, defaults.max_pixels_per_port);
    assert_eq!(config.planning.circuits_per_block, defaults.circuits_per_block);
}
