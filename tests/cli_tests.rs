//! Integration tests for the campus-nav CLI
//!
//! These tests run the campus-nav binary and check output and exit codes.

mod common;

use common::{campus_nav, TRIANGLE_MAP};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    campus_nav()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: campus-nav"))
        .stdout(predicate::str::contains("map"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("locations"));
}

#[test]
fn test_version_flag() {
    campus_nav()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Path queries on the built-in campus map
// ============================================================================

#[test]
fn test_path_by_distance_on_campus() {
    campus_nav()
        .args(["path", "I3", "Old_Mess", "--by", "distance"])
        .assert()
        .success()
        .stdout("I3 -> I2 -> Old_Mess\nTotal distance: 0.110 km\n");
}

#[test]
fn test_path_by_hops_on_campus() {
    campus_nav()
        .args(["path", "G6", "LHC1", "--by", "hops"])
        .assert()
        .success()
        .stdout("G6 -> Tapri -> LHC1\nTotal hops: 2\n");
}

#[test]
fn test_path_defaults_to_distance() {
    campus_nav()
        .args(["path", "I3", "I2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 0.060 km"));
}

#[test]
fn test_unknown_location_exit_code() {
    campus_nav()
        .args(["path", "I3", "Library"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("location not found: Library"));
}

#[test]
fn test_unknown_location_json_error() {
    campus_nav()
        .args(["--format", "json", "path", "Library", "I3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"vertex_not_found\""));
}

#[test]
fn test_bad_algorithm_is_usage_error() {
    campus_nav()
        .args(["path", "I3", "I2", "--by", "astar"])
        .assert()
        .code(2);
}

#[test]
fn test_bad_algorithm_with_json_format() {
    campus_nav()
        .args(["--format", "json", "path", "I3", "I2", "--by", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

#[test]
fn test_uppercase_json_format_gets_json_error() {
    campus_nav()
        .args(["--format", "JSON", "path", "I3", "I2", "--by", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

// ============================================================================
// Custom map files
// ============================================================================

#[test]
fn test_hops_and_distance_diverge_on_map_file() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("map.toml");
    fs::write(&map, TRIANGLE_MAP).unwrap();

    campus_nav()
        .arg("--map")
        .arg(&map)
        .args(["path", "A", "C", "--by", "hops"])
        .assert()
        .success()
        .stdout("A -> C\nTotal hops: 1\n");

    campus_nav()
        .arg("--map")
        .arg(&map)
        .args(["path", "A", "C", "--by", "distance"])
        .assert()
        .success()
        .stdout("A -> B -> C\nTotal distance: 2.000 km\n");
}

#[test]
fn test_disconnected_is_no_path() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("map.toml");
    fs::write(&map, TRIANGLE_MAP).unwrap();

    campus_nav()
        .arg("--map")
        .arg(&map)
        .args(["path", "A", "Island"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no route found from A to Island"));
}

#[test]
fn test_negative_distance_in_map_rejected() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("map.toml");
    fs::write(
        &map,
        "[[edges]]\nfrom = \"A\"\nto = \"B\"\ndistance = -1.0\n",
    )
    .unwrap();

    campus_nav()
        .arg("--map")
        .arg(&map)
        .args(["path", "A", "B"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge A -> B"));
}

#[test]
fn test_path_json_output() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("map.toml");
    fs::write(&map, TRIANGLE_MAP).unwrap();

    let output = campus_nav()
        .arg("--map")
        .arg(&map)
        .args(["--format", "json", "path", "A", "C", "--by", "distance"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "distance");
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["total_distance"], 2.0);
}

#[test]
fn test_path_records_output() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("map.toml");
    fs::write(&map, TRIANGLE_MAP).unwrap();

    campus_nav()
        .arg("--map")
        .arg(&map)
        .args(["--format", "records", "path", "A", "C", "--by", "hops"])
        .assert()
        .success()
        .stdout("R algorithm=hops from=A to=C hops=1\nS 0 A\nS 1 C\n");
}

// ============================================================================
// Map and locations
// ============================================================================

#[test]
fn test_map_command_lists_adjacency() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("map.toml");
    fs::write(&map, TRIANGLE_MAP).unwrap();

    campus_nav()
        .arg("--map")
        .arg(&map)
        .args(["--quiet", "map"])
        .assert()
        .success()
        .stdout(
            "  Island -> \n  A -> C(5 km), B(1 km)\n  B -> C(1 km), A(1 km)\n  C -> A(5 km), B(1 km)\n",
        );
}

#[test]
fn test_campus_map_command() {
    campus_nav()
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains("Adjacency lists (38 locations):"))
        .stdout(predicate::str::contains(
            "  Tapri -> B3(0.12 km), LHC1(0.08 km), B6(0.1 km), G6(0.05 km)\n",
        ));
}

#[test]
fn test_campus_locations() {
    campus_nav()
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Messes: Old_Mess, New_Mess\n"))
        .stdout(predicate::str::contains("LHCs: LHC1, LHC2\n"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_sets_precision_unit_and_algorithm() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "unit = \"kilometres\"\nprecision = 1\ndefault_algorithm = \"distance\"\n",
    )
    .unwrap();

    campus_nav()
        .arg("--config")
        .arg(&config)
        .args(["path", "I3", "Old_Mess"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 0.1 kilometres"));
}

#[test]
fn test_config_file_map_is_relative_to_config() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("maps")).unwrap();
    fs::write(dir.path().join("maps/triangle.toml"), TRIANGLE_MAP).unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "map = \"maps/triangle.toml\"\ndefault_algorithm = \"hops\"\n").unwrap();

    campus_nav()
        .arg("--config")
        .arg(&config)
        .args(["path", "A", "C"])
        .assert()
        .success()
        .stdout("A -> C\nTotal hops: 1\n");
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "precision = 5\n").unwrap();

    campus_nav()
        .env("CAMPUS_NAV_CONFIG_DIR", dir.path())
        .args(["path", "I3", "I2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 0.06000 km"));
}

#[test]
fn test_neighbor_order_flag_changes_tie_break() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("map.toml");
    fs::write(
        &map,
        r#"
[[edges]]
from = "S"
to = "L"
distance = 1.0

[[edges]]
from = "L"
to = "T"
distance = 1.0

[[edges]]
from = "S"
to = "R"
distance = 1.0

[[edges]]
from = "R"
to = "T"
distance = 1.0
"#,
    )
    .unwrap();

    campus_nav()
        .arg("--map")
        .arg(&map)
        .args(["path", "S", "T", "--by", "hops"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("S -> R -> T\n"));

    campus_nav()
        .arg("--map")
        .arg(&map)
        .args(["--neighbor-order", "insertion", "path", "S", "T", "--by", "hops"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("S -> L -> T\n"));
}

// ============================================================================
// Interactive menu
// ============================================================================

#[test]
fn test_interactive_session() {
    campus_nav()
        .args(["--quiet", "interactive"])
        .write_stdin("2\nG6\nLHC1\n3\nI3\nOld_Mess\nx\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("G6 -> Tapri -> LHC1\nTotal hops: 2\n"))
        .stdout(predicate::str::contains(
            "I3 -> I2 -> Old_Mess\nTotal distance: 0.110 km\n",
        ))
        .stdout(predicate::str::contains("Invalid input."))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_no_command_starts_menu() {
    campus_nav()
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("MAIN MENU"))
        .stdout(predicate::str::contains("Departments: CSE"));
}
