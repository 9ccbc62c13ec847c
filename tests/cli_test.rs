use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: a command for the hopgraph binary.
fn hopgraph() -> Command {
    Command::cargo_bin("hopgraph").expect("binary should build")
}

#[test]
fn test_demo_prints_example_results() {
    hopgraph()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Connected components: 2"))
        .stdout(predicate::str::contains("Shortest path from 0 to 3: 3"));
}

#[test]
fn test_components_human_output() {
    hopgraph()
        .args([
            "components", "--vertices", "5", "--edge", "0,1", "--edge", "1,2", "--edge", "3,4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connected components: 2"));
}

#[test]
fn test_components_members_listing() {
    hopgraph()
        .args([
            "components", "--vertices", "5", "--edge", "0,1", "--edge", "1,2", "--edge", "3,4",
            "--members",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("component 0: 0 1 2"))
        .stdout(predicate::str::contains("component 1: 3 4"));
}

#[test]
fn test_components_json_output() {
    hopgraph()
        .args([
            "components", "--vertices", "5", "--edge", "0,1", "--edge", "1,2", "--edge", "3,4",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"component_count\": 2"));
}

#[test]
fn test_path_human_output() {
    hopgraph()
        .args([
            "path", "--vertices", "6", "--edge", "0,1", "--edge", "1,2", "--edge", "2,3",
            "--edge", "0,4", "--edge", "4,5", "--start", "0", "--end", "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest path from 0 to 3: 3"));
}

#[test]
fn test_path_route_listing() {
    hopgraph()
        .args([
            "path", "--vertices", "6", "--edge", "0,1", "--edge", "1,2", "--edge", "2,3",
            "--start", "0", "--end", "3", "--route",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("route: 0 -> 1 -> 2 -> 3"));
}

#[test]
fn test_path_not_found_message() {
    hopgraph()
        .args([
            "path", "--vertices", "2", "--edge", "0,1", "--start", "1", "--end", "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 1 to 0"));
}

#[test]
fn test_path_json_null_when_unreachable() {
    hopgraph()
        .args([
            "path", "--vertices", "2", "--edge", "0,1", "--start", "1", "--end", "0", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"length\": null"));
}

#[test]
fn test_out_of_range_edge_fails() {
    hopgraph()
        .args(["components", "--vertices", "2", "--edge", "0,9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_malformed_edge_fails() {
    hopgraph()
        .args(["components", "--vertices", "2", "--edge", "zero-one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed edge"));
}
