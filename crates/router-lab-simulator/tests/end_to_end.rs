//! File-backed tests for the full load-then-simulate path.

use router_lab_abstract::SimError;
use std::fs;

/// The canonical overload case from the lab handout: three 1 MB packets at
/// t=0 into a two-slot buffer on an 8 Mbps link. Each packet takes exactly
/// one second on the wire; the third arrival finds both slots occupied.
#[test]
fn overload_trace_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("overload.txt");
    fs::write(&trace, "0.0 1000000\n0.0 1000000\n0.0 1000000\n").unwrap();

    let report = router_lab_simulator::run(&trace, 2, 8.0).unwrap();
    assert_eq!(report.incoming_packets, 3);
    assert_eq!(report.delivered_packets, 2);
    assert_eq!(report.dropped_packets, 1);
    assert!((report.packet_loss_pct - 33.333).abs() < 0.01);
}

#[test]
fn empty_file_is_a_valid_empty_trace() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("empty.txt");
    fs::write(&trace, "").unwrap();

    let report = router_lab_simulator::run(&trace, 10, 8.0).unwrap();
    assert_eq!(report.incoming_packets, 0);
    assert_eq!(report.packet_loss_pct, 0.0);
    assert_eq!(report.avg_queuing_delay, 0.0);
}

#[test]
fn missing_file_is_not_an_empty_trace() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.txt");

    let err = router_lab_simulator::run(&missing, 10, 8.0).unwrap_err();
    assert!(matches!(err, SimError::TraceUnreadable { .. }));
}

#[test]
fn malformed_tail_is_silently_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("truncated.txt");
    fs::write(&trace, "0.0 500\n0.1 500\ngarbage here\n0.2 500\n").unwrap();

    let report = router_lab_simulator::run(&trace, 10, 8.0).unwrap();
    assert_eq!(report.incoming_packets, 2);
}

#[test]
fn scenario_runs_and_asserts() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("traces")).unwrap();
    fs::write(
        dir.path().join("traces/overload.txt"),
        "0.0 1000000\n0.0 1000000\n0.0 1000000\n",
    )
    .unwrap();

    let scenario_path = dir.path().join("overload.toml");
    fs::write(
        &scenario_path,
        r#"
            name = "overload"
            description = "three packets into a two-slot buffer"
            trace = "traces/overload.txt"

            [config]
            buffer_size = 2
            capacity_mbps = 8.0

            [[assertions]]
            type = "delivered"
            min = 2
            max = 2

            [[assertions]]
            type = "dropped"
            min = 1
            max = 1

            [[assertions]]
            type = "loss_at_most"
            pct = 34.0
        "#,
    )
    .unwrap();

    let report = router_lab_simulator::scenario_runner::run_scenario(&scenario_path).unwrap();
    assert_eq!(report.dropped_packets, 1);
}

#[test]
fn scenario_assertion_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("calm.txt"), "0.0 100\n5.0 100\n").unwrap();

    let scenario_path = dir.path().join("impossible.toml");
    fs::write(
        &scenario_path,
        r#"
            name = "impossible"
            description = "demands drops from a trace that has none"
            trace = "calm.txt"

            [config]
            buffer_size = 10
            capacity_mbps = 8.0

            [[assertions]]
            type = "dropped"
            min = 1
        "#,
    )
    .unwrap();

    let err = router_lab_simulator::scenario_runner::run_scenario(&scenario_path).unwrap_err();
    assert!(err.to_string().contains("impossible"));
}
