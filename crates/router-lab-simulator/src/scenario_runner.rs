use anyhow::{Context, Result, bail};
use router_lab_abstract::{SimConfig, SimulationReport, TestScenario};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a TOML scenario, run it, and enforce its assertions.
///
/// The scenario's trace path is resolved relative to the scenario file's
/// directory, so scenario bundles stay relocatable. The first failed
/// assertion aborts with a description of the violation.
pub fn run_scenario(path: &Path) -> Result<SimulationReport> {
    let scenario = load_scenario(path)?;
    info!("Running scenario '{}': {}", scenario.name, scenario.description);

    let mut config = SimConfig::default();
    scenario.config.apply_to(&mut config);

    let trace_path = if scenario.trace.is_absolute() {
        scenario.trace.clone()
    } else {
        path.parent().unwrap_or(Path::new(".")).join(&scenario.trace)
    };

    let packets = crate::trace::load_trace(&trace_path)?;
    let report = crate::engine::run_simulation(&packets, &config)?;

    for assertion in &scenario.assertions {
        if let Some(violation) = assertion.check(&report) {
            bail!("scenario '{}' failed: {}", scenario.name, violation);
        }
    }

    info!(
        "Scenario '{}' passed: {} delivered, {} dropped ({:.2}% loss)",
        scenario.name, report.delivered_packets, report.dropped_packets, report.packet_loss_pct
    );
    Ok(report)
}

pub fn load_scenario(path: &Path) -> Result<TestScenario> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
    let scenario: TestScenario =
        toml::from_str(&content).context("Failed to parse scenario file")?;
    Ok(scenario)
}
