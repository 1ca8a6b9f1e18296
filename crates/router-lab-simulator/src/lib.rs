pub mod engine;
pub mod scenario_runner;
pub mod trace;

pub use engine::{Simulator, run_simulation};
pub use trace::{load_trace, parse_trace};

use router_lab_abstract::{SimConfig, SimError, SimulationReport};
use std::path::Path;

/// Run one full simulation: parse the trace at `path`, replay it against a
/// `buffer_size`-packet buffer drained at `capacity_mbps`, and return the
/// aggregate report. Every invocation owns fresh state; nothing is shared
/// between runs.
pub fn run(
    path: impl AsRef<Path>,
    buffer_size: usize,
    capacity_mbps: f64,
) -> Result<SimulationReport, SimError> {
    let config = SimConfig::new(buffer_size, capacity_mbps);
    let packets = trace::load_trace(path.as_ref())?;
    engine::run_simulation(&packets, &config)
}
