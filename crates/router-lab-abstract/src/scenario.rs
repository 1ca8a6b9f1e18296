use crate::config::SimConfig;
use crate::report::SimulationReport;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub description: String,
    /// Trace file, resolved relative to the scenario file's directory.
    pub trace: PathBuf,
    pub config: SimConfigOverride,
    pub assertions: Vec<RunAssertion>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SimConfigOverride {
    pub buffer_size: Option<usize>,
    pub capacity_mbps: Option<f64>,
}

impl SimConfigOverride {
    pub fn apply_to(&self, config: &mut SimConfig) {
        if let Some(v) = self.buffer_size {
            config.buffer_size = v;
        }
        if let Some(v) = self.capacity_mbps {
            config.capacity_mbps = v;
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunAssertion {
    /// Assert delivered-packet count is within [min, max].
    Delivered { min: usize, max: Option<usize> },
    /// Assert dropped-packet count is within [min, max].
    Dropped { min: usize, max: Option<usize> },
    /// Assert packet loss percentage does not exceed `pct`.
    LossAtMost { pct: f64 },
    /// Assert average queuing delay does not exceed `seconds`.
    AvgDelayAtMost { seconds: f64 },
}

impl RunAssertion {
    /// Check one assertion against a finished report. Returns a description
    /// of the violation, or `None` if it holds.
    pub fn check(&self, report: &SimulationReport) -> Option<String> {
        match self {
            RunAssertion::Delivered { min, max } => {
                in_range("delivered packets", report.delivered_packets, *min, *max)
            }
            RunAssertion::Dropped { min, max } => {
                in_range("dropped packets", report.dropped_packets, *min, *max)
            }
            RunAssertion::LossAtMost { pct } => (report.packet_loss_pct > *pct).then(|| {
                format!(
                    "packet loss {:.2}% exceeds limit {:.2}%",
                    report.packet_loss_pct, pct
                )
            }),
            RunAssertion::AvgDelayAtMost { seconds } => {
                (report.avg_queuing_delay > *seconds).then(|| {
                    format!(
                        "average queuing delay {:.6}s exceeds limit {:.6}s",
                        report.avg_queuing_delay, seconds
                    )
                })
            }
        }
    }
}

fn in_range(what: &str, actual: usize, min: usize, max: Option<usize>) -> Option<String> {
    if actual < min {
        return Some(format!("{what}: {actual} below minimum {min}"));
    }
    if let Some(max) = max
        && actual > max
    {
        return Some(format!("{what}: {actual} above maximum {max}"));
    }
    None
}
