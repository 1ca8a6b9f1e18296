use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use router_lab_abstract::SimulationReport;
use router_lab_simulator::scenario_runner;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bottleneck-link router queue simulator")]
struct Args {
    /// Trace file of whitespace-separated `<arrival-time> <size-bytes>` pairs.
    trace: Option<PathBuf>,

    /// Router buffer capacity, in packets.
    #[arg(long, default_value_t = 100)]
    buffer_size: usize,

    /// Outgoing link capacity, in Mbps.
    #[arg(long, default_value_t = 10.0)]
    capacity_mbps: f64,

    /// Run a TOML scenario instead of a raw trace (mutually exclusive with a
    /// trace argument).
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Write the finished report as JSON.
    #[arg(long)]
    report_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();
    info!("router-lab-sim-cli starting…");

    if args.trace.is_some() && args.scenario.is_some() {
        anyhow::bail!("a trace argument and --scenario cannot be used together");
    }

    let report = if let Some(path) = &args.scenario {
        scenario_runner::run_scenario(path)?
    } else if let Some(path) = &args.trace {
        router_lab_simulator::run(path, args.buffer_size, args.capacity_mbps)
            .with_context(|| format!("Simulation of {} failed", path.display()))?
    } else {
        anyhow::bail!("either a trace argument or --scenario is required");
    };

    print_summary(&report);

    if let Some(out) = &args.report_out {
        write_report(out, &report)?;
    }

    Ok(())
}

fn print_summary(report: &SimulationReport) {
    println!("Incoming packets:      {}", report.incoming_packets);
    println!("Delivered packets:     {}", report.delivered_packets);
    println!("Dropped packets:       {}", report.dropped_packets);
    println!("Packet loss:           {:.2} %", report.packet_loss_pct);
    println!("Average queuing delay: {:.6} s", report.avg_queuing_delay);
    println!("Total queuing delay:   {:.6} s", report.total_queuing_delay);
}

fn write_report(path: &Path, report: &SimulationReport) -> Result<()> {
    let data = serde_json::to_vec_pretty(report).context("Failed to serialize report")?;
    fs::write(path, &data)
        .with_context(|| format!("Failed to write report file {}", path.display()))?;
    Ok(())
}
