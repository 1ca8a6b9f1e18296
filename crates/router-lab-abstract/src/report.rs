use serde::Serialize;

/// Aggregate statistics for one simulation run. Produced once at the end of
/// the packet pass and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Packets read from the trace.
    pub incoming_packets: usize,
    /// Packets admitted to the buffer (incoming minus dropped).
    pub delivered_packets: usize,
    /// Packets rejected by drop-tail admission.
    pub dropped_packets: usize,
    /// dropped / incoming * 100; 0.0 when the trace is empty.
    pub packet_loss_pct: f64,
    /// total_queuing_delay / delivered; 0.0 when nothing was delivered.
    pub avg_queuing_delay: f64,
    /// Sum of (departure - arrival) over packets that left the buffer
    /// during the pass, in seconds.
    pub total_queuing_delay: f64,
}

impl SimulationReport {
    /// The degenerate report for a run that saw no packets at all. Defined
    /// explicitly so empty traces never produce NaN ratios.
    pub fn empty() -> Self {
        Self {
            incoming_packets: 0,
            delivered_packets: 0,
            dropped_packets: 0,
            packet_loss_pct: 0.0,
            avg_queuing_delay: 0.0,
            total_queuing_delay: 0.0,
        }
    }
}
