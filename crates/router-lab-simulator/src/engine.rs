use router_lab_abstract::{Packet, SimConfig, SimError, SimulationReport};
use std::collections::VecDeque;
use tracing::debug;

/// Single-queue, single-server replay of a packet trace.
///
/// The engine holds a drop-tail FIFO buffer bounded in packet count and a
/// running link cursor that serializes transmissions on the one outgoing
/// link. Packets are offered in arrival order; the whole pass is a
/// synchronous forward sweep with no backtracking.
pub struct Simulator {
    config: SimConfig,
    /// Admitted packets waiting for, or undergoing, transmission. Head is
    /// the oldest admitted packet still on the link side.
    buffer: VecDeque<Packet>,
    /// Departure time of the most recently scheduled packet. A packet
    /// cannot start transmitting before the link is free, even if it
    /// arrived earlier and sat in queue.
    link_time: f64,
    incoming: usize,
    dropped: usize,
    total_queuing_delay: f64,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config,
            buffer: VecDeque::new(),
            link_time: 0.0,
            incoming: 0,
            dropped: 0,
            total_queuing_delay: 0.0,
        })
    }

    /// Offer the next packet of the trace to the link.
    ///
    /// Eviction runs first: every buffered packet whose transmission
    /// finished by this packet's arrival has already left the link, so it
    /// is popped and its queuing delay accumulated. Only then is the
    /// drop-tail admission check made against the freed buffer.
    pub fn offer(&mut self, packet: Packet) {
        self.incoming += 1;
        self.evict_departed(packet.arrival_time);

        if self.buffer.len() >= self.config.buffer_size {
            self.dropped += 1;
            debug!(
                "Buffer full, dropping packet arrived at {}s ({} bytes)",
                packet.arrival_time, packet.size_bytes
            );
            return;
        }

        let transmission = packet.transmission_time(self.config.capacity_mbps);
        let departure = self.link_time.max(packet.arrival_time) + transmission;
        self.link_time = departure;

        let mut scheduled = packet;
        scheduled.departure_time = Some(departure);
        debug!(
            "Admitted packet arrived at {}s, departs at {}s",
            scheduled.arrival_time, departure
        );
        self.buffer.push_back(scheduled);
    }

    fn evict_departed(&mut self, now: f64) {
        while let Some(head) = self.buffer.front() {
            match head.departure_time {
                Some(departure) if departure <= now => {
                    self.total_queuing_delay += departure - head.arrival_time;
                    self.buffer.pop_front();
                }
                _ => break,
            }
        }
    }

    /// Number of packets currently buffered.
    pub fn queue_len(&self) -> usize {
        self.buffer.len()
    }

    /// Close the run and produce the aggregate report.
    ///
    /// Delivered is everything that was not dropped. Packets still resident
    /// in the buffer count as delivered but contribute nothing to the
    /// queuing-delay totals; only packets evicted during the pass do. Both
    /// ratios resolve to 0.0 when their denominator is zero, so an empty or
    /// fully-dropped run yields a well-defined report rather than NaN.
    pub fn finish(self) -> SimulationReport {
        let delivered = self.incoming - self.dropped;
        let packet_loss_pct = if self.incoming > 0 {
            self.dropped as f64 / self.incoming as f64 * 100.0
        } else {
            0.0
        };
        let avg_queuing_delay = if delivered > 0 {
            self.total_queuing_delay / delivered as f64
        } else {
            0.0
        };
        SimulationReport {
            incoming_packets: self.incoming,
            delivered_packets: delivered,
            dropped_packets: self.dropped,
            packet_loss_pct,
            avg_queuing_delay,
            total_queuing_delay: self.total_queuing_delay,
        }
    }
}

/// Replay a full parsed trace against one engine instance.
pub fn run_simulation(
    packets: &[Packet],
    config: &SimConfig,
) -> Result<SimulationReport, SimError> {
    let mut sim = Simulator::new(config.clone())?;
    for packet in packets {
        sim.offer(*packet);
    }
    Ok(sim.finish())
}
