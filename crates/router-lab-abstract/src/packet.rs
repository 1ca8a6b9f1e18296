use serde::{Deserialize, Serialize};

/// One unit of traffic read from a trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    /// Arrival time at the bottleneck link, in seconds. Traces are assumed
    /// pre-sorted by arrival; the simulator never re-sorts.
    pub arrival_time: f64,
    /// Transmission-completion time, in seconds. `None` until the packet is
    /// admitted to the buffer and scheduled; dropped packets never get one.
    pub departure_time: Option<f64>,
    /// Size in bytes, exactly as read from the trace. Not validated: a zero
    /// or negative size flows through the arithmetic unchanged.
    pub size_bytes: i64,
}

impl Packet {
    pub fn new(arrival_time: f64, size_bytes: i64) -> Self {
        Self {
            arrival_time,
            departure_time: None,
            size_bytes,
        }
    }

    /// Time to place this packet's bits on the link, in seconds.
    /// Capacity is in megabits per second (decimal mega, 8 bits per byte).
    pub fn transmission_time(&self, capacity_mbps: f64) -> f64 {
        self.size_bytes as f64 * 8.0 / (capacity_mbps * 1e6)
    }

    /// Elapsed time between arrival and transmission completion, including
    /// any wait in the buffer. `None` while unscheduled.
    pub fn queuing_delay(&self) -> Option<f64> {
        self.departure_time.map(|d| d - self.arrival_time)
    }
}
