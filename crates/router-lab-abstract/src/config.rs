use crate::error::SimError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Buffer capacity in packets (not bytes).
    pub buffer_size: usize,
    /// Outgoing link capacity in megabits per second.
    pub capacity_mbps: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            buffer_size: 100,
            capacity_mbps: 10.0,
        }
    }
}

impl SimConfig {
    pub fn new(buffer_size: usize, capacity_mbps: f64) -> Self {
        Self {
            buffer_size,
            capacity_mbps,
        }
    }

    /// Check the engine's preconditions. Callers are expected to validate
    /// user input themselves; this is the engine's own fail-fast gate.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.buffer_size == 0 {
            return Err(SimError::InvalidConfig(
                "buffer_size must be at least 1 packet".to_string(),
            ));
        }
        if !(self.capacity_mbps.is_finite() && self.capacity_mbps > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "capacity_mbps must be positive and finite, got {}",
                self.capacity_mbps
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SimConfig;
    use crate::error::SimError;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_buffer() {
        let err = SimConfig::new(0, 10.0).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_degenerate_capacity() {
        assert!(SimConfig::new(4, 0.0).validate().is_err());
        assert!(SimConfig::new(4, -1.0).validate().is_err());
        assert!(SimConfig::new(4, f64::NAN).validate().is_err());
        assert!(SimConfig::new(4, f64::INFINITY).validate().is_err());
    }
}
