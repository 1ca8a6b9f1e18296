pub mod config;
pub mod error;
pub mod packet;
pub mod report;
pub mod scenario;

pub use config::SimConfig;
pub use error::SimError;
pub use packet::Packet;
pub use report::SimulationReport;
pub use scenario::{RunAssertion, SimConfigOverride, TestScenario};
